//! # rcat - Byte-exact file concatenation
//!
//! A `cat` that reads one file (or standard input) and writes it to standard
//! output, optionally numbering lines, marking line ends, making tabs and
//! non-printing bytes visible, and squeezing runs of blank lines.
//!
//! Input is treated as raw bytes split on `\n`; nothing is decoded.
//!
//! ## Architecture
//!
//! - [`options`] - Immutable display options and the flag combination rules
//! - [`engine`] - Line transform engine and byte notation
//! - [`source`] - Opening the selected input
//! - [`cli`] - clap command-line surface
//! - [`error`] - Centralized error types and handling
//!
//! ## Example
//!
//! ```
//! use rcat::DisplayOptions;
//!
//! let options = DisplayOptions::builder().number().build();
//! let mut out = Vec::new();
//! rcat::cat(&options, &b"Lorem\nipsum"[..], &mut out).unwrap();
//! assert_eq!(out, b"     1  Lorem\n     2  ipsum\n");
//! ```

// Core modules
pub mod error;
pub mod options;

// Line processing
pub mod engine;
pub mod source;

// Command-line surface
pub mod cli;

// Re-export commonly used types for convenience
pub use error::{RcatError, Result};

// Public API surface for external usage
pub use engine::{cat, Cat, CatSummary, LineDisposition, LineState};
pub use options::{DisplayFlag, DisplayOptions, InputSource, OptionsBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
