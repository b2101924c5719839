//! Error types and handling infrastructure for rcat.
//!
//! Library code returns [`RcatError`] through the crate-wide [`Result`] alias.
//! The binary wraps these in `anyhow` at the top level to attach context and
//! turn them into a non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rcat operations.
///
/// Every failure is fatal to the current invocation; none of these variants
/// are retried.
#[derive(Error, Debug)]
pub enum RcatError {
    /// Named input could not be opened (not found, permission denied, ...)
    #[error("{}: cannot open", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Named input exists but is a directory
    #[error("{}: Is a directory", .path.display())]
    IsDirectory { path: PathBuf },

    /// Stream failure other than end-of-stream while reading lines
    #[error("{input}: read error")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    /// Output stream refused bytes
    #[error("write error")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for rcat operations.
pub type Result<T> = std::result::Result<T, RcatError>;

impl RcatError {
    /// Create an Open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create an IsDirectory error for the given path
    pub fn is_directory(path: impl Into<PathBuf>) -> Self {
        Self::IsDirectory { path: path.into() }
    }

    /// Create a Read error naming the input being read
    pub fn read(input: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            input: input.into(),
            source,
        }
    }

    /// Create a Write error
    pub fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }

    /// True when the output side was closed by the consumer (`rcat f | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Write { source } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}
