//! rcat - Byte-exact file concatenation
//!
//! Copies one file, or standard input, to standard output.

use anyhow::{Context, Result};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG controls verbosity
    env_logger::init();

    // Usage errors exit with status 2, --help/--version with 0
    let matches = rcat::cli::command().get_matches();
    let options = rcat::cli::options_from_matches(&matches);
    log::debug!("Resolved options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    match rcat::cat(&options, stdin.lock(), writer) {
        Ok(_) => Ok(()),
        Err(e) if e.is_broken_pipe() => {
            log::debug!("Output closed early: {}", e);
            Ok(())
        }
        Err(e) => Err(e)
            .with_context(|| format!("cannot display {}", options.input().display_name())),
    }
}
