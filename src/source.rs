//! Input source opening.
//!
//! Turns an [`InputSource`] into a buffered reader. The reader owns the file
//! handle, so the file is closed whenever the reader is dropped, including
//! on error paths.

use crate::error::{RcatError, Result};
use crate::options::InputSource;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Open the selected input.
///
/// `stdin` is wrapped and returned for [`InputSource::Stdin`] and dropped
/// unused otherwise.
///
/// # Error Cases
/// - File does not exist or is not readable ([`RcatError::Open`])
/// - Path points to a directory ([`RcatError::IsDirectory`])
pub fn open<'a, R: Read + 'a>(
    input: &InputSource,
    stdin: R,
) -> Result<Box<dyn BufRead + 'a>> {
    match input {
        InputSource::Stdin => {
            log::debug!("Reading from standard input");
            Ok(Box::new(BufReader::new(stdin)))
        }
        InputSource::File(path) => {
            let file = open_file(path)?;
            log::debug!("Reading from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| RcatError::open(path, e))?;

    // On Unix a directory opens fine and only fails on the first read
    let metadata = file.metadata().map_err(|e| RcatError::open(path, e))?;
    if metadata.is_dir() {
        return Err(RcatError::is_directory(path));
    }

    Ok(file)
}
