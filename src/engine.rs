//! Line transform engine.
//!
//! [`Cat`] reads raw lines (bytes up to, not including, `\n`) and writes each
//! one back out after applying the [`DisplayOptions`]. Two counters carry
//! across lines for the whole invocation: the output line number and the
//! run length of consecutive blank lines.

pub mod notation;

use crate::error::{RcatError, Result};
use crate::options::DisplayOptions;
use crate::source;
use bstr::ByteSlice;
use std::io::{BufRead, Read, Write};

/// Initial capacity of the per-line read and output buffers
const LINE_CAPACITY: usize = 1024;

/// Cross-line state for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    line_number: u64,
    consecutive_blank: u64,
}

impl LineState {
    /// Last line number handed out (0 before the first numbered line)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Length of the current run of blank lines
    pub fn consecutive_blank(&self) -> u64 {
        self.consecutive_blank
    }
}

/// What happened to a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// The line was rendered into the output buffer
    Emitted,
    /// The line was dropped by blank squeezing; the buffer is untouched
    Suppressed,
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatSummary {
    pub lines_read: u64,
    pub lines_written: u64,
}

/// The per-invocation transform engine
#[derive(Debug)]
pub struct Cat<'a> {
    options: &'a DisplayOptions,
    state: LineState,
}

impl<'a> Cat<'a> {
    pub fn new(options: &'a DisplayOptions) -> Self {
        Self {
            options,
            state: LineState::default(),
        }
    }

    pub fn state(&self) -> LineState {
        self.state
    }

    /// Transform one raw line and append the result, newline included, to `out`.
    ///
    /// Squeezing is decided before numbering so suppressed lines never
    /// consume a line number.
    pub fn transform_line(&mut self, line: &[u8], out: &mut Vec<u8>) -> LineDisposition {
        let options = self.options;
        let blank = line.is_empty();

        if blank {
            self.state.consecutive_blank += 1;
            if options.squeeze_blank() && self.state.consecutive_blank >= 2 {
                return LineDisposition::Suppressed;
            }
        } else {
            self.state.consecutive_blank = 0;
        }

        if options.number() && !(blank && options.number_nonblank()) {
            self.state.line_number += 1;
            out.extend_from_slice(format!("{:>6}  ", self.state.line_number).as_bytes());
        }

        if !blank {
            self.render_body(line, out);
        }

        if options.show_ends() {
            out.push(b'$');
        }
        out.push(b'\n');

        LineDisposition::Emitted
    }

    fn render_body(&self, line: &[u8], out: &mut Vec<u8>) {
        let show_tabs = self.options.show_tabs();

        if self.options.show_nonprinting() {
            out.reserve(line.len());
            for &byte in line {
                out.extend_from_slice(notation::nonprinting(byte, show_tabs).as_bytes());
            }
        } else if show_tabs {
            let tab = notation::plain(b'\t', true);
            let mut start = 0;
            for pos in memchr::memchr_iter(b'\t', line) {
                out.extend_from_slice(&line[start..pos]);
                out.extend_from_slice(tab.as_bytes());
                start = pos + 1;
            }
            out.extend_from_slice(&line[start..]);
        } else {
            out.extend_from_slice(line);
        }
    }

    /// Run the engine over an open reader until end-of-stream.
    ///
    /// A read failure flushes what was already emitted and then returns
    /// [`RcatError::Read`]; nothing is rolled back.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<CatSummary> {
        let mut summary = CatSummary::default();
        let mut line = Vec::with_capacity(LINE_CAPACITY);
        let mut out = Vec::with_capacity(LINE_CAPACITY);

        loop {
            line.clear();
            let read = match reader.read_until(b'\n', &mut line) {
                Ok(read) => read,
                Err(e) => {
                    if let Err(flush_err) = writer.flush() {
                        log::warn!("Failed to flush output after read error: {}", flush_err);
                    }
                    return Err(RcatError::read(self.options.input().display_name(), e));
                }
            };

            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            let raw = line.strip_suffix(b"\n").unwrap_or(&line[..]);

            out.clear();
            match self.transform_line(raw, &mut out) {
                LineDisposition::Emitted => {
                    log::trace!("line {}: {:?}", summary.lines_read, raw.as_bstr());
                    writer.write_all(&out).map_err(RcatError::write)?;
                    summary.lines_written += 1;
                }
                LineDisposition::Suppressed => {
                    log::trace!("line {}: squeezed", summary.lines_read);
                }
            }
        }

        writer.flush().map_err(RcatError::write)?;
        Ok(summary)
    }
}

/// Open the input selected by `options` and copy it to `stdout`.
///
/// `stdin` is only read when the options select standard input; passing the
/// streams in keeps the engine independent of the process-wide handles.
pub fn cat<R: Read, W: Write>(
    options: &DisplayOptions,
    stdin: R,
    stdout: W,
) -> Result<CatSummary> {
    let reader = source::open(options.input(), stdin)?;
    let summary = Cat::new(options).process(reader, stdout)?;
    log::debug!(
        "{}: read {} lines, wrote {}",
        options.input().display_name(),
        summary.lines_read,
        summary.lines_written
    );
    Ok(summary)
}
