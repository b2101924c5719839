use std::io::{self, Read, Write};

use rcat::{cat, Cat, DisplayFlag, DisplayOptions, OptionsBuilder, RcatError};

fn options(flags: &[DisplayFlag]) -> DisplayOptions {
    OptionsBuilder::new().apply_all(flags.iter().copied()).build()
}

fn run(flags: &[DisplayFlag], input: &[u8]) -> String {
    let options = options(flags);
    let mut out = Vec::new();
    cat(&options, input, &mut out).expect("cat over in-memory input");
    String::from_utf8(out).expect("scenario output is UTF-8")
}

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write contents");
    file.flush().expect("flush contents");
    file
}

#[test]
fn plain_copy_from_stdin() {
    assert_eq!(
        run(&[], b"Lorem ipsum dolor sit amet\n"),
        "Lorem ipsum dolor sit amet\n"
    );
}

#[test]
fn missing_trailing_newline_is_added() {
    assert_eq!(run(&[], b"a\nb"), "a\nb\n");
    assert_eq!(run(&[], b""), "");
}

#[test]
fn number_all_lines() {
    assert_eq!(
        run(&[DisplayFlag::Number], b"Lorem\nipsum\ndolor"),
        "     1  Lorem\n     2  ipsum\n     3  dolor\n"
    );
    assert_eq!(
        run(&[DisplayFlag::Number], b"Lorem\n\nipsum\ndolor"),
        "     1  Lorem\n     2  \n     3  ipsum\n     4  dolor\n"
    );
}

#[test]
fn number_nonblank_lines() {
    assert_eq!(
        run(&[DisplayFlag::NumberNonblank], b"Lorem\n\nipsum\ndolor"),
        "     1  Lorem\n\n     2  ipsum\n     3  dolor\n"
    );
}

#[test]
fn show_ends_with_numbering() {
    let input = b"Lorem\n\nipsum\ndolor";

    assert_eq!(
        run(&[DisplayFlag::ShowEnds], input),
        "Lorem$\n$\nipsum$\ndolor$\n"
    );
    assert_eq!(
        run(&[DisplayFlag::Number, DisplayFlag::ShowEnds], input),
        "     1  Lorem$\n     2  $\n     3  ipsum$\n     4  dolor$\n"
    );
    assert_eq!(
        run(&[DisplayFlag::NumberNonblank, DisplayFlag::ShowEnds], input),
        "     1  Lorem$\n$\n     2  ipsum$\n     3  dolor$\n"
    );
}

#[test]
fn squeeze_blank_runs() {
    assert_eq!(run(&[DisplayFlag::SqueezeBlank], b"A\nB\n\n\nC"), "A\nB\n\nC\n");
    assert_eq!(run(&[], b"A\nB\n\n\nC"), "A\nB\n\n\nC\n");
}

#[test]
fn squeezed_lines_consume_no_numbers_or_markers() {
    assert_eq!(
        run(
            &[DisplayFlag::Number, DisplayFlag::SqueezeBlank],
            b"A\n\n\n\nB"
        ),
        "     1  A\n     2  \n     3  B\n"
    );
    assert_eq!(
        run(
            &[DisplayFlag::ShowEnds, DisplayFlag::SqueezeBlank],
            b"\n\n\nA\n\n"
        ),
        "$\nA$\n$\n"
    );
}

#[test]
fn show_nonprinting_japanese() {
    assert_eq!(
        run(&[DisplayFlag::ShowNonprinting], "あいうえお".as_bytes()),
        "M-cM-^AM-^BM-cM-^AM-^DM-cM-^AM-^FM-cM-^AM-^HM-cM-^AM-^J\n"
    );
    assert_eq!(
        run(&[DisplayFlag::ShowNonprinting], "あい\tうえお".as_bytes()),
        "M-cM-^AM-^BM-cM-^AM-^D\tM-cM-^AM-^FM-cM-^AM-^HM-cM-^AM-^J\n"
    );
}

#[test]
fn show_nonprinting_and_show_tabs() {
    assert_eq!(
        run(&[DisplayFlag::ShowTabsNonprinting], "あい\tうえお".as_bytes()),
        "M-cM-^AM-^BM-cM-^AM-^D^IM-cM-^AM-^FM-cM-^AM-^HM-cM-^AM-^J\n"
    );
}

#[test]
fn show_tabs_without_nonprinting() {
    assert_eq!(run(&[DisplayFlag::ShowTabs], b"a\tb"), "a^Ib\n");
    assert_eq!(run(&[DisplayFlag::ShowTabs], "あ\t".as_bytes()), "あ^I\n");
    assert_eq!(run(&[], b"a\tb"), "a\tb\n");
}

#[test]
fn carriage_return_is_an_ordinary_byte() {
    assert_eq!(run(&[DisplayFlag::ShowNonprinting], b"dos\r\n"), "dos^M\n");
    assert_eq!(run(&[DisplayFlag::ShowEnds], b"dos\r\n"), "dos\r$\n");
}

#[test]
fn show_all_everything_at_once() {
    assert_eq!(
        run(
            &[DisplayFlag::ShowAll, DisplayFlag::NumberNonblank],
            b"\tx\x7f\n\n\xff"
        ),
        "     1  ^Ix^?$\n$\n     2  M-^?$\n"
    );
}

#[test]
fn reads_named_file_and_ignores_stdin() {
    let file = temp_file(b"from file\n\n\nend");
    let options = DisplayOptions::builder()
        .squeeze_blank()
        .file(file.path())
        .build();
    let mut out = Vec::new();

    let summary = cat(&options, &b"from stdin\n"[..], &mut out).unwrap();

    assert_eq!(out, b"from file\n\nend\n");
    assert_eq!(summary.lines_read, 4);
    assert_eq!(summary.lines_written, 3);
}

#[test]
fn open_error_produces_no_output() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let missing = dir.path().join("missing.txt");
    let options = DisplayOptions::builder().file(&missing).build();
    let mut out = Vec::new();

    let err = cat(&options, io::empty(), &mut out).unwrap_err();

    assert!(matches!(err, RcatError::Open { .. }));
    assert!(err.to_string().starts_with(&missing.display().to_string()));
    assert!(out.is_empty());
}

/// Hands out its data, then fails instead of reporting end-of-stream.
struct FailAfter {
    data: io::Cursor<Vec<u8>>,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "device went away")),
            n => Ok(n),
        }
    }
}

#[test]
fn read_error_keeps_emitted_lines() {
    let options = DisplayOptions::builder().number().build();
    let reader = FailAfter {
        data: io::Cursor::new(b"one\ntwo\n".to_vec()),
    };
    let mut out = Vec::new();

    let err = cat(&options, reader, &mut out).unwrap_err();

    match err {
        RcatError::Read { input, source } => {
            assert_eq!(input, "-");
            assert_eq!(source.to_string(), "device went away");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(out, b"     1  one\n     2  two\n");
}

#[test]
fn engine_state_persists_across_process_calls() {
    let options = DisplayOptions::builder().number().build();
    let mut engine = Cat::new(&options);
    let mut out = Vec::new();

    engine.process(&b"a\nb\n"[..], &mut out).unwrap();
    engine.process(&b"c\n"[..], &mut out).unwrap();

    assert_eq!(out, b"     1  a\n     2  b\n     3  c\n");
    assert_eq!(engine.state().line_number(), 3);
}
