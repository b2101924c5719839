//! Byte-to-display notation used by the body transform.
//!
//! Both functions here are pure: one byte in, at most four display bytes
//! out. The encoding matches GNU `cat -v`:
//!
//! | byte          | rendered as                 |
//! |---------------|-----------------------------|
//! | 0..=31        | `^` + (byte + 64), TAB aside |
//! | 32..=126      | itself                      |
//! | 127           | `^?`                        |
//! | 128..=159     | `M-^` + (byte - 128 + 64)   |
//! | 160..=254     | `M-` + (byte - 128)         |
//! | 255           | `M-^?`                      |

const TAB: u8 = b'\t';
const DEL: u8 = 0x7f;

/// Display form of a single input byte. The longest form is `M-^?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    buf: [u8; 4],
    len: u8,
}

impl Glyph {
    const fn literal(byte: u8) -> Self {
        Self {
            buf: [byte, 0, 0, 0],
            len: 1,
        }
    }

    const fn caret(byte: u8) -> Self {
        Self {
            buf: [b'^', byte, 0, 0],
            len: 2,
        }
    }

    /// Prefix a one- or two-byte glyph with `M-`
    const fn meta(inner: Glyph) -> Self {
        Self {
            buf: [b'M', b'-', inner.buf[0], inner.buf[1]],
            len: inner.len + 2,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

/// Classify a 7-bit byte: printable, DEL or control.
const fn ascii(byte: u8, show_tabs: bool) -> Glyph {
    match byte {
        TAB if !show_tabs => Glyph::literal(TAB),
        // Newline is the delimiter, it never reaches here mid-line
        b'\n' => Glyph::literal(b'\n'),
        0..=31 => Glyph::caret(byte + 64),
        DEL => Glyph::caret(b'?'),
        _ => Glyph::literal(byte),
    }
}

/// Render a byte in show-nonprinting mode.
pub const fn nonprinting(byte: u8, show_tabs: bool) -> Glyph {
    match byte {
        0..=DEL => ascii(byte, show_tabs),
        _ => {
            let low = byte - 128;
            let inner = match low {
                0..=31 => Glyph::caret(low + 64),
                DEL => Glyph::caret(b'?'),
                _ => Glyph::literal(low),
            };
            Glyph::meta(inner)
        }
    }
}

/// Render a byte in plain mode: everything passes through except TAB when
/// tab display is on.
pub const fn plain(byte: u8, show_tabs: bool) -> Glyph {
    if byte == TAB && show_tabs {
        Glyph::caret(b'I')
    } else {
        Glyph::literal(byte)
    }
}
