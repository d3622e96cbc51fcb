//! Classification of input into grammar units.

use tartan_bitfield::bitfield;

/// The character ending a comment.
pub const LINE_BREAK: u8 = b'\n';

/// A single unit of input, as seen by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A hexadecimal digit, holding its value (`0..=15`).
    Nibble(u8),
    /// The start of a line comment.
    Comment,
    /// Part or all of a multi-unit character, which is never grammar.
    Wide,
    /// Any other character, ignored by the decoder.
    Filler,
}

impl Unit {
    /// Classify a byte from a byte-oriented source.
    ///
    /// Bytes with the high bit set belong to a multi-byte sequence and are
    /// classified individually as [`Unit::Wide`].
    pub fn from_byte(r: u8) -> Self {
        bitfield! {
            struct Octet(u8) {
                [7] is_wide,
            }
        }

        if Octet(r).is_wide() {
            Self::Wide
        } else {
            Self::from_ascii(r)
        }
    }

    /// Classify a code point from a text-oriented source.
    ///
    /// Code points encoding to more than one byte are classified as a whole
    /// as [`Unit::Wide`].
    pub fn from_char(r: char) -> Self {
        if r.len_utf8() != 1 {
            Self::Wide
        } else {
            Self::from_ascii(r as u8)
        }
    }

    fn from_ascii(r: u8) -> Self {
        if is_comment_delimiter(r) {
            Self::Comment
        } else if let Some(n) = decode_nibble(r) {
            Self::Nibble(n)
        } else {
            Self::Filler
        }
    }
}

/// Get the value of a hexadecimal digit, in either case.
pub fn decode_nibble(r: u8) -> Option<u8> {
    match r {
        b'0'..=b'9' => Some(r - b'0'),
        b'a'..=b'f' => Some(r - b'a' + 10),
        b'A'..=b'F' => Some(r - b'A' + 10),
        _ => None,
    }
}

/// Check whether a character starts a line comment.
pub fn is_comment_delimiter(r: u8) -> bool {
    matches!(r, b';' | b'#')
}
