//! Encoding binary data as canonical hex0 source.
//!
//! Canonical source holds no comments or filler beyond a single space between
//! bytes, each written as two lowercase digits. Decoding canonical source
//! reproduces the encoded bytes exactly.

use core::fmt::{self, Write};

/// Write bytes as canonical hex0 source.
pub fn encode(r: &[u8], w: &mut impl Write) -> fmt::Result {
    let mut bytes = r.iter();

    if let Some(b) = bytes.next() {
        write!(w, "{b:02x}")?;
    }

    for b in bytes {
        write!(w, " {b:02x}")?;
    }

    Ok(())
}

/// A [`Display`](fmt::Display) adapter writing bytes as canonical hex0 source.
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a>(pub &'a [u8]);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode(self.0, f)
    }
}
