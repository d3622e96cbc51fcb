//! String-based decoder implementation.
//!
//! Unlike the byte-oriented decoders, this decoder classifies whole code
//! points, so each non-ASCII character is skipped as a single unit.

use core::str::Chars;

use thiserror::Error;

use crate::sans::{
    state::TruncatedByte,
    unit::{LINE_BREAK, Unit},
};

use super::{Bytes, Source};

/// Errors occurring while decoding from a string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Unexpectedly reached the end of the string inside a comment.
    #[error("Unexpectedly reached the end of the string.")]
    EndOfText,
    /// The string ended midway through a byte.
    #[error(transparent)]
    TruncatedByte(#[from] TruncatedByte),
}

/// A source reading code points from a string.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    r: Chars<'a>,
}

impl<'a> Text<'a> {
    /// Begin reading from the start of a string.
    pub fn new(r: &'a str) -> Self {
        Self { r: r.chars() }
    }

    /// The text not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.r.as_str()
    }
}

impl Source for Text<'_> {
    type Error = Error;

    fn next_unit(&mut self) -> Result<Option<Unit>, Error> {
        Ok(self.r.next().map(Unit::from_char))
    }

    fn skip_line(&mut self) -> Result<(), Error> {
        self.r
            .by_ref()
            .find(|&c| c == char::from(LINE_BREAK))
            .map(drop)
            .ok_or(Error::EndOfText)
    }
}

/// Decode bytes from a string of hex0 source.
///
/// This method is also re-exported as `hex0::avec::decode_str`.
pub fn decode(r: &str) -> Bytes<Text<'_>> {
    Bytes::new(Text::new(r))
}
