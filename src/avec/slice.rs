//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::{
    state::TruncatedByte,
    unit::{LINE_BREAK, Unit},
};

use super::{Bytes, Source};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Unexpectedly reached the end of the slice inside a comment.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// The slice ended midway through a byte.
    #[error(transparent)]
    TruncatedByte(#[from] TruncatedByte),
}

/// A source reading bytes from a slice.
#[derive(Debug, Clone)]
pub struct Slice<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> Slice<'a> {
    /// Begin reading from the start of a slice.
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// The number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.i
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.r[self.i..]
    }
}

impl Source for Slice<'_> {
    type Error = Error;

    fn next_unit(&mut self) -> Result<Option<Unit>, Error> {
        let Some(&b) = self.r.get(self.i) else {
            return Ok(None);
        };

        self.i += 1;

        Ok(Some(Unit::from_byte(b)))
    }

    fn skip_line(&mut self) -> Result<(), Error> {
        match self.remaining().iter().position(|&b| b == LINE_BREAK) {
            Some(n) => {
                self.i += n + 1;
                Ok(())
            }
            None => {
                self.i = self.r.len();
                Err(Error::EndOfSlice)
            }
        }
    }
}

/// Decode bytes from a slice of hex0 source.
///
/// This method is also re-exported as `hex0::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Bytes<Slice<'_>> {
    Bytes::new(Slice::new(r))
}
