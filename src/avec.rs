//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode hex0 source from byte slices, strings
//! and (with the `std` feature) readers, yielding output bytes lazily through
//! [`Bytes`]. The [`compile`] function drives a reader into a writer.
//!
//! All front ends implement [`Source`], and share a single decoding loop,
//! [`decode_next_byte`]. Implement [`Source`] to decode from anything else.

pub mod encode;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod text;

#[cfg(feature = "std")]
pub use reader::{compile, decode as decode_reader};
pub use slice::decode as decode_slice;
pub use text::decode as decode_str;

use core::iter::FusedIterator;

use either::Either::{Left, Right};
use log::trace;

use crate::sans::{Decoder, state::TruncatedByte, unit::Unit};

/// A pull-based source of grammar units.
pub trait Source {
    /// Errors occurring while reading from this source.
    type Error: From<TruncatedByte>;

    /// Read and classify the next unit, or return `None` at the end of input.
    fn next_unit(&mut self) -> Result<Option<Unit>, Self::Error>;

    /// Discard input up to and including the next line break.
    ///
    /// Must fail if input ends before a line break is found.
    fn skip_line(&mut self) -> Result<(), Self::Error>;
}

/// Decode a single byte from a source.
///
/// Returns `None` once input ends cleanly, between bytes. Input ending after a
/// single hex digit is reported as [`TruncatedByte`], converted into the
/// source's error type.
pub fn decode_next_byte<S: Source + ?Sized>(r: &mut S) -> Result<Option<u8>, S::Error> {
    let mut state = Decoder::default();

    let mut half = loop {
        let Some(unit) = r.next_unit()? else {
            return Ok(None);
        };

        state = match state.advance(unit) {
            Left(Left(state)) => state,
            Left(Right(comment)) => {
                trace!("skipping comment");
                r.skip_line()?;
                comment.advance()
            }
            Right(half) => break half,
        };
    };

    loop {
        let Some(unit) = r.next_unit()? else {
            return Err(half.end().into());
        };

        half = match half.advance(unit) {
            Left(Left(half)) => half,
            Left(Right(comment)) => {
                trace!("skipping comment");
                r.skip_line()?;
                comment.advance()
            }
            Right((byte, _)) => return Ok(Some(byte)),
        };
    }
}

/// A lazy sequence of bytes decoded from a source.
///
/// The sequence ends after input ends cleanly, or after the first error.
#[derive(Debug)]
pub struct Bytes<S> {
    source: S,
    done: bool,
}

impl<S: Source> Bytes<S> {
    /// Begin decoding from a source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            done: false,
        }
    }

    /// Borrow the underlying source, for example to inspect remaining input.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Recover the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Source> Iterator for Bytes<S> {
    type Item = Result<u8, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match decode_next_byte(&mut self.source) {
            Ok(Some(byte)) => Some(Ok(byte)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: Source> FusedIterator for Bytes<S> {}
