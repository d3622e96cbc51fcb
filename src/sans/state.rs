//! States accumulating hex digits into bytes.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::unit::Unit;

/// Input ended with a single hex digit pending.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Input ended midway through a byte.")]
pub struct TruncatedByte;

/// State token to decode the first hex digit of a byte.
#[derive(Debug, Default)]
pub struct ByteStart;

impl ByteStart {
    /// Transition to another state by decoding a unit.
    ///
    /// Returns this state for ignored units, a comment state for comment
    /// delimiters, and a half-byte state for hex digits.
    pub fn advance(self, r: Unit) -> Either<Either<Self, Comment<Self>>, HalfByte> {
        match r {
            Unit::Nibble(high) => Right(HalfByte { high }),
            Unit::Comment => Left(Right(Comment(self))),
            Unit::Wide | Unit::Filler => Left(Left(self)),
        }
    }
}

/// State token to decode the second hex digit of a byte.
#[derive(Debug)]
pub struct HalfByte {
    pub(super) high: u8,
}

impl HalfByte {
    /// Transition to another state by decoding a unit.
    ///
    /// Returns this state for ignored units, a comment state for comment
    /// delimiters, and for hex digits, the completed byte with a fresh initial
    /// state.
    pub fn advance(self, r: Unit) -> Either<Either<Self, Comment<Self>>, (u8, ByteStart)> {
        match r {
            Unit::Nibble(low) => Right(((self.high << 4) | low, ByteStart)),
            Unit::Comment => Left(Right(Comment(self))),
            Unit::Wide | Unit::Filler => Left(Left(self)),
        }
    }

    /// Finish decoding at the end of input, which is always an error here.
    pub fn end(self) -> TruncatedByte {
        TruncatedByte
    }
}

/// State token for a comment, remembering the state it interrupted.
///
/// The comment body is not represented in the finite-state machine. Discard
/// input through the next line break before advancing.
#[derive(Debug)]
pub struct Comment<S>(pub(super) S);

impl<S> Comment<S> {
    /// Transition back to the interrupted state once the comment body has been
    /// consumed.
    pub fn advance(self) -> S {
        self.0
    }
}
