//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as feeding input from an unusual source. See
//! [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! Input is first classified into grammar [`Unit`](unit::Unit)s. A unit is a
//! single byte for byte-oriented sources, or a single code point for
//! text-oriented sources. Anything that is not a single-width character is
//! classified as [`Wide`](unit::Unit::Wide) and can never be part of the
//! grammar.
//!
//! Decoding state is represented by non-copy tokens. Transition to another
//! state by calling the token's `advance` method with the next unit. This
//! returns a successor state token, along with a decoded byte once two hex
//! digits have been seen.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Some areas of the decoding process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Consuming a comment body. On reaching a [`Comment`](state::Comment)
//! state, the implementation must discard input through the next line break
//! (see [`LINE_BREAK`](unit::LINE_BREAK)) and fail if input ends before one
//! is found, before advancing.
//!
//! - Ending decoding. Input may only end cleanly in the initial state. Ending
//! in a [`HalfByte`](state::HalfByte) state is an error, produced by its
//! `end` method.
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

pub mod state;
pub mod unit;

/// Entrypoint to the finite-state machine.
pub type Decoder = state::ByteStart;
