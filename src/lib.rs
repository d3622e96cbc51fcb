#![no_std]

//! A compiler for the hex0 bootstrap notation.
//!
//! hex0 source is a stream of hexadecimal digit pairs, each becoming one
//! output byte, interleaved with line comments (starting at `;` or `#`) and
//! arbitrary filler such as whitespace, labels and addresses. It is the first
//! link in self-hosting bootstrap toolchains, where every later stage is built
//! from binaries written this way.
//!
//! Most users should begin with the functions in the [`avec`] module. These
//! decode from slices, strings and readers, and compile a reader into a
//! writer. If these prove insufficient, the underlying finite-state machine is
//! exposed in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder and compiler (default).
//! - `cli`: build the `hex0` command-line tool (default, implies `std`).

pub mod avec;
pub mod sans;
