//! Reader-based decoder and compiler implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use log::debug;
use thiserror::Error;

use crate::sans::{
    state::TruncatedByte,
    unit::{LINE_BREAK, Unit},
};

use super::{Bytes, Source, decode_next_byte};

extern crate std;

/// Errors occurring while decoding from a reader or compiling into a writer.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader, including a comment left open at the
    /// end of input.
    #[error("Failed to read input.")]
    Read(#[source] io::Error),
    /// An error from the supplied writer.
    #[error("Failed to write output.")]
    Write(#[source] io::Error),
    /// The reader ended midway through a byte.
    #[error(transparent)]
    TruncatedByte(#[from] TruncatedByte),
}

/// A source reading bytes from a buffered reader.
#[derive(Debug)]
pub struct Reader<R> {
    r: R,
}

impl<R: BufRead> Reader<R> {
    /// Wrap a buffered reader as a source.
    pub fn new(r: R) -> Self {
        Self { r }
    }

    /// Peek at buffered input without consuming it.
    pub fn buffered(&mut self) -> io::Result<&[u8]> {
        self.r.fill_buf()
    }

    /// Recover the underlying reader.
    pub fn into_inner(self) -> R {
        self.r
    }

    /// Inspect the internal buffer, filling it first and retrying reads
    /// interrupted by a signal.
    fn with_buf<T>(&mut self, f: impl FnOnce(&[u8]) -> T) -> Result<T, Error> {
        loop {
            match self.r.fill_buf() {
                Ok(buf) => return Ok(f(buf)),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Read(err)),
            }
        }
    }
}

impl<R: BufRead> Source for Reader<R> {
    type Error = Error;

    fn next_unit(&mut self) -> Result<Option<Unit>, Error> {
        let Some(b) = self.with_buf(|buf| buf.first().copied())? else {
            return Ok(None);
        };

        self.r.consume(1);

        Ok(Some(Unit::from_byte(b)))
    }

    fn skip_line(&mut self) -> Result<(), Error> {
        loop {
            let (found, n) = self.with_buf(|buf| match buf.iter().position(|&b| b == LINE_BREAK) {
                Some(n) => (true, n + 1),
                None => (false, buf.len()),
            })?;

            if n == 0 {
                Err(Error::Read(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "comment not terminated by a line break",
                )))?;
            }

            self.r.consume(n);

            if found {
                return Ok(());
            }
        }
    }
}

/// Decode bytes from a buffered reader of hex0 source.
///
/// This method is also re-exported as `hex0::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<R: BufRead>(r: R) -> Bytes<Reader<R>> {
    Bytes::new(Reader::new(r))
}

/// Compile hex0 source from a reader, writing decoded bytes to a writer.
///
/// Both ends are buffered internally. Output is flushed before returning, even
/// on failure, so bytes decoded before an error are left in place.
///
/// This method is also re-exported as `hex0::avec::compile`.
///
/// _Requires Cargo feature `std`._
pub fn compile(r: impl Read, w: impl Write) -> Result<(), Error> {
    let mut r = Reader::new(BufReader::new(r));
    let mut w = BufWriter::new(w);

    let mut n = 0usize; // Counter of bytes written, for diagnostics.

    let result = loop {
        match decode_next_byte(&mut r) {
            Ok(Some(b)) => {
                if let Err(err) = w.write_all(&[b]) {
                    break Err(Error::Write(err));
                }
                n += 1;
            }
            Ok(None) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    let flushed = w.flush().map_err(Error::Write);

    match &result {
        Ok(()) => debug!("compiled {n} bytes"),
        Err(err) => debug!("compilation stopped after {n} bytes: {err}"),
    }

    result.and(flushed)
}
