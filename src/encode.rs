//! Encoder: an append-only byte builder.

use bytes::{BufMut, BytesMut};

use crate::config::Config;
use crate::error::Error;

/// Encodes `value` into a freshly allocated byte vector using the default [`Config`].
pub fn encode<T: Encode>(value: &T) -> Vec<u8> {
    let mut enc = Encoder::new();
    value.encode_to(&mut enc);
    enc.into_bytes()
}

/// An append-only byte builder.
///
/// Writes never fail on their own (the buffer lives in memory); the only
/// failure mode reachable through this type is a compact integer that
/// exceeds the 2^536 bound (spec.md §4.2), surfaced by [`Encoder::try_finish`].
#[derive(Debug)]
pub struct Encoder {
    buf: BytesMut,
    config: Config,
    error: Option<Error>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder with an empty buffer and the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an encoder with an empty buffer and an explicit [`Config`].
    pub fn with_config(config: Config) -> Self {
        Encoder {
            buf: BytesMut::new(),
            config,
            error: None,
        }
    }

    /// Creates an encoder whose buffer is pre-allocated to hold at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buf: BytesMut::with_capacity(capacity),
            config: Config::default(),
            error: None,
        }
    }

    /// The policy this encoder is following.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Appends a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    /// Appends a slice of bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Records the first fallible error encountered while encoding.
    ///
    /// Only the first error sticks; later writes continue to append bytes
    /// (those bytes are discarded once [`try_finish`](Encoder::try_finish)
    /// observes the stored error) so a single failing compact integer deep
    /// inside an aggregate does not require unwinding the whole encode. This
    /// is also how a user-provided [`Encode`] impl outside this crate
    /// reports its own encode failures (spec.md §4.8), since `encode_to`
    /// itself has no `Result` to return: call `record_error` with an
    /// [`Error::custom`] (or any other variant) and it surfaces from
    /// [`try_finish`](Encoder::try_finish).
    pub fn record_error(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Consumes the encoder, yielding the accumulated bytes.
    ///
    /// Any error recorded via [`record_error`](Encoder::record_error) (e.g. an
    /// out-of-range compact integer) is discarded along with the buffer; use
    /// [`try_finish`](Encoder::try_finish) when that failure must be observed.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    /// Consumes the encoder, yielding the accumulated bytes or the first
    /// error recorded while building them.
    pub fn try_finish(self) -> Result<Vec<u8>, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.buf.to_vec()),
        }
    }
}

/// A type that can be encoded into a SCALE byte stream.
///
/// This is the extension point for user-defined aggregates (spec.md §4.10):
/// provide [`encode_to`](Encode::encode_to) and the generic encode surface
/// (`encode`) works for the new type automatically.
pub trait Encode {
    /// Appends the wire representation of `self` to `enc`.
    fn encode_to(&self, enc: &mut Encoder);
}
