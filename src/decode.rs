//! Decoder: a forward-only cursor over a borrowed byte span.

use crate::config::Config;
use crate::error::Error;

/// Decode a value of type `T` from `bytes`, permitting unconsumed trailing bytes.
pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let mut dec = Decoder::new(bytes);
    T::decode_from(&mut dec)
}

/// Decode a value of type `T` from `bytes`, requiring the entire input be consumed.
pub fn decode_exact<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let mut dec = Decoder::with_config(
        bytes,
        Config {
            require_full_consumption: true,
            ..Config::default()
        },
    );
    let value = T::decode_from(&mut dec)?;
    if !dec.is_empty() {
        return Err(Error::ExtraData {
            remaining: dec.remaining_len(),
        });
    }
    Ok(value)
}

/// A forward-only cursor over a borrowed byte slice.
///
/// The cursor never rewinds: each read advances past the bytes it consumed,
/// and a failed read leaves the cursor exactly where the failure occurred so
/// callers can inspect how far decoding got.
#[derive(Debug)]
pub struct Decoder<'a> {
    slice: &'a [u8],
    config: Config,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `slice` with the default [`Config`].
    pub fn new(slice: &'a [u8]) -> Self {
        Self::with_config(slice, Config::default())
    }

    /// Creates a decoder over `slice` with an explicit [`Config`].
    pub fn with_config(slice: &'a [u8], config: Config) -> Self {
        if config.require_full_consumption {
            tracing::trace!(len = slice.len(), "decoder requires full consumption");
        }
        Decoder { slice, config }
    }

    /// The policy this decoder is enforcing.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Number of bytes not yet consumed.
    pub fn remaining_len(&self) -> usize {
        self.slice.len()
    }

    /// Whether the cursor has reached the end of the input.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Reports whether at least `n` bytes remain, without consuming any.
    pub fn has_more(&self, n: usize) -> bool {
        self.slice.len() >= n
    }

    /// Returns the next byte without consuming it.
    pub fn peek_byte(&self) -> Result<u8, Error> {
        self.slice
            .first()
            .copied()
            .ok_or_else(|| Error::not_enough_data(1, 0))
    }

    /// Reads and consumes the next byte.
    pub fn next_byte(&mut self) -> Result<u8, Error> {
        let (first, rest) = self
            .slice
            .split_first()
            .ok_or_else(|| Error::not_enough_data(1, 0))?;
        self.slice = rest;
        Ok(*first)
    }

    /// Reads and consumes exactly `n` bytes, returning a borrowed slice.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.slice.len() < n {
            return Err(Error::not_enough_data(n, self.slice.len()));
        }
        let (read, rest) = self.slice.split_at(n);
        self.slice = rest;
        Ok(read)
    }

    /// Reads and consumes exactly `N` bytes into a stack-allocated array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let bytes = self.read_bytes(N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    /// Checks that `len` items of `min_element_size` bytes each would not
    /// overrun the remaining input, per spec.md §4.6 strategy 2.
    pub fn check_item_budget(&self, len: u64, min_element_size: usize) -> Result<(), Error> {
        if min_element_size == 0 {
            return if len <= self.config.max_items_zero_sized {
                Ok(())
            } else {
                Err(Error::TooManyItems { length: len })
            };
        }
        let max_len = (self.slice.len() / min_element_size) as u64;
        if len > max_len {
            Err(Error::TooManyItems { length: len })
        } else {
            Ok(())
        }
    }
}

/// A type that can be decoded from a SCALE-encoded byte stream.
///
/// This is the extension point for user-defined aggregates (spec.md §4.10):
/// provide [`decode_from`](Decode::decode_from) and the generic decode
/// surface (`decode`/`decode_exact`) works for the new type automatically.
pub trait Decode: Sized {
    /// The statically known minimum wire size of this shape, used by
    /// container decoders to bound allocation against a declared length
    /// before reading any elements (spec.md §4.6 strategy 2). Shapes that
    /// can encode in zero bytes (e.g. `()`) must override this to `0`.
    const MIN_ENCODED_LEN: usize = 1;

    /// Reads a value of `Self`'s shape from `dec`.
    fn decode_from(dec: &mut Decoder) -> Result<Self, Error>;
}
