//! Decode/encode error kinds.

use std::fmt::Display;

/// Errors produced while encoding or decoding a SCALE value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The decoder ran out of input before a read completed.
    #[error("not enough data: needed {needed} byte(s), {remaining} remaining")]
    NotEnoughData {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes actually left in the input.
        remaining: usize,
    },

    /// A discriminant byte held a value outside the shape's legal set.
    #[error("unexpected value: {0}")]
    UnexpectedValue(&'static str),

    /// A sum-type index was `>=` the declared variant count.
    #[error("variant index {index} is out of range for {variant_count} variant(s)")]
    WrongTypeIndex {
        /// The index read from the wire.
        index: u8,
        /// The number of variants the sum type declares.
        variant_count: usize,
    },

    /// A length prefix would require allocating more than the configured budget.
    #[error("length {length} exceeds the allowed item budget")]
    TooManyItems {
        /// The declared length.
        length: u64,
    },

    /// A compact integer exceeded 2^536, or (in strict mode) was not minimally encoded.
    #[error("{0}")]
    ValueOutOfRange(&'static str),

    /// The caller required full consumption but bytes remained after the top-level decode.
    #[error("{remaining} byte(s) remained after decoding")]
    ExtraData {
        /// How many bytes were left over.
        remaining: usize,
    },

    /// Attempted to encode or decode a shape this codec does not support.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(&'static str),

    /// A custom error raised by a user-provided `Encode`/`Decode` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub(crate) fn not_enough_data(needed: usize, remaining: usize) -> Self {
        Error::NotEnoughData { needed, remaining }
    }

    /// Construct an [`Error::Custom`] from any displayable message.
    pub fn custom<T: Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}
