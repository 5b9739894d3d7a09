#![deny(missing_docs, missing_debug_implementations)]

//! A SCALE (Simple Concatenated Aggregate Little-Endian) codec.
//!
//! SCALE is the binary serialization format used throughout the
//! Polkadot/Substrate family of systems. This crate implements the codec's
//! encoder/decoder engine: fixed-width integers, the four-mode compact
//! integer, discriminated sum types, and length-prefixed containers over
//! in-memory byte buffers.
//!
//! # Encoding and decoding values
//!
//! Any type implementing [`Encode`] can be turned into bytes with [`encode`];
//! any type implementing [`Decode`] can be read back out with [`decode`] or
//! [`decode_exact`].
//!
//! ```
//! use scale_codec::{encode, decode};
//!
//! let bytes = encode(&(true, 69u16));
//! assert_eq!(bytes, vec![0x01, 0x45, 0x00]);
//!
//! let (flag, value): (bool, u16) = decode(&bytes).unwrap();
//! assert_eq!((flag, value), (true, 69));
//! ```
//!
//! # Compact integers
//!
//! [`Compact<T>`] routes `T`'s value through the variable-length compact
//! encoding (spec.md §4.2) instead of `T`'s native fixed width:
//!
//! ```
//! use scale_codec::{encode, decode, Compact};
//!
//! assert_eq!(encode(&Compact(63u32)), vec![0xfc]);
//! assert_eq!(encode(&Compact(64u32)), vec![0x01, 0x01]);
//! assert_eq!(decode::<Compact<u32>>(&[0xfc]).unwrap(), Compact(63));
//! ```
//!
//! # `Option<bool>` collapse
//!
//! Rust's coherence rules forbid a specialized `Option<bool>` impl
//! alongside the generic `Option<T>` one, so the single-byte collapsed form
//! (spec.md §4.3) lives on the explicit [`OptionBool`] wrapper:
//!
//! ```
//! use scale_codec::{encode, OptionBool};
//!
//! assert_eq!(encode(&OptionBool(Some(true))), vec![0x01]);
//! assert_eq!(encode(&OptionBool(Some(false))), vec![0x02]);
//! assert_eq!(encode(&OptionBool(None)), vec![0x00]);
//! ```
//!
//! # Sum types
//!
//! There is no derive macro (see DESIGN.md); user enums implement [`Encode`]
//! and [`Decode`] directly, using [`variant::encode_variant_index`] and
//! [`variant::decode_variant_index`] to handle the index byte.
//!
//! # Policy knobs
//!
//! [`Config`] controls the permissiveness knobs described in spec.md §6.2:
//! whether non-minimal compact encodings are accepted, the absolute cap on
//! zero-sized sequence elements, and whether a top-level decode must
//! consume its entire input.

pub mod compact;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod primitives;
pub mod variant;

pub use compact::{compact_len, Compact, CompactAs, CompactBigUint};
pub use config::Config;
pub use decode::{decode, decode_exact, Decode, Decoder};
pub use encode::{encode, Encode, Encoder};
pub use error::Error;
pub use primitives::OptionBool;
