//! Sum-type (tagged union) dispatch helpers (spec.md §4.4).
//!
//! Sum types aren't a built-in Rust shape the way tuples or `Vec<T>` are —
//! each user enum writes its own `Encode`/`Decode` impl, matching on itself
//! to pick the index and payload. These two functions carry the one
//! repeated piece of that boilerplate: writing the index byte, and
//! validating it against the declared variant count on the way back in.

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::Error;

/// Writes the one-byte variant index. `index` must be `< 256`, which
/// spec.md §4.4 already guarantees by construction (sum types exceeding
/// 256 variants are out of scope).
pub fn encode_variant_index(index: u8, enc: &mut Encoder) {
    enc.push_byte(index);
}

/// Reads and validates a variant index against the declared variant count,
/// failing with [`Error::WrongTypeIndex`] when the index is out of range.
pub fn decode_variant_index(dec: &mut Decoder, variant_count: usize) -> Result<u8, Error> {
    let index = dec.next_byte()?;
    if (index as usize) >= variant_count {
        return Err(Error::WrongTypeIndex {
            index,
            variant_count,
        });
    }
    Ok(index)
}
