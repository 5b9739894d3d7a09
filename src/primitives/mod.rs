//! `Encode`/`Decode` implementations for every shape in spec.md §3 that
//! isn't carried by its own module (the compact codec lives in
//! [`crate::compact`], sum-type dispatch in [`crate::variant`]).

use std::collections::{BTreeMap, VecDeque};

use crate::decode::{Decode, Decoder};
use crate::encode::{Encode, Encoder};
use crate::error::Error;

impl Encode for bool {
    fn encode_to(&self, enc: &mut Encoder) {
        enc.push_byte(if *self { 1 } else { 0 });
    }
}

impl Decode for bool {
    const MIN_ENCODED_LEN: usize = 1;

    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        match dec.next_byte()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            _ => Err(Error::UnexpectedValue(
                "expected a boolean byte (0x00 or 0x01)",
            )),
        }
    }
}

macro_rules! impl_fixed_int {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode_to(&self, enc: &mut Encoder) {
                    enc.push_bytes(&self.to_le_bytes());
                }
            }

            impl Decode for $ty {
                const MIN_ENCODED_LEN: usize = $width;

                fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
                    let bytes = dec.read_array::<$width>()?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }
            }
        )*
    };
}

impl_fixed_int! {
    u8 => 1, i8 => 1,
    u16 => 2, i16 => 2,
    u32 => 4, i32 => 4,
    u64 => 8, i64 => 8,
    u128 => 16, i128 => 16,
}

impl Encode for () {
    fn encode_to(&self, _enc: &mut Encoder) {}
}

impl Decode for () {
    const MIN_ENCODED_LEN: usize = 0;

    fn decode_from(_dec: &mut Decoder) -> Result<Self, Error> {
        Ok(())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode_to(&self, enc: &mut Encoder) {
        match self {
            None => enc.push_byte(0),
            Some(value) => {
                enc.push_byte(1);
                value.encode_to(enc);
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    const MIN_ENCODED_LEN: usize = 1;

    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        match dec.next_byte()? {
            0 => Ok(None),
            1 => Ok(Some(T::decode_from(dec)?)),
            _ => Err(Error::UnexpectedValue(
                "expected an option discriminant (0 or 1)",
            )),
        }
    }
}

/// `Option<bool>` collapsed into a single byte (spec.md §4.3): `0 = absent`,
/// `1 = true`, `2 = false`. Rust's coherence rules forbid specializing the
/// blanket `Option<T>` impl above for `T = bool` directly, so — matching
/// the convention the wire format's reference ecosystem uses for the same
/// reason — the collapsed form lives on this explicit wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionBool(pub Option<bool>);

impl Encode for OptionBool {
    fn encode_to(&self, enc: &mut Encoder) {
        let byte = match self.0 {
            None => 0,
            Some(true) => 1,
            Some(false) => 2,
        };
        enc.push_byte(byte);
    }
}

impl Decode for OptionBool {
    const MIN_ENCODED_LEN: usize = 1;

    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        match dec.next_byte()? {
            0 => Ok(OptionBool(None)),
            1 => Ok(OptionBool(Some(true))),
            2 => Ok(OptionBool(Some(false))),
            _ => Err(Error::UnexpectedValue(
                "expected an Option<bool> discriminant (0, 1, or 2)",
            )),
        }
    }
}

impl<T: Encode> Encode for [T] {
    fn encode_to(&self, enc: &mut Encoder) {
        crate::compact::encode_len(self.len(), enc);
        for item in self {
            item.encode_to(enc);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to(&self, enc: &mut Encoder) {
        self.as_slice().encode_to(enc);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        let len = crate::compact::decode_len(dec)?;
        dec.check_item_budget(len, T::MIN_ENCODED_LEN)?;
        let mut items = Vec::with_capacity(len.min(4096) as usize);
        for _ in 0..len {
            items.push(T::decode_from(dec)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode_to(&self, enc: &mut Encoder) {
        crate::compact::encode_len(self.len(), enc);
        for item in self {
            item.encode_to(enc);
        }
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        Ok(VecDeque::from(Vec::<T>::decode_from(dec)?))
    }
}

impl Encode for str {
    fn encode_to(&self, enc: &mut Encoder) {
        self.as_bytes().encode_to(enc);
    }
}

impl Encode for String {
    fn encode_to(&self, enc: &mut Encoder) {
        self.as_str().encode_to(enc);
    }
}

impl Decode for String {
    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        let bytes = Vec::<u8>::decode_from(dec)?;
        String::from_utf8(bytes)
            .map_err(|_| Error::UnexpectedValue("string payload is not valid UTF-8"))
    }
}

impl<K: Encode + Ord, V: Encode> Encode for BTreeMap<K, V> {
    fn encode_to(&self, enc: &mut Encoder) {
        crate::compact::encode_len(self.len(), enc);
        for (key, value) in self {
            key.encode_to(enc);
            value.encode_to(enc);
        }
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        let len = crate::compact::decode_len(dec)?;
        let min_pair_size = K::MIN_ENCODED_LEN + V::MIN_ENCODED_LEN;
        dec.check_item_budget(len, min_pair_size)?;
        let mut map = BTreeMap::new();
        for _ in 0..len {
            let key = K::decode_from(dec)?;
            let value = V::decode_from(dec)?;
            // Last write wins on duplicate keys (spec.md §4.6).
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_to(&self, enc: &mut Encoder) {
        for item in self {
            item.encode_to(enc);
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    const MIN_ENCODED_LEN: usize = 0; // conservative: per-field widths vary with N

    fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode_from(dec)?);
        }
        items
            .try_into()
            .map_err(|_| Error::UnsupportedShape("fixed array length mismatch"))
    }
}

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            fn encode_to(&self, enc: &mut Encoder) {
                $(self.$idx.encode_to(enc);)+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            const MIN_ENCODED_LEN: usize = 0 $(+ <$name as Decode>::MIN_ENCODED_LEN)+;

            fn decode_from(dec: &mut Decoder) -> Result<Self, Error> {
                Ok(($(<$name as Decode>::decode_from(dec)?,)+))
            }
        }
    };
}

impl_tuple!(A:0);
impl_tuple!(A:0, B:1);
impl_tuple!(A:0, B:1, C:2);
impl_tuple!(A:0, B:1, C:2, D:3);
impl_tuple!(A:0, B:1, C:2, D:3, E:4);
impl_tuple!(A:0, B:1, C:2, D:3, E:4, F:5);
impl_tuple!(A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_tuple!(A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::encode::encode;

    #[test]
    fn bool_round_trips() {
        assert_eq!(encode(&true), vec![0x01]);
        assert_eq!(encode(&false), vec![0x00]);
        assert!(decode::<bool>(&[0x01]).unwrap());
        assert!(decode::<bool>(&[0x02]).is_err());
    }

    #[test]
    fn fixed_width_integers_are_little_endian() {
        assert_eq!(encode(&69u16), vec![0x45, 0x00]);
        assert_eq!(encode(&(-1i16)), vec![0xff, 0xff]);
        assert_eq!(decode::<u16>(&[0x45, 0x00]).unwrap(), 69u16);
    }

    #[test]
    fn option_round_trips_and_rejects_bad_discriminant() {
        assert_eq!(encode(&Some(3u8)), vec![0x01, 0x03]);
        assert_eq!(encode(&(None::<u8>)), vec![0x00]);
        assert!(decode::<Option<u8>>(&[0x02]).is_err());
    }

    #[test]
    fn option_bool_collapses_to_one_byte() {
        assert_eq!(encode(&OptionBool(Some(true))), vec![0x01]);
        assert_eq!(encode(&OptionBool(Some(false))), vec![0x02]);
        assert_eq!(encode(&OptionBool(None)), vec![0x00]);
        assert!(decode::<OptionBool>(&[0x03]).is_err());
    }

    #[test]
    fn sequence_of_u16_matches_spec_vector() {
        let value: Vec<u16> = vec![1, 2, 3, 4];
        assert_eq!(
            encode(&value),
            vec![0x10, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00]
        );
        assert_eq!(decode::<Vec<u16>>(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn vec_deque_round_trips_like_vec() {
        let value: VecDeque<u16> = VecDeque::from(vec![1, 2, 3, 4]);
        assert_eq!(encode(&value), encode(&Vec::from(value.clone())));
        assert_eq!(decode::<VecDeque<u16>>(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn bit_sequence_is_a_plain_vec_of_bool() {
        let value = vec![true, false, true];
        assert_eq!(encode(&value), vec![0x0c, 0x01, 0x00, 0x01]);
        assert_eq!(decode::<Vec<bool>>(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn string_matches_spec_vector() {
        let value = "hello".to_string();
        assert_eq!(encode(&value), vec![0x14, 0x68, 0x65, 0x6c, 0x6c, 0x6f]);
        assert_eq!(decode::<String>(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn string_decode_rejects_invalid_utf8_instead_of_replacing_it() {
        // length 1, followed by a lone continuation byte: not valid UTF-8.
        let bytes = [0x04, 0x80];
        assert!(matches!(
            decode::<String>(&bytes).unwrap_err(),
            Error::UnexpectedValue(_)
        ));
    }

    #[test]
    fn map_duplicate_keys_last_write_wins() {
        // Hand-built wire bytes: 2 pairs, (0u8 -> 1u8), (0u8 -> 2u8).
        let bytes = vec![0x08, 0x00, 0x01, 0x00, 0x02];
        let map = decode::<BTreeMap<u8, u8>>(&bytes).unwrap();
        assert_eq!(map.get(&0u8), Some(&2u8));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn fixed_array_round_trips_without_length_prefix() {
        let value: [u16; 3] = [10, 20, 30];
        let bytes = encode(&value);
        assert_eq!(bytes.len(), 6); // no compact length prefix
        assert_eq!(decode::<[u16; 3]>(&bytes).unwrap(), value);
    }

    #[test]
    fn fixed_array_short_input_fails() {
        let bytes = [10u8, 0]; // only one u16 worth of data
        assert!(decode::<[u16; 2]>(&bytes).is_err());
    }

    #[test]
    fn tuple_round_trips_in_declaration_order() {
        let value = (true, 7u8, "hi".to_string());
        let bytes = encode(&value);
        assert_eq!(decode::<(bool, u8, String)>(&bytes).unwrap(), value);
    }

    #[test]
    fn adversarial_length_prefix_rejected_before_allocating() {
        // Declares a length of (2^64-1)/4 encoded as compact; remaining bytes: 0.
        let bytes = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let err = decode::<Vec<u8>>(&bytes).unwrap_err();
        assert!(matches!(err, Error::TooManyItems { .. }));
    }
}
