//! Base83 encoding and decoding used by the BlurHash algorithm.
//!
//! BlurHash uses a custom base83 encoding with a specific 83-character
//! alphabet. Numbers are written most-significant digit first into a fixed
//! number of characters.

use crate::error::BlurhashError;

/// The 83-character alphabet used by BlurHash base83 encoding.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Lookup table mapping ASCII byte values to their base83 digit value.
/// Invalid characters map to `255`.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// Precomputed decode lookup table (computed at compile time).
static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Digit value of `ch`, or `None` when it is not part of the alphabet.
#[inline]
fn digit_of(ch: char) -> Option<u64> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_LUT[ch as usize] {
        255 => None,
        digit => Some(digit as u64),
    }
}

/// Decode a base83 string into an integer.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidBase83Character`] if the string contains
/// a character not in the base83 alphabet, and
/// [`BlurhashError::Base83Overflow`] if the value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::base83::decode;
/// assert_eq!(decode("00001").unwrap(), 1);
/// assert_eq!(decode("00010").unwrap(), 83);
/// ```
pub fn decode(base83_str: &str) -> Result<u64, BlurhashError> {
    let mut value: u64 = 0;
    for (position, ch) in base83_str.chars().enumerate() {
        let digit = digit_of(ch).ok_or(BlurhashError::InvalidBase83Character {
            character: ch,
            position,
        })?;
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| BlurhashError::Base83Overflow {
                input: base83_str.to_owned(),
            })?;
    }
    Ok(value)
}

/// Encode an integer into a base83 string of exactly `length` characters.
///
/// Digits above `length` are dropped, so callers pick a length wide enough
/// for the range of values they encode.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::base83::encode;
/// assert_eq!(encode(1, 5), "00001");
/// assert_eq!(encode(83, 5), "00010");
/// ```
pub fn encode(value: u64, length: usize) -> String {
    let mut result = String::with_capacity(length);
    encode_into(value, length, &mut result);
    result
}

/// Append the `length`-digit base83 form of `value` to `out`.
pub fn encode_into(value: u64, length: usize, out: &mut String) {
    out.reserve(length);
    for exponent in (0..length).rev() {
        // A divisor past u64::MAX is larger than any value: the digit is 0.
        let digit = u32::try_from(exponent)
            .ok()
            .and_then(|e| 83u64.checked_pow(e))
            .map_or(0, |divisor| value / divisor % 83);
        out.push(ALPHABET[digit as usize] as char);
    }
}
