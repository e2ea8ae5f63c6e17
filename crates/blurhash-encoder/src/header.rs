//! Reading the size flag back out of a BlurHash string.

use crate::base83;
use crate::error::BlurhashError;

/// Shortest valid hash: size flag, max AC flag, 4-digit DC.
const MIN_HASH_LEN: usize = 6;

/// Extract the number of X and Y components from a BlurHash string.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidLength`] if the BlurHash is shorter than
/// 6 characters, or [`BlurhashError::InvalidBase83Character`] if the size
/// flag is not a base83 digit.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::components;
/// let (cx, cy) = components("LEHV6nae2yk8pyo0adR*.7kCMdnj").unwrap();
/// assert_eq!((cx, cy), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), BlurhashError> {
    let length = blurhash.chars().count();
    let mut chars = blurhash.chars();
    let size_char = match chars.next() {
        Some(ch) if length >= MIN_HASH_LEN => ch,
        _ => {
            return Err(BlurhashError::InvalidLength {
                expected: MIN_HASH_LEN,
                actual: length,
            })
        }
    };

    let mut buf = [0u8; 4];
    let size_info = base83::decode(size_char.encode_utf8(&mut buf))?;
    let size_y = (size_info / 9) + 1;
    let size_x = (size_info % 9) + 1;
    Ok((size_x as u32, size_y as u32))
}
