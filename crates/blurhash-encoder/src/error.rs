//! Error types for BlurHash encoding and base83 decoding.

use thiserror::Error;

/// Errors that can occur while encoding an image or decoding base83 digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurhashError {
    /// The component count is out of the valid range (1..=9).
    #[error("component count out of range: {component} = {value} (must be 1..=9)")]
    InvalidComponentCount {
        /// Which component axis ("x" or "y").
        component: &'static str,
        /// The invalid value.
        value: u32,
    },

    /// The image dimensions cannot describe a pixel buffer.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },

    /// The pixel buffer length does not match `width * height * channels`.
    #[error(
        "pixel buffer length {actual} does not match {width}x{height}x{channels} = {expected}"
    )]
    PixelBufferMismatch {
        /// The length of the buffer that was passed in.
        actual: usize,
        /// The length implied by the dimensions and layout.
        expected: usize,
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Bytes per pixel of the layout in use.
        channels: usize,
    },

    /// A character outside the base83 alphabet was encountered.
    #[error("invalid base83 character {character:?} at position {position}")]
    InvalidBase83Character {
        /// The offending character.
        character: char,
        /// Character index within the decoded string.
        position: usize,
    },

    /// The decoded base83 value does not fit in a `u64`.
    #[error("base83 value overflow decoding {input:?}")]
    Base83Overflow {
        /// The digit string that overflowed.
        input: String,
    },

    /// The BlurHash string is too short to carry a header.
    #[error("invalid BlurHash length: expected at least {expected}, got {actual}")]
    InvalidLength {
        /// The minimum length.
        expected: usize,
        /// The actual length.
        actual: usize,
    },
}

impl BlurhashError {
    /// Returns `true` for errors caused by malformed `encode` arguments.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BlurhashError::InvalidComponentCount { .. }
                | BlurhashError::InvalidDimensions { .. }
                | BlurhashError::PixelBufferMismatch { .. }
        )
    }
}
