//! Encoder configuration: pixel layout and component counts.
//!
//! With the `serde` feature enabled these types can be embedded in a
//! caller's own configuration file.

use crate::error::BlurhashError;

/// Byte layout of one pixel in the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PixelLayout {
    /// Three bytes per pixel: red, green, blue.
    #[default]
    Rgb,
    /// Four bytes per pixel: red, green, blue, alpha. Alpha is ignored.
    Rgba,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    pub const fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// Number of cosine components along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    /// Horizontal component count (1..=9).
    pub x: u32,
    /// Vertical component count (1..=9).
    pub y: u32,
}

impl Components {
    /// Smallest component count accepted on either axis.
    pub const MIN: u32 = 1;
    /// Largest component count accepted on either axis.
    pub const MAX: u32 = 9;

    /// Component counts for each axis; checked by [`Components::validate`].
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Check both axes are within `MIN..=MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`BlurhashError::InvalidComponentCount`] naming the first
    /// offending axis.
    pub fn validate(self) -> Result<Self, BlurhashError> {
        let range = Self::MIN..=Self::MAX;
        if !range.contains(&self.x) {
            return Err(BlurhashError::InvalidComponentCount {
                component: "x",
                value: self.x,
            });
        }
        if !range.contains(&self.y) {
            return Err(BlurhashError::InvalidComponentCount {
                component: "y",
                value: self.y,
            });
        }
        Ok(self)
    }

    /// Total number of factors, DC included.
    pub const fn count(self) -> usize {
        (self.x * self.y) as usize
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(4, 3)
    }
}

/// Options for [`encode_with`](crate::encode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    pub components: Components,
    pub layout: PixelLayout,
}

impl EncodeOptions {
    /// Options for `components_x` by `components_y` factors over `layout` pixels.
    pub fn new(components_x: u32, components_y: u32, layout: PixelLayout) -> Self {
        Self {
            components: Components::new(components_x, components_y),
            layout,
        }
    }
}
