//! BlurHash encoding: convert an RGB or RGBA image into a BlurHash string.
//!
//! Encoding runs in fixed stages. The input is validated first, then the
//! cosine factors are extracted, quantized, and serialized to base83. A
//! failed validation stops before any pixel is read.

use log::{debug, trace};

use crate::base83;
use crate::basis::{extract_factors, ColorFactor};
use crate::error::BlurhashError;
use crate::options::{Components, EncodeOptions, PixelLayout};
use crate::quantize::{encode_ac, encode_dc, quantize_max_ac, size_flag};

/// Arguments as received from the caller.
struct Input<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    options: EncodeOptions,
}

/// Arguments whose buffer length and component counts have been checked.
struct Validated<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
    components: Components,
    layout: PixelLayout,
}

/// DC and AC factors in production order.
struct Factors {
    components: Components,
    dc: ColorFactor,
    ac: Vec<ColorFactor>,
}

/// Every integer written to the hash, in output order.
#[derive(Debug, PartialEq)]
struct Quantized {
    size_flag: u32,
    max_ac: u32,
    dc: u32,
    ac: Vec<u32>,
}

impl<'a> Input<'a> {
    fn validate(self) -> Result<Validated<'a>, BlurhashError> {
        let Input {
            pixels,
            width,
            height,
            options,
        } = self;

        let components = options.components.validate()?;

        if width == 0 || height == 0 {
            return Err(BlurhashError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be > 0",
            });
        }

        let channels = options.layout.channels();
        let expected = (width as u64)
            .checked_mul(height as u64)
            .and_then(|v| v.checked_mul(channels as u64))
            .and_then(|v| usize::try_from(v).ok())
            .ok_or(BlurhashError::InvalidDimensions {
                width,
                height,
                reason: "dimensions overflow buffer size calculation",
            })?;
        if pixels.len() != expected {
            return Err(BlurhashError::PixelBufferMismatch {
                actual: pixels.len(),
                expected,
                width,
                height,
                channels,
            });
        }

        Ok(Validated {
            pixels,
            width: width as usize,
            height: height as usize,
            components,
            layout: options.layout,
        })
    }
}

impl Validated<'_> {
    fn extract(&self) -> Factors {
        let mut factors = extract_factors(
            self.pixels,
            self.layout,
            self.width,
            self.height,
            self.components,
        )
        .into_iter();
        // Components are at least 1x1, so there is always a DC term.
        let dc = factors.next().unwrap_or_default();
        Factors {
            components: self.components,
            dc,
            ac: factors.collect(),
        }
    }
}

impl Factors {
    fn quantize(&self) -> Quantized {
        let max_ac = quantize_max_ac(&self.ac);
        let dc = encode_dc(&self.dc);
        trace!(
            "quantized max AC {} (scale {}), DC {:06x}",
            max_ac.quantized,
            max_ac.value,
            dc
        );
        Quantized {
            size_flag: size_flag(self.components),
            max_ac: max_ac.quantized,
            dc,
            ac: self
                .ac
                .iter()
                .map(|factor| encode_ac(factor, max_ac.value))
                .collect(),
        }
    }
}

impl Quantized {
    fn serialize(&self) -> String {
        let mut hash = String::with_capacity(6 + 2 * self.ac.len());
        base83::encode_into(self.size_flag as u64, 1, &mut hash);
        base83::encode_into(self.max_ac as u64, 1, &mut hash);
        base83::encode_into(self.dc as u64, 4, &mut hash);
        for &value in &self.ac {
            base83::encode_into(value as u64, 2, &mut hash);
        }
        hash
    }
}

/// Encode an image into a BlurHash string using explicit options.
///
/// # Errors
///
/// Returns a validation error (see [`BlurhashError::is_validation`]) if the
/// component counts are out of range, a dimension is zero, or the pixel
/// buffer length does not match `width * height * layout.channels()`.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::{encode_with, EncodeOptions, PixelLayout};
/// let pixels = vec![0u8; 2 * 2 * 4];
/// let options = EncodeOptions::new(1, 1, PixelLayout::Rgba);
/// assert_eq!(encode_with(&pixels, 2, 2, &options).unwrap(), "000000");
/// ```
pub fn encode_with(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &EncodeOptions,
) -> Result<String, BlurhashError> {
    debug!(
        "encoding {}x{} {:?} image with {}x{} components",
        width, height, options.layout, options.components.x, options.components.y
    );

    let input = Input {
        pixels,
        width,
        height,
        options: *options,
    };
    let validated = input.validate().map_err(|err| {
        debug!("rejecting encode arguments: {err}");
        err
    })?;

    Ok(validated.extract().quantize().serialize())
}

/// Encode an RGB image into a BlurHash string.
///
/// # Arguments
///
/// * `pixels` - Flat RGB byte array in row-major order (3 bytes per pixel).
/// * `width` - Image width in pixels.
/// * `height` - Image height in pixels.
/// * `components_x` - Number of horizontal components (1..=9).
/// * `components_y` - Number of vertical components (1..=9).
///
/// # Errors
///
/// Returns a validation error if the component counts are out of range or if
/// the pixel buffer length does not match `width * height * 3`.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::encode;
/// // A 2x2 red image
/// let pixels = [255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0];
/// let hash = encode(&pixels, 2, 2, 4, 3).unwrap();
/// assert_eq!(hash.len(), 28);
/// ```
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> Result<String, BlurhashError> {
    let options = EncodeOptions::new(components_x, components_y, PixelLayout::Rgb);
    encode_with(pixels, width, height, &options)
}

/// Encode an RGBA image into a BlurHash string. Alpha is ignored.
///
/// # Errors
///
/// Same as [`encode`], with the buffer length checked against
/// `width * height * 4`.
pub fn encode_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> Result<String, BlurhashError> {
    let options = EncodeOptions::new(components_x, components_y, PixelLayout::Rgba);
    encode_with(pixels, width, height, &options)
}
