//! Quantization of basis factors into the small integers a BlurHash carries.

use crate::basis::ColorFactor;
use crate::color::{linear_to_srgb, sign_pow};
use crate::options::Components;

/// Size flag: `(x - 1) + (y - 1) * 9`, in `0..=80`.
pub fn size_flag(components: Components) -> u32 {
    (components.x - 1) + (components.y - 1) * 9
}

/// Quantized maximum AC magnitude and the scale reconstructed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxAc {
    /// Value written to the hash, `0..=82`.
    pub quantized: u32,
    /// Normalisation applied to every AC channel before quantization.
    pub value: f64,
}

/// Quantize the largest AC channel value.
///
/// The maximum is taken over the signed channel values. With no AC terms the
/// flag is 0 and the scale is 1.0.
pub fn quantize_max_ac(ac: &[ColorFactor]) -> MaxAc {
    if ac.is_empty() {
        return MaxAc {
            quantized: 0,
            value: 1.0,
        };
    }

    let actual_max = ac
        .iter()
        .flat_map(|factor| factor.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let quantized = (actual_max * 166.0 - 0.5).floor().clamp(0.0, 82.0) as u32;

    MaxAc {
        quantized,
        value: (quantized as f64 + 1.0) / 166.0,
    }
}

/// Pack the DC factor as a 24-bit sRGB colour.
pub fn encode_dc(dc: &ColorFactor) -> u32 {
    let r = linear_to_srgb(dc[0]) as u32;
    let g = linear_to_srgb(dc[1]) as u32;
    let b = linear_to_srgb(dc[2]) as u32;
    (r << 16) + (g << 8) + b
}

#[inline]
fn quantize_ac_channel(value: f64, maximum_value: f64) -> u32 {
    (sign_pow(value / maximum_value, 0.5) * 9.0 + 9.5)
        .floor()
        .clamp(0.0, 18.0) as u32
}

/// Pack one AC factor as `r * 19 * 19 + g * 19 + b`, each channel in `0..=18`.
pub fn encode_ac(factor: &ColorFactor, maximum_value: f64) -> u32 {
    let quant_r = quantize_ac_channel(factor[0], maximum_value);
    let quant_g = quantize_ac_channel(factor[1], maximum_value);
    let quant_b = quantize_ac_channel(factor[2], maximum_value);
    quant_r * 19 * 19 + quant_g * 19 + quant_b
}
