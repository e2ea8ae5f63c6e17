//! Color space conversion utilities for sRGB and linear RGB.
//!
//! sRGB-to-linear is served from a 256-entry table filled on first use with
//! the exact transfer curve. Linear-to-sRGB is computed from the formula and
//! truncates after adding 0.5; reference hashes depend on that rounding.

use std::sync::OnceLock;

/// Exact sRGB transfer curve for a byte value.
fn srgb_to_linear_exact(value: u8) -> f64 {
    let v = value as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_linear_lut() -> &'static [f64; 256] {
    static LUT: OnceLock<[f64; 256]> = OnceLock::new();
    LUT.get_or_init(|| {
        let mut lut = [0.0f64; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = srgb_to_linear_exact(i as u8);
        }
        lut
    })
}

/// Convert an sRGB byte value (0..=255) to linear RGB (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurhash_encoder::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    srgb_to_linear_lut()[value as usize]
}

/// Convert a linear RGB value to an sRGB byte value (0..=255).
///
/// The input is clamped to \[0.0, 1.0\] before the inverse curve is applied.
/// The result is `trunc(srgb * 255 + 0.5)`, not round-half-even.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(-0.5), 0);
/// ```
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let srgb = if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    // `as` truncates toward zero; NaN becomes 0.
    let truncated = (srgb * 255.0 + 0.5) as i64;
    truncated.clamp(0, 255) as u8
}

/// Compute `sign(value) * |value|^exp`.
///
/// This preserves the sign of the input while raising the absolute value
/// to the given exponent.
///
/// # Examples
///
/// ```
/// use blurhash_encoder::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-10);
/// assert!((sign_pow(-4.0, 0.5) - (-2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}
