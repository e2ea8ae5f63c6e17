//! Cosine basis extraction.
//!
//! Each factor is the average linear-RGB colour of the image weighted by one
//! 2D cosine basis function. The encoder computes one factor per (x, y)
//! component pair; the first is the DC term, the rest are AC terms.

use std::f64::consts::PI;

use crate::color::srgb_to_linear;
use crate::options::{Components, PixelLayout};

/// Averaged linear RGB colour for one basis function.
pub type ColorFactor = [f64; 3];

/// Multiply every pixel by `basis(x, y)` and return the per-channel average.
///
/// `pixels` must hold `width * height * layout.channels()` bytes; the encoder
/// validates this before calling. Alpha bytes are skipped.
pub fn multiply_basis_function<F>(
    pixels: &[u8],
    layout: PixelLayout,
    width: usize,
    height: usize,
    basis: F,
) -> ColorFactor
where
    F: Fn(usize, usize) -> f64,
{
    let channels = layout.channels();
    let bytes_per_row = width * channels;
    let mut r = 0.0f64;
    let mut g = 0.0f64;
    let mut b = 0.0f64;

    for x in 0..width {
        let base_x = channels * x;
        for y in 0..height {
            let index = base_x + y * bytes_per_row;
            let weight = basis(x, y);
            r += weight * srgb_to_linear(pixels[index]);
            g += weight * srgb_to_linear(pixels[index + 1]);
            b += weight * srgb_to_linear(pixels[index + 2]);
        }
    }

    let scale = 1.0 / (width * height) as f64;
    [r * scale, g * scale, b * scale]
}

/// Precomputed `cos(PI * component * i / len)` for every component and
/// pixel index along one axis.
struct CosineTable {
    values: Vec<f64>,
    len: usize,
}

impl CosineTable {
    fn new(components: u32, len: usize) -> Self {
        let mut values = Vec::with_capacity(components as usize * len);
        for component in 0..components {
            for i in 0..len {
                values.push((PI * component as f64 * i as f64 / len as f64).cos());
            }
        }
        Self { values, len }
    }

    #[inline]
    fn row(&self, component: u32) -> &[f64] {
        let start = component as usize * self.len;
        &self.values[start..start + self.len]
    }
}

/// Compute every factor for `components`, y outer and x inner.
///
/// The first element is the DC term. With the `parallel` feature each factor
/// runs as its own rayon task; output order and values are unchanged.
pub fn extract_factors(
    pixels: &[u8],
    layout: PixelLayout,
    width: usize,
    height: usize,
    components: Components,
) -> Vec<ColorFactor> {
    let cos_x = CosineTable::new(components.x, width);
    let cos_y = CosineTable::new(components.y, height);

    let factor = |(cx, cy): (u32, u32)| {
        let normalisation = if cx == 0 && cy == 0 { 1.0 } else { 2.0 };
        let row_x = cos_x.row(cx);
        let row_y = cos_y.row(cy);
        multiply_basis_function(pixels, layout, width, height, |i, j| {
            normalisation * row_x[i] * row_y[j]
        })
    };

    let pairs = (0..components.y).flat_map(|cy| (0..components.x).map(move |cx| (cx, cy)));

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let pairs: Vec<(u32, u32)> = pairs.collect();
        let mut factors = Vec::with_capacity(components.count());
        pairs.into_par_iter().map(factor).collect_into_vec(&mut factors);
        factors
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut factors = Vec::with_capacity(components.count());
        factors.extend(pairs.map(factor));
        factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
        rgb.repeat(width * height)
    }

    #[test]
    fn test_constant_basis_is_average() {
        // Two pixels: black and white.
        let pixels = [0u8, 0, 0, 255, 255, 255];
        let factor = multiply_basis_function(&pixels, PixelLayout::Rgb, 2, 1, |_, _| 1.0);
        for channel in factor {
            assert!((channel - 0.5).abs() < 1e-12, "got {channel}");
        }
    }

    #[test]
    fn test_alpha_is_ignored() {
        let rgb = [10u8, 20, 30, 40, 50, 60];
        let rgba = [10u8, 20, 30, 0, 40, 50, 60, 255];
        let a = multiply_basis_function(&rgb, PixelLayout::Rgb, 2, 1, |x, _| x as f64 + 1.0);
        let b = multiply_basis_function(&rgba, PixelLayout::Rgba, 2, 1, |x, _| x as f64 + 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pixel_indexing_row_major() {
        // 2x2 image, only the bottom-left pixel (x=0, y=1) is red.
        let mut pixels = vec![0u8; 2 * 2 * 3];
        pixels[2 * 3] = 255;
        let factor = multiply_basis_function(&pixels, PixelLayout::Rgb, 2, 2, |x, y| {
            if x == 0 && y == 1 {
                1.0
            } else {
                0.0
            }
        });
        assert!((factor[0] - 0.25).abs() < 1e-12);
        assert_eq!(factor[1], 0.0);
        assert_eq!(factor[2], 0.0);
    }

    #[test]
    fn test_factor_count_and_dc() {
        let pixels = solid(4, 4, [255, 255, 255]);
        let factors = extract_factors(&pixels, PixelLayout::Rgb, 4, 4, Components::new(4, 3));
        assert_eq!(factors.len(), 12);
        for channel in factors[0] {
            assert!((channel - 1.0).abs() < 1e-12);
        }
        // The basis has no half-pixel offset, so a flat image still carries
        // AC energy: 2 * (cos 0 + cos pi/4 + cos pi/2 + cos 3pi/4) / 4 = 0.5.
        for index in [1, 4] {
            for channel in factors[index] {
                assert!((channel - 0.5).abs() < 1e-9, "factor {index}: {channel}");
            }
        }
    }

    #[test]
    fn test_factor_order_y_outer_x_inner() {
        // Horizontal ramp, 8 wide and 4 tall: every row is identical.
        let mut pixels = Vec::new();
        for _y in 0..4 {
            for x in 0..8u8 {
                pixels.extend_from_slice(&[x * 32, x * 32, x * 32]);
            }
        }
        let factors = extract_factors(&pixels, PixelLayout::Rgb, 8, 4, Components::new(3, 3));
        assert_eq!(factors.len(), 9);
        // Index 1 is (x=1, y=0) and varies with the ramp.
        assert!(factors[1][0].abs() > 0.05);
        // Index 6 is (x=0, y=2): cos(pi * 2 * j / 4) sums to 1 - 1 + 1 - 1 over the rows.
        for channel in factors[6] {
            assert!(channel.abs() < 1e-12, "got {channel}");
        }
    }

    #[test]
    fn test_extract_factors_matches_direct_basis() {
        let (width, height) = (7usize, 5usize);
        let pixels: Vec<u8> = (0..width * height * 3).map(|i| (i * 29 % 256) as u8).collect();
        let components = Components::new(4, 3);
        let factors = extract_factors(&pixels, PixelLayout::Rgb, width, height, components);

        let mut index = 0;
        for cy in 0..components.y {
            for cx in 0..components.x {
                let normalisation = if cx == 0 && cy == 0 { 1.0 } else { 2.0 };
                let direct = multiply_basis_function(&pixels, PixelLayout::Rgb, width, height, |i, j| {
                    normalisation
                        * (PI * cx as f64 * i as f64 / width as f64).cos()
                        * (PI * cy as f64 * j as f64 / height as f64).cos()
                });
                assert_eq!(factors[index], direct, "factor ({cx}, {cy})");
                index += 1;
            }
        }
    }

    #[test]
    fn test_cosine_table_rows() {
        let table = CosineTable::new(2, 4);
        assert_eq!(table.row(0), &[1.0, 1.0, 1.0, 1.0]);
        assert!((table.row(1)[2] - (PI / 2.0).cos()).abs() < 1e-15);
    }
}
