use blurhash_encoder::{EncodeOptions, PixelLayout};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert a `BlurhashError` into a Python `ValueError`.
fn to_py_err(e: blurhash_encoder::BlurhashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Encode image pixel data into a BlurHash string.
///
/// Args:
///     data: Raw pixel bytes, row-major (length must be width * height * channels).
///     width: Image width in pixels.
///     height: Image height in pixels.
///     component_x: Number of horizontal components (1..=9).
///     component_y: Number of vertical components (1..=9).
///     channels: 3 for RGB, 4 for RGBA (alpha is ignored).
///
/// Returns:
///     The BlurHash string.
#[pyfunction]
#[pyo3(signature = (data, width, height, component_x = 4, component_y = 3, channels = 3))]
fn encode(
    data: &[u8],
    width: u32,
    height: u32,
    component_x: u32,
    component_y: u32,
    channels: u8,
) -> PyResult<String> {
    let layout = match channels {
        3 => PixelLayout::Rgb,
        4 => PixelLayout::Rgba,
        other => {
            return Err(PyValueError::new_err(format!(
                "channels must be 3 or 4, got {other}"
            )))
        }
    };
    let options = EncodeOptions::new(component_x, component_y, layout);
    blurhash_encoder::encode_with(data, width, height, &options).map_err(to_py_err)
}

/// Encode a non-negative integer as a fixed-length base83 string.
#[pyfunction]
fn base83_encode(number: u64, length: usize) -> String {
    blurhash_encoder::base83::encode(number, length)
}

/// Decode a base83 string into an integer.
///
/// Raises:
///     ValueError: if a character is outside the base83 alphabet.
#[pyfunction]
fn base83_decode(string: &str) -> PyResult<u64> {
    blurhash_encoder::base83::decode(string).map_err(to_py_err)
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Returns:
///     A tuple (components_x, components_y).
#[pyfunction]
fn components(blurhash: &str) -> PyResult<(u32, u32)> {
    blurhash_encoder::components(blurhash).map_err(to_py_err)
}

/// Convert an sRGB byte value (0-255) to linear RGB (0.0-1.0).
#[pyfunction]
fn srgb_to_linear(value: u8) -> f64 {
    blurhash_encoder::srgb_to_linear(value)
}

/// Convert a linear RGB value (0.0-1.0) to an sRGB byte value (0-255).
#[pyfunction]
fn linear_to_srgb(value: f64) -> u8 {
    blurhash_encoder::linear_to_srgb(value)
}

/// BlurHash encoding (Rust-powered).
#[pymodule]
fn blurhash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(base83_encode, m)?)?;
    m.add_function(wrap_pyfunction!(base83_decode, m)?)?;
    m.add_function(wrap_pyfunction!(components, m)?)?;
    m.add_function(wrap_pyfunction!(srgb_to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(linear_to_srgb, m)?)?;
    Ok(())
}
