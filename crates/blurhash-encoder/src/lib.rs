//! # blurhash-encoder
//!
//! BlurHash encoding in pure Rust.
//!
//! [BlurHash](https://blurha.sh/) is a compact representation of a placeholder
//! for an image. This crate turns an in-memory RGB or RGBA pixel buffer into
//! a BlurHash string, and exposes the base83 codec the format is built on.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_encoder::{base83, components, encode};
//!
//! let pixels = vec![128u8; 4 * 4 * 3]; // 4x4 gray image
//! let hash = encode(&pixels, 4, 4, 4, 3).unwrap();
//! assert_eq!(hash.len(), 28);
//! assert_eq!(components(&hash).unwrap(), (4, 3));
//!
//! assert_eq!(base83::encode(83, 5), "00010");
//! assert_eq!(base83::decode("00010").unwrap(), 83);
//! ```
//!
//! ## Features
//!
//! * `parallel` - extract basis factors on the rayon thread pool.
//! * `serde` - derive `Serialize`/`Deserialize` for [`EncodeOptions`].

pub mod base83;
pub mod basis;
pub mod color;
pub mod error;
pub mod options;
pub mod quantize;

mod encode_impl;
mod header;

// Re-export primary functions at crate root.
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear};
pub use encode_impl::{encode, encode_rgba, encode_with};
pub use error::BlurhashError;
pub use header::components;
pub use options::{Components, EncodeOptions, PixelLayout};
