//! BlurHash Demo - Encode a synthetic image
//!
//! Run with: cargo run --example demo

use blurhash_encoder::{base83, components, encode, encode_rgba};

fn main() {
    env_logger::init();

    println!("=== BlurHash Demo ===\n");

    // A 4x4 gradient: red grows to the right, green grows downwards.
    let width = 4;
    let height = 4;
    let mut pixels = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / (width - 1) as f32) * 255.0) as u8;
            let g = ((y as f32 / (height - 1) as f32) * 255.0) as u8;
            pixels.extend_from_slice(&[r, g, 128]);
        }
    }

    println!("1. Created a {}x{} gradient image", width, height);
    println!("   Pixels (first 12 bytes): {:?}...\n", &pixels[..12]);

    let components_x = 4;
    let components_y = 3;
    let hash = encode(&pixels, width as u32, height as u32, components_x, components_y)
        .expect("Failed to encode");

    println!("2. Encoded to BlurHash: {}", hash);
    println!("   Components: {}x{}", components_x, components_y);
    println!("   Hash length: {} characters\n", hash.len());

    let (cx, cy) = components(&hash).expect("Failed to get components");
    println!("3. Extracted components from hash: {}x{}", cx, cy);
    let dc = base83::decode(&hash[2..6]).expect("Failed to decode DC");
    println!("   Average colour: #{:06x}\n", dc);

    let rgba: Vec<u8> = pixels
        .chunks(3)
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect();
    let rgba_hash = encode_rgba(&rgba, width as u32, height as u32, components_x, components_y)
        .expect("Failed to encode RGBA");
    println!("4. RGBA input encodes identically: {}", rgba_hash == hash);

    println!("\n=== Demo Complete ===");
}
