//! Synthetic pixel data for tests
//!
//! Deterministic generators standing in for decoded test images.

use colorfinder_core::Rgb;

/// Horizontal red ramp, vertical green ramp, blue varying along the diagonal
pub fn color_gradient(w: u32, h: u32) -> Vec<Rgb> {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let r = ((x * 255) / w.max(1)) as u8;
            let g = ((y * 255) / h.max(1)) as u8;
            let b = (128u32.wrapping_add((x + y) * 64 / (w + h).max(1))) as u8;
            pixels.push(Rgb::new(r, g, b));
        }
    }
    pixels
}

/// Image made of a few flat colors in vertical bands, with `weights[i]`
/// columns of `colors[i]` repeated across `h` rows.
pub fn color_bands(colors: &[Rgb], weights: &[u32], h: u32) -> Vec<Rgb> {
    let mut row = Vec::new();
    for (color, &weight) in colors.iter().zip(weights) {
        row.extend(std::iter::repeat_n(*color, weight as usize));
    }
    let mut pixels = Vec::with_capacity(row.len() * h as usize);
    for _ in 0..h {
        pixels.extend_from_slice(&row);
    }
    pixels
}

/// Pseudo-random pixels from a linear congruential generator
pub fn noise(count: usize, seed: u32) -> Vec<Rgb> {
    let mut state = 1_103_515_245u32.wrapping_mul(seed).wrapping_add(12345);
    let mut next = || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        ((state >> 16) & 0xff) as u8
    };
    (0..count).map(|_| Rgb::new(next(), next(), next())).collect()
}

/// RGBA bytes for `pixels`, all fully opaque
pub fn to_rgba_bytes(pixels: &[Rgb]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, 255])
        .collect()
}
