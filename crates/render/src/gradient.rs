//! Gradient backgrounds and the card color palette.

use image::{Rgb, RgbImage};

/// The five card gradients, cycled by rank: pink/orange, blue/purple,
/// yellow/teal, purple/pink, orange/pink.
pub const PALETTE: [(Rgb<u8>, Rgb<u8>); 5] = [
    (Rgb([255, 99, 132]), Rgb([255, 159, 64])),
    (Rgb([54, 162, 235]), Rgb([153, 102, 255])),
    (Rgb([255, 206, 86]), Rgb([75, 192, 192])),
    (Rgb([153, 102, 255]), Rgb([255, 99, 132])),
    (Rgb([255, 159, 64]), Rgb([255, 99, 132])),
];

/// Gradient pair for a 1-based rank, cycling through [`PALETTE`].
pub fn palette_for_rank(rank: usize) -> (Rgb<u8>, Rgb<u8>) {
    PALETTE[rank.saturating_sub(1) % PALETTE.len()]
}

/// Fill a `width` x `height` canvas with a top-to-bottom linear gradient.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        let ratio = if height <= 1 {
            0.0
        } else {
            y as f32 / height as f32
        };
        Rgb([
            lerp(top.0[0], bottom.0[0], ratio),
            lerp(top.0[1], bottom.0[1], ratio),
            lerp(top.0[2], bottom.0[2], ratio),
        ])
    })
}

fn lerp(a: u8, b: u8, ratio: f32) -> u8 {
    (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8
}
