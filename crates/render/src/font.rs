//! Text rendering capability with a font-fallback chain.
//!
//! The cards need exactly one capability: draw a string at a pixel size.
//! [`TextRenderer`] captures that; providers are tried in order until one
//! loads. [`TrueTypeRenderer`] wraps a system TrueType font via `ab_glyph`,
//! and [`BlockRenderer`] is the terminal fallback -- a built-in 5x7 block
//! glyph set that can always render, so font resolution is never fatal.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::RenderError;

/// The single capability the card composer needs.
pub trait TextRenderer {
    /// Rendered size of `text` at `px` pixels, as `(width, height)`.
    fn measure(&self, text: &str, px: f32) -> (u32, u32);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, px: f32, color: Rgb<u8>, text: &str);
}

/// Font weight classes the cards use, each with its own candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    UltraBold,
}

impl FontStyle {
    /// Ordered candidate font paths, widest and boldest first. Covers the
    /// macOS locations the diary was originally processed on plus common
    /// Linux distributions.
    pub fn candidate_paths(self) -> &'static [&'static str] {
        match self {
            FontStyle::UltraBold => &[
                "/System/Library/Fonts/Supplemental/Impact.ttf",
                "/System/Library/Fonts/Supplemental/Arial Black.ttf",
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
            ],
            FontStyle::Bold => &[
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "/System/Library/Fonts/Supplemental/Trebuchet MS Bold.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
            ],
            FontStyle::Regular => &[
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
            ],
        }
    }
}

/// Walk the provider chain for a style: caller-supplied paths first, then
/// the style's built-in candidates, then the block fallback.
///
/// Never fails; the worst case is the built-in block renderer.
pub fn resolve_renderer(style: FontStyle, extra_paths: &[PathBuf]) -> Box<dyn TextRenderer> {
    for path in extra_paths {
        if let Ok(renderer) = TrueTypeRenderer::load(path) {
            return Box::new(renderer);
        }
    }
    for path in style.candidate_paths() {
        if let Ok(renderer) = TrueTypeRenderer::load(Path::new(path)) {
            return Box::new(renderer);
        }
    }
    Box::new(BlockRenderer)
}

// ---------------------------------------------------------------------------
// TrueType provider
// ---------------------------------------------------------------------------

/// [`TextRenderer`] backed by a TrueType font loaded from disk.
pub struct TrueTypeRenderer {
    font: FontVec,
}

impl TrueTypeRenderer {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))?;
        Ok(Self { font })
    }
}

impl TextRenderer for TrueTypeRenderer {
    fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        text_size(PxScale::from(px), &self.font, text)
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, px: f32, color: Rgb<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, PxScale::from(px), &self.font, text);
    }
}

// ---------------------------------------------------------------------------
// Block glyph fallback
// ---------------------------------------------------------------------------

const GLYPH_ROWS: usize = 7;
const GLYPH_COLS: u32 = 5;
/// Columns per character cell, including one column of spacing.
const GLYPH_ADVANCE: u32 = 6;

/// Built-in 5x7 block glyphs (low 5 bits of each row, MSB is the left
/// column). Lowercase folds to uppercase; unmapped characters render as a
/// filled dot.
fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        ' ' => [0x00; 7],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        _ => [0x00, 0x0E, 0x1F, 0x1F, 0x1F, 0x0E, 0x00],
    }
}

/// The terminal fallback renderer. Scales the 5x7 glyphs to approximate the
/// requested pixel height.
pub struct BlockRenderer;

impl BlockRenderer {
    /// Integer pixels per glyph cell at the requested size, at least 1.
    fn cell_scale(px: f32) -> u32 {
        ((px / GLYPH_ROWS as f32).round() as u32).max(1)
    }
}

impl TextRenderer for BlockRenderer {
    fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        let scale = Self::cell_scale(px);
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, 0);
        }
        // The final character does not need trailing spacing.
        (
            (chars * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_COLS)) * scale,
            GLYPH_ROWS as u32 * scale,
        )
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, px: f32, color: Rgb<u8>, text: &str) {
        let scale = Self::cell_scale(px);

        let mut pen_x = x;
        for c in text.chars() {
            let rows = glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                        continue;
                    }
                    let px_x = pen_x + (col * scale) as i32;
                    let px_y = y + (row as u32 * scale) as i32;
                    if px_x < 0 || px_y < 0 {
                        continue;
                    }
                    draw_filled_rect_mut(
                        canvas,
                        Rect::at(px_x, px_y).of_size(scale, scale),
                        color,
                    );
                }
            }
            pen_x += (GLYPH_ADVANCE * scale) as i32;
        }
    }
}
