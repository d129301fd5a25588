//! Wrapped-card image generation.
//!
//! Thin drawing layer over the `image`/`imageproc` crates: gradient
//! backgrounds, a text-rendering capability with a font-fallback chain, and
//! the 1080x1080 card composer. No business logic lives here; the cards
//! receive pre-computed statistics from the core.

use thiserror::Error;

pub mod card;
pub mod font;
pub mod gradient;

pub use card::{card_filename, render_card, CardFonts, WrappedCard};
pub use font::{resolve_renderer, BlockRenderer, FontStyle, TextRenderer, TrueTypeRenderer};
pub use gradient::{palette_for_rank, vertical_gradient};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font error: {0}")]
    Font(String),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
