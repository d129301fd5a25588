//! The 1080x1080 wrapped-card composer.
//!
//! Layout follows the original cards: compact header, an oversized rank
//! number, the title-cased food name (split over two lines when long), the
//! count, and the daily-average / share footer. All strings arrive
//! pre-computed; this module only measures, centers, and draws.

use image::{Rgb, RgbImage};

use crate::font::TextRenderer;
use crate::gradient::{palette_for_rank, vertical_gradient};

pub const CARD_WIDTH: u32 = 1080;
pub const CARD_HEIGHT: u32 = 1080;

const HEADER_TEXT: &str = "FOOD DIARY WRAPPED 24-25";
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

const HEADER_PX: f32 = 40.0;
const RANK_PX: f32 = 450.0;
const FOOD_PX: f32 = 120.0;
const COUNT_PX: f32 = 80.0;
const STATS_PX: f32 = 50.0;

/// Names longer than this split across two centered lines.
const SPLIT_THRESHOLD: usize = 12;

/// One card's worth of pre-computed data.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedCard {
    /// 1-based rank; also selects the gradient.
    pub rank: usize,
    /// Normalized (lowercase) food name; title-cased for display.
    pub name: String,
    pub count: u64,
    pub daily_avg: f64,
    pub share_pct: f64,
}

/// The two font weights a card draws with.
pub struct CardFonts {
    pub ultra_bold: Box<dyn TextRenderer>,
    pub bold: Box<dyn TextRenderer>,
}

/// Render one card onto a fresh gradient canvas.
pub fn render_card(card: &WrappedCard, fonts: &CardFonts) -> RgbImage {
    let (top, bottom) = palette_for_rank(card.rank);
    let mut img = vertical_gradient(CARD_WIDTH, CARD_HEIGHT, top, bottom);

    // Compact header at the top.
    draw_centered(&mut img, fonts.ultra_bold.as_ref(), HEADER_TEXT, HEADER_PX, 40);

    // Oversized rank number.
    let rank_text = format!("#{}", card.rank);
    let (_, rank_h) = fonts.ultra_bold.measure(&rank_text, RANK_PX);
    draw_centered(&mut img, fonts.ultra_bold.as_ref(), &rank_text, RANK_PX, 120);

    // Food name, one or two centered lines, well below the rank digits.
    let food_start_y = 120 + rank_h as i32 + 150;
    let mut y_offset = food_start_y;
    for line in split_title(&title_case(&card.name)) {
        let (_, line_h) = fonts.ultra_bold.measure(&line, FOOD_PX);
        draw_centered(&mut img, fonts.ultra_bold.as_ref(), &line, FOOD_PX, y_offset);
        y_offset += line_h as i32 + 20;
    }
    y_offset += 40;

    // Count line.
    let count_text = format!("{} TIMES", card.count);
    draw_centered(&mut img, fonts.bold.as_ref(), &count_text, COUNT_PX, y_offset);

    // Footer statistics.
    let stats_text = format!(
        "{:.1}/DAY \u{2022} {:.1}%",
        card.daily_avg, card.share_pct
    );
    draw_centered(
        &mut img,
        fonts.bold.as_ref(),
        &stats_text,
        STATS_PX,
        y_offset + 120,
    );

    img
}

/// Output filename for a card: rank plus the sanitized food name.
pub fn card_filename(rank: usize, name: &str) -> String {
    let sanitized = name.replace([' ', '/'], "_");
    format!("food_wrapped_{:02}_{}.png", rank, sanitized)
}

/// Title-case a normalized food name for display ("avocado toast" ->
/// "Avocado Toast").
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a display name into one or two lines. Multi-word names longer than
/// [`SPLIT_THRESHOLD`] characters break at the word midpoint; single words
/// stay on one line regardless of length.
pub fn split_title(title: &str) -> Vec<String> {
    if title.chars().count() <= SPLIT_THRESHOLD {
        return vec![title.to_string()];
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= 1 {
        return vec![title.to_string()];
    }

    let mid = words.len() / 2;
    vec![words[..mid].join(" "), words[mid..].join(" ")]
}

fn draw_centered(img: &mut RgbImage, renderer: &dyn TextRenderer, text: &str, px: f32, y: i32) {
    let (w, _) = renderer.measure(text, px);
    let x = (CARD_WIDTH.saturating_sub(w) / 2) as i32;
    renderer.draw(img, x, y, px, WHITE, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::font::BlockRenderer;
    use crate::gradient::PALETTE;

    fn block_fonts() -> CardFonts {
        CardFonts {
            ultra_bold: Box::new(BlockRenderer),
            bold: Box::new(BlockRenderer),
        }
    }

    fn card(rank: usize, name: &str) -> WrappedCard {
        WrappedCard {
            rank,
            name: name.to_string(),
            count: 89,
            daily_avg: 0.2,
            share_pct: 3.4,
        }
    }

    #[test]
    fn filename_sanitizes_spaces_and_slashes() {
        assert_eq!(
            card_filename(1, "avocado toast"),
            "food_wrapped_01_avocado_toast.png"
        );
        assert_eq!(
            card_filename(12, "mac/cheese"),
            "food_wrapped_12_mac_cheese.png"
        );
    }

    #[test]
    fn filename_zero_pads_rank() {
        assert_eq!(card_filename(3, "beer"), "food_wrapped_03_beer.png");
        assert_eq!(card_filename(15, "beer"), "food_wrapped_15_beer.png");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("avocado toast"), "Avocado Toast");
        assert_eq!(title_case("beer"), "Beer");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn short_titles_stay_on_one_line() {
        assert_eq!(split_title("Beer"), vec!["Beer"]);
        assert_eq!(split_title("Avocado Toas"), vec!["Avocado Toas"]);
    }

    #[test]
    fn long_titles_split_at_word_midpoint() {
        assert_eq!(
            split_title("Chicken Caesar Salad"),
            vec!["Chicken", "Caesar Salad"]
        );
        assert_eq!(
            split_title("Peanut Butter And Jelly"),
            vec!["Peanut Butter", "And Jelly"]
        );
    }

    #[test]
    fn long_single_words_do_not_split() {
        assert_eq!(split_title("Spanakopitakia"), vec!["Spanakopitakia"]);
    }

    #[test]
    fn card_has_fixed_square_dimensions() {
        let img = render_card(&card(1, "tacos"), &block_fonts());
        assert_eq!(img.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn card_background_matches_rank_palette() {
        let img = render_card(&card(2, "coffee"), &block_fonts());
        // Top-left corner is untouched gradient; rank 2 uses palette[1].
        assert_eq!(*img.get_pixel(0, 0), PALETTE[1].0);
    }

    #[test]
    fn card_contains_white_text_pixels() {
        let img = render_card(&card(1, "tacos"), &block_fonts());
        let white = img.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        assert!(white > 100);
    }

    #[test]
    fn two_line_names_render_without_panic() {
        let img = render_card(&card(4, "chicken caesar salad"), &block_fonts());
        assert_eq!(img.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    }
}
