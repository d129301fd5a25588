//! `foodwrapped wrapped`: render one card image per top food.

use std::path::PathBuf;

use foodwrapped_core::report;
use render::{card_filename, render_card, resolve_renderer, CardFonts, FontStyle, WrappedCard};

use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct WrappedOptions {
    /// Path to the diary PDF
    #[arg(value_name = "PDF")]
    pub input: PathBuf,

    /// First page to process (1-based); earlier pages are front matter
    #[arg(long, env = "FOODWRAPPED_START_PAGE", default_value = "7")]
    pub start_page: u32,

    /// Number of cards to render
    #[arg(short, long, default_value = "15")]
    pub top: usize,

    /// Directory the cards are written to
    #[arg(long, default_value = "food_wrapped_graphics")]
    pub out_dir: PathBuf,

    /// Extra font file tried before the built-in candidates (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,
}

pub fn run(options: WrappedOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Rendering wrapped cards from {}", options.input.display());
    }

    let tally = crate::scan::load_consolidated_tally(&options.input, options.start_page)?;

    std::fs::create_dir_all(&options.out_dir)
        .wrap_err_with(|| format!("failed to create {}", options.out_dir.display()))?;

    let fonts = CardFonts {
        ultra_bold: resolve_renderer(FontStyle::UltraBold, &options.fonts),
        bold: resolve_renderer(FontStyle::Bold, &options.fonts),
    };

    println!();
    println!("Generating Food Wrapped graphics...");

    let mut rendered = 0usize;
    for food in report::rank(&tally).into_iter().take(options.top) {
        let card = WrappedCard {
            rank: food.rank,
            name: food.name,
            count: food.count,
            daily_avg: food.daily_avg,
            share_pct: food.share_pct,
        };

        let path = options.out_dir.join(card_filename(card.rank, &card.name));
        let image = render_card(&card, &fonts);
        image
            .save(&path)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        println!("Generated: {}", path.display());
        rendered += 1;
    }

    println!();
    println!(
        "Generated {} Food Wrapped graphics in '{}'",
        rendered,
        options.out_dir.display()
    );

    Ok(())
}
