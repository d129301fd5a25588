//! `foodwrapped tally`: counts JSON, ranked text report, console listing.

use std::path::PathBuf;

use colored::Colorize;
use foodwrapped_core::report;
use foodwrapped_core::tally::Tally;

use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct TallyOptions {
    /// Path to the diary PDF
    #[arg(value_name = "PDF")]
    pub input: PathBuf,

    /// First page to process (1-based); earlier pages are front matter
    #[arg(long, env = "FOODWRAPPED_START_PAGE", default_value = "7")]
    pub start_page: u32,

    /// Number of entries in the written ranked report
    #[arg(short, long, default_value = "50")]
    pub top: usize,

    /// Number of entries shown on the console
    #[arg(long, default_value = "30")]
    pub show: usize,

    /// Output path for the full counts JSON
    #[arg(long, default_value = "food_counts.json")]
    pub counts: PathBuf,

    /// Output path for the ranked text report
    #[arg(long, default_value = "top_foods.txt")]
    pub report: PathBuf,

    /// Print the ranked results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: TallyOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Tallying food entries from {}", options.input.display());
    }

    let tally = crate::scan::load_consolidated_tally(&options.input, options.start_page)?;

    let counts_json = report::format_counts_json(&tally)?;
    std::fs::write(&options.counts, counts_json)
        .wrap_err_with(|| format!("failed to write {}", options.counts.display()))?;
    println!("Food counts saved to {}", options.counts.display());

    let report_text = report::format_top_report(&tally, options.top);
    std::fs::write(&options.report, report_text)
        .wrap_err_with(|| format!("failed to write {}", options.report.display()))?;
    println!(
        "Top {} foods saved to {}",
        options.top,
        options.report.display()
    );

    if options.json {
        println!("{}", report::format_top_json(&tally, options.show)?);
    } else {
        print_top_table(&tally, options.show);
    }

    Ok(())
}

fn print_top_table(tally: &Tally, show: usize) {
    println!();
    println!(
        "{}",
        format!("=== TOP {} MOST COMMON FOODS ===", show)
            .bright_cyan()
            .bold()
    );

    let mut table = new_table();
    for food in report::rank(tally).iter().take(show) {
        table.add_row(prettytable::row![
            r -> format!("{}.", food.rank),
            food.name,
            r -> format!("{} times", food.count),
        ]);
    }
    table.printstd();

    println!();
    println!("Total unique food items: {}", tally.unique_items());
    println!("Total food entries: {}", tally.total_entries());
}
