//! The sequential document scan and shared pipeline plumbing.
//!
//! Both subcommands run the same pipeline: open the document, walk its
//! pages in order, classify and parse each line, then consolidate beer
//! entries. Pages are processed strictly sequentially; a page with no
//! extractable text contributes nothing and is skipped silently.

use std::path::Path;

use foodwrapped_core::beer::{self, ConsolidationReport};
use foodwrapped_core::tally::Tally;
use foodwrapped_core::{classify, quantity};
use pdf::{LopdfSource, PageSource};

use crate::prelude::{println, *};

/// Pages between console progress lines.
const PROGRESS_EVERY: u32 = 50;

/// Open the PDF, scan it from `start_page`, consolidate beer entries, and
/// print the consolidation summary. The shared front half of both
/// subcommands.
pub fn load_consolidated_tally(input: &Path, start_page: u32) -> Result<Tally> {
    if !input.exists() {
        return Err(eyre!("PDF file not found: {}", input.display()));
    }

    let source = LopdfSource::open(input)
        .wrap_err_with(|| format!("failed to open {}", input.display()))?;

    let raw = tally_document(&source, start_page);
    let (tally, report) = beer::consolidate(raw);
    print_consolidation(&report);

    Ok(tally)
}

/// Walk the document from `start_page` (1-based) through the last page and
/// tally every accepted food line. Prints a preamble and a progress line
/// every [`PROGRESS_EVERY`] pages.
pub fn tally_document(source: &dyn PageSource, start_page: u32) -> Tally {
    let total_pages = source.page_count() as u32;

    println!("Total pages in document: {}", total_pages);
    println!("Starting from page {}", start_page);
    println!(
        "Processing {} pages...",
        (i64::from(total_pages) - i64::from(start_page) + 1).max(0)
    );

    let mut tally = Tally::new();

    for page in start_page..=total_pages {
        let text = source.page_text(page);

        let lines = classify::candidate_lines(&text);
        log::debug!("page {}: {} candidate lines", page, lines.len());

        for line in lines {
            let (count, name) = quantity::parse_quantity(line);
            tally.record(count, &name);
        }

        if page % PROGRESS_EVERY == 0 {
            println!(
                "Processed {} pages... Found {} unique items so far",
                page,
                tally.unique_items()
            );
        }
    }

    tally
}

/// Print the human-readable beer-consolidation summary.
pub fn print_consolidation(report: &ConsolidationReport) {
    println!();
    println!("Beer consolidation:");
    println!("Found {} beer-related entries", report.merged.len());
    println!("Total beer count: {}", report.total);
    println!("Beer entries consolidated:");
    for (name, count) in &report.merged {
        println!("  {}: {}", name, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pdf::FixturePages;

    #[test]
    fn tallies_from_start_page_only() {
        let pages = FixturePages::new([
            "FOOD DIARY",    // page 1: front matter
            "3 croissants",  // page 2: skipped by start_page
            "3 tacos\n1 Budweiser",
            "2 Corona\nTuesday May 14, 2024",
        ]);

        let tally = tally_document(&pages, 3);

        assert_eq!(tally.get("tacos"), 3);
        assert_eq!(tally.get("budweiser"), 1);
        assert_eq!(tally.get("corona"), 2);
        assert_eq!(tally.get("croissants"), 0);
        assert_eq!(tally.unique_items(), 3);
    }

    #[test]
    fn empty_pages_are_skipped_silently() {
        let pages = FixturePages::new(["", "3 tacos", ""]);
        let tally = tally_document(&pages, 1);

        assert_eq!(tally.get("tacos"), 3);
        assert_eq!(tally.unique_items(), 1);
    }

    #[test]
    fn start_page_past_end_yields_empty_tally() {
        let pages = FixturePages::new(["3 tacos"]);
        let tally = tally_document(&pages, 7);

        assert!(tally.is_empty());
    }

    #[test]
    fn page_quantity_sum_matches_accepted_lines() {
        // Every accepted line contributes exactly its parsed quantity.
        let pages = FixturePages::new(["3 tacos\n42\nAvocado toast\n2 Corona"]);
        let tally = tally_document(&pages, 1);

        assert_eq!(tally.total_entries(), 3 + 1 + 2);
    }

    #[test]
    fn end_to_end_with_consolidation() {
        let mut pages = vec![String::new(); 6];
        pages.push("3 tacos\nTuesday May 14, 2024\n1 Budweiser\n2 Corona".to_string());
        let source = FixturePages::new(pages);

        let raw = tally_document(&source, 7);
        assert_eq!(raw.get("tacos"), 3);
        assert_eq!(raw.get("budweiser"), 1);
        assert_eq!(raw.get("corona"), 2);

        let (tally, report) = beer::consolidate(raw);
        assert_eq!(tally.get("tacos"), 3);
        assert_eq!(tally.get("beer"), 3);
        assert_eq!(tally.unique_items(), 2);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn missing_input_is_fatal() {
        let err = load_consolidated_tally(Path::new("/no/such/diary.pdf"), 7).unwrap_err();
        assert!(err.to_string().contains("PDF file not found"));
    }
}
