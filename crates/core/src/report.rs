//! Ranking, derived statistics, and artifact formatting.
//!
//! Everything here is pure formatting over a finished tally: the ranked
//! list with daily-average and share statistics, the flat counts JSON, and
//! the fixed-width top-N text report.

use serde::Serialize;

use crate::tally::Tally;

/// Divisor for the per-day average on a one-year diary.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// One ranked entry with its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFood {
    /// 1-based rank, descending by count.
    pub rank: usize,
    pub name: String,
    pub count: u64,
    /// count / 365.
    pub daily_avg: f64,
    /// count / total entries, as a percentage.
    pub share_pct: f64,
}

/// JSON payload for the ranked `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct TopOutput {
    pub top_n: usize,
    pub total_unique_items: usize,
    pub total_entries: u64,
    pub foods: Vec<RankedFood>,
}

/// Rank all entries descending by count.
///
/// Ties break by tally iteration order (ascending name); the sort is
/// stable, so equal counts keep that order.
pub fn rank(tally: &Tally) -> Vec<RankedFood> {
    let total = tally.total_entries();

    let mut entries: Vec<(&String, u64)> = tally.iter().map(|(n, &c)| (n, c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, count))| RankedFood {
            rank: i + 1,
            name: name.clone(),
            count,
            daily_avg: count as f64 / DAYS_PER_YEAR,
            share_pct: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Serialize the full tally as a flat name -> count object, pretty-printed.
pub fn format_counts_json(tally: &Tally) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tally)
}

/// Serialize the top-N ranking with derived statistics.
pub fn format_top_json(tally: &Tally, top_n: usize) -> serde_json::Result<String> {
    let mut foods = rank(tally);
    foods.truncate(top_n);

    serde_json::to_string_pretty(&TopOutput {
        top_n,
        total_unique_items: tally.unique_items(),
        total_entries: tally.total_entries(),
        foods,
    })
}

/// Format the fixed-width top-N text report.
pub fn format_top_report(tally: &Tally, top_n: usize) -> String {
    let rule = "=".repeat(40);
    let mut out = String::new();

    out.push_str(&format!("TOP {} MOST EATEN FOODS\n", top_n));
    out.push_str(&rule);
    out.push_str("\n\n");

    for food in rank(tally).iter().take(top_n) {
        out.push_str(&format!(
            "{:>2}. {:<40} {:>4} times\n",
            food.rank, food.name, food.count
        ));
    }

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Total unique food items: {}\n",
        tally.unique_items()
    ));
    out.push_str(&format!("Total food entries: {}\n", tally.total_entries()));

    out
}
