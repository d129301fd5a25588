//! Beer consolidation: merge brand and style entries into one bucket.
//!
//! A diary year produces dozens of distinct beer spellings ("corona",
//! "2 bottles of beer", "guinness"). Consolidation rewrites the tally so
//! they all land under the canonical `"beer"` key. Exclusions run before
//! keyword matching: "ginger beer" contains the generic keyword but is not
//! beer.

use serde::Serialize;

use crate::tally::Tally;

/// Generic beer terms plus brand names, matched as substrings of the
/// (already lowercased) tally key.
pub const BEER_KEYWORDS: &[&str] = &[
    "beer",
    "guinness",
    "light beer",
    "dark beer",
    "lager",
    "ale",
    "ipa",
    "pilsner",
    "stout",
    "porter",
    "wheat beer",
    "hefeweizen",
    "weissbier",
    "amber beer",
    "pale ale",
    "belgian beer",
    "craft beer",
    "draft beer",
    "bottled beer",
    "canned beer",
    "pint of beer",
    "bottle of beer",
    "can of beer",
    "glass of beer",
    "hard seltzer",
    "seltzer beer",
    "budweiser",
    "coors",
    "miller",
    "heineken",
    "corona",
    "stella artois",
    "modelo",
    "dos equis",
    "tecate",
    "pacifico",
    "negra modelo",
    "blue moon",
    "shock top",
    "sam adams",
    "yuengling",
    "bud light",
    "coors light",
    "miller lite",
    "natural light",
    "pbr",
    "pabst",
    "rolling rock",
    "keystone",
    "busch",
    "michelob",
    "carlsberg",
    "peroni",
    "moretti",
    "becks",
    "amstel",
    "fosters",
    "asahi",
    "sapporo",
    "kirin",
    "tsingtao",
    "chang",
    "singha",
    "tiger",
    "red stripe",
    "kingfisher",
    "efes",
    "brahma",
    "skol",
];

/// Entries that contain a beer keyword but are not beer. Checked first.
pub const NON_BEER_EXCLUSIONS: &[&str] = &[
    "ginger beer",
    "root beer",
    "na beer",
    "ginger ale",
    "root beer float",
    "na guinness",
    "non-alcoholic beer",
    "birch beer",
];

/// What a consolidation pass merged, for the shell to print.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsolidationReport {
    /// The removed entries, in tally iteration order, with their counts.
    pub merged: Vec<(String, u64)>,
    /// Sum of the merged counts; the value written under `"beer"`.
    pub total: u64,
}

/// Consolidate beer-related entries into a single `"beer"` key.
///
/// Consumes the tally and returns a rewritten one plus a report of what was
/// merged. Exclusions are checked before keywords. Idempotent: on a second
/// pass only the canonical `"beer"` key matches, and it is re-bucketed into
/// itself with an unchanged count.
pub fn consolidate(tally: Tally) -> (Tally, ConsolidationReport) {
    let mut kept = Tally::new();
    let mut merged = Vec::new();
    let mut total: u64 = 0;

    for (name, count) in tally {
        // Tally keys are lowercased by construction, so plain substring
        // containment is already case-insensitive.
        if NON_BEER_EXCLUSIONS.iter().any(|e| name.contains(e)) {
            kept.add(name, count);
        } else if BEER_KEYWORDS.iter().any(|k| name.contains(k)) {
            total += count;
            merged.push((name, count));
        } else {
            kept.add(name, count);
        }
    }

    if total > 0 {
        kept.add("beer".to_string(), total);
    }

    (kept, ConsolidationReport { merged, total })
}
