//! Leading-quantity parsing for candidate food lines.
//!
//! A candidate line like "3 tacos" splits into a quantity and the remainder.
//! Parsing is an ordered, first-match-wins rule list. The first rule accepts
//! any remainder after a leading integer, so the connective-stripping rules
//! below it never fire: "2 slices of pizza" parses to (2, "slices of
//! pizza"), not (2, "pizza"). That is the published behavior of every count
//! this tool has ever produced, so the rule order is kept as-is.

use std::sync::OnceLock;

use regex::Regex;

/// Quantity rules, tried in order. First match wins.
fn quantity_rules() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // "3 tacos"
            r"(?i)^(\d+)\s+(.+)$",
            // "2 slices of pizza"
            r"(?i)^(\d+)\s+(?:slices?\s+of\s+)?(.+)$",
            // "4 pieces of chicken"
            r"(?i)^(\d+)\s+(?:pieces?\s+of\s+)?(.+)$",
            // "2 cups of coffee"
            r"(?i)^(\d+)\s+(?:cups?\s+of\s+)?(.+)$",
            // "3 bottles of beer"
            r"(?i)^(\d+)\s+(?:bottles?\s+of\s+)?(.+)$",
            // "2 cans of soda"
            r"(?i)^(\d+)\s+(?:cans?\s+of\s+)?(.+)$",
            // "2 glasses of wine"
            r"(?i)^(\d+)\s+(?:glasses?\s+of\s+)?(.+)$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("quantity rule must compile"))
        .collect()
    })
}

/// Split a candidate line into `(quantity, food name)`.
///
/// Returns the leading integer and the trimmed remainder. Lines without a
/// leading integer (or with one too large for `u32`) come back as
/// `(1, original)`. No case folding happens here; that is the tally's job.
pub fn parse_quantity(entry: &str) -> (u32, String) {
    for rule in quantity_rules() {
        if let Some(caps) = rule.captures(entry) {
            if let Ok(quantity) = caps[1].parse::<u32>() {
                return (quantity, caps[2].trim().to_string());
            }
        }
    }

    (1, entry.to_string())
}
