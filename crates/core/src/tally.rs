//! The normalized food-count table.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

/// Cumulative counts keyed by normalized (lowercased, trimmed) food name.
///
/// `BTreeMap` keeps iteration deterministic: ranking ties later break by
/// ascending name. Serializes as a flat name -> count object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one parsed food entry. The name is trimmed and lowercased
    /// before counting, so "Budweiser" and "budweiser" share a key.
    pub fn record(&mut self, quantity: u32, name: &str) {
        let key = name.trim().to_lowercase();
        *self.counts.entry(key).or_insert(0) += u64::from(quantity);
    }

    /// Insert an already-normalized key with a raw count. Used when
    /// rebuilding a table during consolidation.
    pub(crate) fn add(&mut self, name: String, count: u64) {
        *self.counts.entry(name).or_insert(0) += count;
    }

    /// Count for a normalized name, 0 if absent.
    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Number of distinct food names.
    pub fn unique_items(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total_entries(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }
}

impl IntoIterator for Tally {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for Tally {
    /// Build a tally from raw pairs, normalizing names. Mostly for tests.
    fn from_iter<T: IntoIterator<Item = (&'a str, u64)>>(iter: T) -> Self {
        let mut tally = Tally::new();
        for (name, count) in iter {
            tally.add(name.trim().to_lowercase(), count);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates() {
        let mut tally = Tally::new();
        tally.record(3, "tacos");
        tally.record(2, "tacos");
        assert_eq!(tally.get("tacos"), 5);
        assert_eq!(tally.unique_items(), 1);
    }

    #[test]
    fn record_normalizes_case_and_whitespace() {
        let mut tally = Tally::new();
        tally.record(1, "Budweiser");
        tally.record(2, "  budweiser ");
        tally.record(1, "BUDWEISER");
        assert_eq!(tally.get("budweiser"), 4);
        assert_eq!(tally.unique_items(), 1);
    }

    #[test]
    fn totals() {
        let tally: Tally = [("tacos", 3), ("corona", 2), ("coffee", 7)]
            .into_iter()
            .collect();
        assert_eq!(tally.total_entries(), 12);
        assert_eq!(tally.unique_items(), 3);
    }

    #[test]
    fn order_independent_aggregation() {
        let entries = [(3u32, "tacos"), (1, "Corona"), (2, "tacos"), (4, "corona")];

        let mut forward = Tally::new();
        for (q, n) in entries {
            forward.record(q, n);
        }

        let mut reverse = Tally::new();
        for (q, n) in entries.iter().rev() {
            reverse.record(*q, n);
        }

        assert_eq!(forward, reverse);
        assert_eq!(forward.get("tacos"), 5);
        assert_eq!(forward.get("corona"), 5);
    }

    #[test]
    fn missing_name_is_zero() {
        let tally = Tally::new();
        assert_eq!(tally.get("nothing"), 0);
        assert!(!tally.contains("nothing"));
        assert!(tally.is_empty());
    }

    #[test]
    fn serializes_as_flat_object() {
        let tally: Tally = [("beer", 3), ("tacos", 5)].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"beer":3,"tacos":5}"#);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let tally: Tally = [("zucchini", 1), ("apple", 2), ("miso", 3)]
            .into_iter()
            .collect();
        let names: Vec<&str> = tally.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["apple", "miso", "zucchini"]);
    }
}
