//! Line classification: food entries vs. structural noise.
//!
//! Diary pages mix real entries ("3 tacos") with page numbers, weekday
//! headers, calendar rows, and front-matter titles. Classification is a
//! fixed rejection list; anything that survives every rule is a candidate
//! food entry.

use std::sync::OnceLock;

use regex::Regex;

/// Lowercase weekday names, matched as substrings anywhere in a line.
const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Full-line noise patterns. Any match rejects the line.
fn noise_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Page numbers: a bare integer, optionally trailed by whitespace.
            r"^\d+\s*$",
            // Bare weekday name ("Tuesday").
            r"^[A-Za-z]+day\s*$",
            // Weekday with a textual date ("Tuesday May 14, 2024").
            r"^[A-Za-z]+day\s+[A-Za-z]+\s+\d{1,2},\s+\d{4}$",
            // Year range ("2024-2025").
            r"^\d{4}\s*-\s*\d{4}$",
            // Calendar header: 3-letter month abbreviation with digits.
            r"^[A-Z]{3}\s+\d+.*$",
            // Front-matter titles and author lines, case-sensitive.
            r"^Title Page Content.*$",
            r"^Charlie Sosnick$",
            r"^FOOD DIARY$",
            r"^Year Two$",
            r"^Or, Everything.*$",
            r"^Recorded Accurately.*$",
            // Numeric dates with slash or dash separators.
            r"^\d{1,2}/\d{1,2}/\d{2,4}$",
            r"^\d{1,2}-\d{1,2}-\d{2,4}$",
            // Textual month-day-year ("May 14, 2024").
            r"^[A-Za-z]+\s+\d{1,2},\s+\d{4}$",
            // Day-month-year ("14 May 2024").
            r"^\d{1,2}\s+[A-Za-z]+\s+\d{4}$",
            // Lines that are only digits, whitespace, hyphens, slashes, commas.
            r"^[\d\s\-/,]+$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("noise pattern must compile"))
        .collect()
    })
}

/// Date-shaped substring, found anywhere in the line (scan, not full match).
fn date_anywhere() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap())
}

/// Decide whether a line of page text is a food entry.
///
/// The line is trimmed first. Rejection rules (any match rejects): empty or
/// length <= 2, one of the full-line noise patterns, a weekday name anywhere
/// in the line (case-insensitive), or a date-shaped substring anywhere.
pub fn is_food_line(line: &str) -> bool {
    let line = line.trim();

    if line.is_empty() || line.chars().count() <= 2 {
        return false;
    }

    if noise_patterns().iter().any(|re| re.is_match(line)) {
        return false;
    }

    let lower = line.to_lowercase();
    if WEEKDAYS.iter().any(|day| lower.contains(day)) {
        return false;
    }

    if date_anywhere().is_match(line) {
        return false;
    }

    true
}

/// Split page text into trimmed candidate food lines, in page order.
///
/// Empty or whitespace-only page text yields an empty vec.
pub fn candidate_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_food_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- rejections ---------------------------------------------------------

    #[test]
    fn rejects_empty_and_short() {
        assert!(!is_food_line(""));
        assert!(!is_food_line("   "));
        assert!(!is_food_line("ab"));
        assert!(!is_food_line(" x "));
    }

    #[test]
    fn rejects_page_numbers() {
        assert!(!is_food_line("42"));
        assert!(!is_food_line("137"));
        assert!(!is_food_line("137   "));
    }

    #[test]
    fn rejects_bare_weekday() {
        assert!(!is_food_line("Tuesday"));
        assert!(!is_food_line("Saturday "));
    }

    #[test]
    fn rejects_weekday_date_line() {
        assert!(!is_food_line("Tuesday May 14, 2024"));
        assert!(!is_food_line("Friday January 3, 2025"));
    }

    #[test]
    fn rejects_weekday_anywhere_in_line() {
        // Substring scan, not just whole-line match.
        assert!(!is_food_line("leftovers from Sunday dinner"));
        assert!(!is_food_line("MONDAY MEAL PREP"));
    }

    #[test]
    fn rejects_numeric_dates() {
        assert!(!is_food_line("5/14/2024"));
        assert!(!is_food_line("5-14-24"));
        assert!(!is_food_line("12/31/99"));
    }

    #[test]
    fn rejects_date_shaped_substring() {
        assert!(!is_food_line("entry for 5/14/24 continued"));
    }

    #[test]
    fn rejects_textual_dates() {
        assert!(!is_food_line("May 14, 2024"));
        assert!(!is_food_line("14 May 2024"));
    }

    #[test]
    fn rejects_year_range() {
        assert!(!is_food_line("2024-2025"));
        assert!(!is_food_line("2024 - 2025"));
    }

    #[test]
    fn rejects_calendar_header() {
        assert!(!is_food_line("MAY 14 15 16"));
        assert!(!is_food_line("JUN 1"));
    }

    #[test]
    fn rejects_front_matter() {
        assert!(!is_food_line("FOOD DIARY"));
        assert!(!is_food_line("Charlie Sosnick"));
        assert!(!is_food_line("Year Two"));
        assert!(!is_food_line("Title Page Content and whatnot"));
        assert!(!is_food_line("Or, Everything I Ate"));
        assert!(!is_food_line("Recorded Accurately For Once"));
    }

    #[test]
    fn rejects_digit_punctuation_soup() {
        assert!(!is_food_line("12 34, 56 - 7/8"));
        assert!(!is_food_line("1, 2, 3"));
    }

    // -- acceptances --------------------------------------------------------

    #[test]
    fn accepts_food_entries() {
        assert!(is_food_line("3 tacos"));
        assert!(is_food_line("Avocado toast"));
        assert!(is_food_line("2 slices of pizza"));
        assert!(is_food_line("1 Budweiser"));
    }

    #[test]
    fn accepts_lines_with_incidental_digits() {
        assert!(is_food_line("3 musketeers bar"));
        assert!(is_food_line("7 layer dip"));
    }

    #[test]
    fn title_set_is_case_sensitive() {
        // Lowercase variants of the front-matter titles are not in the set.
        assert!(is_food_line("food diary cake"));
        assert!(is_food_line("year two cake"));
    }

    // -- candidate_lines ----------------------------------------------------

    #[test]
    fn candidate_lines_empty_page() {
        assert!(candidate_lines("").is_empty());
        assert!(candidate_lines("   \n  \n").is_empty());
    }

    #[test]
    fn candidate_lines_preserve_page_order() {
        let text = "Tuesday May 14, 2024\n3 tacos\n42\nAvocado toast\n1 Budweiser";
        assert_eq!(
            candidate_lines(text),
            vec!["3 tacos", "Avocado toast", "1 Budweiser"]
        );
    }

    #[test]
    fn candidate_lines_trim_whitespace() {
        let text = "  3 tacos  \n\t2 Corona\t";
        assert_eq!(candidate_lines(text), vec!["3 tacos", "2 Corona"]);
    }
}
