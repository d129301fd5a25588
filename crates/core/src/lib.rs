//! Core library for foodwrapped
//!
//! This crate implements the **Functional Core** of the foodwrapped
//! application, following the Functional Core - Imperative Shell pattern.
//!
//! Every function here is a pure transformation over page text or tally
//! data: same input, same output, no I/O, no external state. The
//! `foodwrapped` binary (the Imperative Shell) owns all file, PDF, and
//! terminal interaction and calls into this crate per page.
//!
//! # Module Organization
//!
//! - [`classify`]: line classification -- food entries vs. calendar noise
//! - [`quantity`]: leading-quantity parsing for candidate lines
//! - [`tally`]: the normalized food-count table
//! - [`beer`]: consolidation of beer brands/styles into one bucket
//! - [`report`]: ranking, derived statistics, and artifact formatting
//!
//! # Example Usage
//!
//! ```rust
//! use foodwrapped_core::{classify, quantity, tally::Tally};
//!
//! let mut tally = Tally::new();
//! for line in classify::candidate_lines("3 tacos\nTuesday May 14, 2024") {
//!     let (count, name) = quantity::parse_quantity(line);
//!     tally.record(count, &name);
//! }
//!
//! assert_eq!(tally.get("tacos"), 3);
//! assert_eq!(tally.unique_items(), 1);
//! ```

pub mod beer;
pub mod classify;
pub mod quantity;
pub mod report;
pub mod tally;
