//! A comparator that treats each expected line as a regular expression.
//!
//! Useful for answers with a free-form part, e.g. an expected line `Case #1: \d+` accepts
//! any number. The pattern must match the whole actual line.

use crate::traits::comparator::LineComparator;
use regex::Regex;
use tracing::warn;

/// Full-line regex matching with the expected line as the pattern.
///
/// An expected line that is not a valid pattern never matches, so a broken expected file
/// shows up as a failing line rather than a silent pass.
///
/// The pattern is compiled on every call; each expected line is its own pattern and is
/// checked once per run, so there is nothing to cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexComparator;

impl LineComparator for RegexComparator {
    fn matches(&self, expected: &str, actual: &str) -> bool {
        let regex = match Regex::new(&format!("^(?:{expected})$")) {
            Ok(re) => re,
            Err(e) => {
                warn!(pattern = expected, error = %e, "Invalid regex pattern in expected output");
                return false;
            }
        };
        regex.is_match(actual)
    }
}
