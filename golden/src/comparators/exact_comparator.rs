//! A comparator that requires each actual line to equal its expected line exactly.
//!
//! Through the line-by-line path this differs from running without a comparator only in
//! reporting: every differing line is listed on its own instead of one whole-text diff.

use crate::traits::comparator::LineComparator;

/// Byte-for-byte line equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactComparator;

impl LineComparator for ExactComparator {
    fn matches(&self, expected: &str, actual: &str) -> bool {
        expected == actual
    }
}
