//! # Comparison Module
//!
//! Compares normalized expected text with normalized actual text and lists every
//! [`Failure`] found. An empty list means the case passed.
//!
//! - Without a line comparator the texts must be identical; a difference is one
//!   [`Failure::Content`] carrying both texts.
//! - With a line comparator both texts are split on `\n`. Differing line counts yield a
//!   single [`Failure::LineCount`] and no per-line checks, since alignment is already lost.
//!   Otherwise every line pair is checked and each rejected line is its own
//!   [`Failure::Line`], so one run surfaces every divergence.

use crate::report::Failure;
use crate::traits::comparator::LineComparator;

/// Compares two already-normalized texts.
pub fn compare(
    expected: &str,
    actual: &str,
    comparator: Option<&dyn LineComparator>,
) -> Vec<Failure> {
    let Some(comparator) = comparator else {
        if expected == actual {
            return Vec::new();
        }
        return vec![Failure::Content {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }];
    };

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();

    if expected_lines.len() != actual_lines.len() {
        return vec![Failure::LineCount {
            expected: expected_lines.len(),
            actual: actual_lines.len(),
        }];
    }

    expected_lines
        .iter()
        .zip(&actual_lines)
        .enumerate()
        .filter(|(_, (e, a))| !comparator.matches(e, a))
        .map(|(index, (e, a))| Failure::Line {
            index,
            expected: e.to_string(),
            actual: a.to_string(),
        })
        .collect()
}
