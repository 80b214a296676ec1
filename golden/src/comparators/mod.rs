//! # Comparators
//!
//! This module provides ready-made [`LineComparator`](crate::traits::comparator::LineComparator)
//! strategies. Each one decides whether a single line of solver output is acceptable in place
//! of the reference line at the same index; line alignment and count checks are handled by
//! [`crate::comparison`], not here.
//!
//! The available comparators are:
//! - [`exact_comparator`]: Lines must be identical.
//! - [`tolerance_comparator`]: Whitespace-separated tokens, numbers equal within an epsilon.
//! - [`regex_comparator`]: The expected line is a pattern the actual line must fully match.

pub mod exact_comparator;
pub mod regex_comparator;
pub mod tolerance_comparator;

pub use exact_comparator::ExactComparator;
pub use regex_comparator::RegexComparator;
pub use tolerance_comparator::ToleranceComparator;
