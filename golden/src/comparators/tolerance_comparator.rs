//! A comparator for numeric answers that may differ by floating-point rounding.
//!
//! Both lines are split on whitespace into tokens. The token counts must agree; tokens that
//! parse as numbers on both sides are compared within the configured epsilon, everything
//! else is compared exactly. A token pair passes when it is within the absolute **or** the
//! relative bound, which is how most judges phrase "answer accepted if error ≤ 1e-6".

use crate::traits::comparator::LineComparator;

/// Default absolute and relative error bound.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Token-wise comparison with numeric tolerance.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceComparator {
    absolute: f64,
    relative: f64,
}

impl Default for ToleranceComparator {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl ToleranceComparator {
    /// Same bound for absolute and relative error.
    pub fn new(epsilon: f64) -> Self {
        Self {
            absolute: epsilon,
            relative: epsilon,
        }
    }

    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    fn numbers_match(&self, expected: f64, actual: f64) -> bool {
        if expected == actual {
            return true;
        }
        if !expected.is_finite() || !actual.is_finite() {
            return false;
        }
        let diff = (expected - actual).abs();
        diff <= self.absolute || diff <= self.relative * expected.abs()
    }

    fn tokens_match(&self, expected: &str, actual: &str) -> bool {
        if expected == actual {
            return true;
        }
        match (expected.parse::<f64>(), actual.parse::<f64>()) {
            (Ok(e), Ok(a)) => self.numbers_match(e, a),
            _ => false,
        }
    }
}

impl LineComparator for ToleranceComparator {
    fn matches(&self, expected: &str, actual: &str) -> bool {
        let expected_tokens: Vec<&str> = expected.split_whitespace().collect();
        let actual_tokens: Vec<&str> = actual.split_whitespace().collect();

        expected_tokens.len() == actual_tokens.len()
            && expected_tokens
                .iter()
                .zip(&actual_tokens)
                .all(|(e, a)| self.tokens_match(e, a))
    }
}
