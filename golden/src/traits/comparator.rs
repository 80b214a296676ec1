/// LineComparator is a strategy trait for comparing outputs one line at a time.
///
/// When a harness carries a line comparator, both normalized texts are split on `\n` and
/// each pair of lines at the same index is handed to [`LineComparator::matches`]. The harness
/// puts no interpretation on line content; numeric tolerance, patterns and the like live
/// entirely in the implementation.
pub trait LineComparator: Send + Sync {
    /// Whether `actual` is acceptable where `expected` was produced by the reference.
    fn matches(&self, expected: &str, actual: &str) -> bool;
}

impl<F> LineComparator for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn matches(&self, expected: &str, actual: &str) -> bool {
        self(expected, actual)
    }
}
