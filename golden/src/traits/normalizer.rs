/// Normalizer is a strategy trait for caller-defined output canonicalization.
///
/// It runs after the mandatory line-ending and trailing-newline cleanup, and always on
/// both the expected and the actual text.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}
