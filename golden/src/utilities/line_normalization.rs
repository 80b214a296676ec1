//! Output canonicalization.
//!
//! [`canonicalize`] is applied to every expected and actual text before comparison, whatever
//! the harness configuration. The [`Normalizer`] implementations here are optional extras a
//! caller can plug in on top of it.

use crate::traits::normalizer::Normalizer;
use regex::Regex;

/// Converts every `\r\n` to `\n`, then strips all trailing `\n` characters.
///
/// A run of carriage returns before a line feed collapses entirely (`\r\r\n` becomes `\n`).
/// Runs in one pass over the input, however long the run.
///
/// Idempotent: `canonicalize(&canonicalize(t)) == canonicalize(t)`.
///
/// ```
/// use golden::utilities::line_normalization::canonicalize;
///
/// assert_eq!(canonicalize("a\r\nb\r\n\n"), "a\nb");
/// ```
pub fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' {
            while out.ends_with('\r') {
                out.pop();
            }
        }
        out.push(ch);
    }
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out
}

/// Applies the mandatory canonicalization, then the caller's normalizer if any.
pub fn normalize_with(text: &str, normalizer: Option<&dyn Normalizer>) -> String {
    let canonical = canonicalize(text);
    match normalizer {
        Some(n) => n.normalize(&canonical),
        None => canonical,
    }
}

/// Strips trailing spaces and tabs from every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimLineEnds;

impl Normalizer for TrimLineEnds {
    fn normalize(&self, text: &str) -> String {
        text.split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Replaces every match of a pattern with a fixed replacement, e.g. masking timings
/// such as `(0.13s)` that legitimately vary between runs.
#[derive(Debug, Clone)]
pub struct RegexNormalizer {
    pattern: Regex,
    replacement: String,
}

impl RegexNormalizer {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }
}

impl Normalizer for RegexNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_and_trailing_newlines() {
        assert_eq!(canonicalize("a\r\nb\r\n\n"), "a\nb");
        assert_eq!(canonicalize("6\r\n"), "6");
        assert_eq!(canonicalize("6\n\n"), "6");
    }

    #[test]
    fn test_inner_blank_lines_kept() {
        assert_eq!(canonicalize("a\n\nb\n"), "a\n\nb");
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        assert_eq!(canonicalize("a\rb\r"), "a\rb\r");
    }

    #[test]
    fn test_carriage_return_run_before_line_feed() {
        assert_eq!(canonicalize("\r\r\nx"), "\nx");
    }

    #[test]
    fn test_long_carriage_return_run_is_linear() {
        let text = format!("6{}\n", "\r".repeat(100_000));
        let start = std::time::Instant::now();
        assert_eq!(canonicalize(&text), "6");
        assert!(start.elapsed() < std::time::Duration::from_secs(1));

        let inner = format!("a{}\nb\r", "\r".repeat(100_000));
        assert_eq!(canonicalize(&inner), "a\nb\r");
    }

    #[test]
    fn test_empty_and_newline_only() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("\n\r\n\n"), "");
    }

    #[test]
    fn test_idempotent() {
        for text in ["a\r\nb\r\n\n", "\r\r\n\n", "\r\r\nx", "x\n \n", "", "plain"] {
            let once = canonicalize(text);
            assert_eq!(canonicalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_user_normalizer_runs_after_canonicalization() {
        let upper = |t: &str| t.to_uppercase();
        assert_eq!(normalize_with("ab\r\n\n", Some(&upper)), "AB");
        assert_eq!(normalize_with("ab\r\n\n", None), "ab");
    }

    #[test]
    fn test_trim_line_ends() {
        assert_eq!(TrimLineEnds.normalize("1 2 \n3\t\n 4"), "1 2\n3\n 4");
    }

    #[test]
    fn test_regex_normalizer_masks_matches() {
        let n = RegexNormalizer::new(r"\(\d+\.\d+s\)", "(0.0s)").unwrap();
        assert_eq!(n.normalize("done (1.25s)\nok (0.01s)"), "done (0.0s)\nok (0.0s)");
    }

    #[test]
    fn test_regex_normalizer_rejects_bad_pattern() {
        assert!(RegexNormalizer::new("(", "").is_err());
    }
}
