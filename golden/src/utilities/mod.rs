//! # Utilities
//!
//! File-system and text helpers used by the harness.
//!
//! - [`file_loader`]: Discovery of input / expected-output pairs and reading expected text.
//! - [`line_normalization`]: The mandatory canonicalization plus optional normalizers.

pub mod file_loader;
pub mod line_normalization;
