//! # Types Module
//!
//! This module defines the core data structures shared by discovery and the runner.

use std::path::PathBuf;

/// A single input / expected-output file pair.
///
/// Built transiently at discovery time and dropped once the case has been reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The input file name; also the name the case is reported under.
    pub name: String,
    /// Path to the input file handed to the solver.
    pub input: PathBuf,
    /// Path to the expected-output file (`input` plus the expected suffix).
    pub expected: PathBuf,
}
