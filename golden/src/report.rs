//! # Report Module
//!
//! This module defines what a run hands back to the host test framework: one
//! [`CaseReport`] per case and a [`SuiteReport`] wrapping them.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "test_dir": "/work/testdata",
//!   "started_at": "2025-01-01T10:00:00Z",
//!   "finished_at": "2025-01-01T10:00:01Z",
//!   "total": 2,
//!   "passed": 1,
//!   "failed": 1,
//!   "cases": [
//!     { "name": "t1", "passed": true, "duration_ms": 3, "failures": [] },
//!     { "name": "t2", "passed": false, "duration_ms": 2, "failures": [
//!       { "kind": "line", "index": 2, "expected": "3", "actual": "4" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! ## Design Notes
//!
//! - The harness does not print reports itself. [`SuiteReport::assert_passed`] panics with
//!   every diagnostic so a `#[test]` fails with a readable message; everything else is left
//!   to the caller.
//! - Cases are always listed in name order, never in completion order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// Whole-text comparison differed. Carries both normalized texts.
    Content { expected: String, actual: String },
    /// Line comparison could not start because the line counts differ.
    LineCount { expected: usize, actual: usize },
    /// The line comparator rejected the line at `index` (zero-based).
    Line {
        index: usize,
        expected: String,
        actual: String,
    },
    /// The solver returned an I/O error.
    SolverError { message: String },
    /// The solver panicked.
    SolverPanic { message: String },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Content { expected, actual } => write!(
                f,
                "output mismatch\n--- expected ---\n{expected}\n--- actual ---\n{actual}"
            ),
            Failure::LineCount { expected, actual } => {
                write!(f, "result line count: expected {expected}, got {actual}")
            }
            Failure::Line {
                index,
                expected,
                actual,
            } => write!(f, "line {index}: expected {expected:?}, got {actual:?}"),
            Failure::SolverError { message } => write!(f, "solver returned an error: {message}"),
            Failure::SolverPanic { message } => write!(f, "solver panicked: {message}"),
        }
    }
}

/// Outcome of a single case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// The case name, i.e. the input file name.
    pub name: String,
    pub passed: bool,
    /// Wall time from opening the input to the end of comparison.
    pub duration_ms: u128,
    /// Empty when `passed`. Several entries only for line-level mismatches.
    pub failures: Vec<Failure>,
}

impl CaseReport {
    pub fn new(name: impl Into<String>, failures: Vec<Failure>, duration_ms: u128) -> Self {
        Self {
            name: name.into(),
            passed: failures.is_empty(),
            duration_ms,
            failures,
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            return write!(f, "PASS {}", self.name);
        }
        write!(f, "FAIL {}", self.name)?;
        for failure in &self.failures {
            write!(f, "\n  testing file {}, {}", self.name, failure)?;
        }
        Ok(())
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub test_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    /// Builds the report, ordering cases by name.
    pub fn new(
        test_dir: PathBuf,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        mut cases: Vec<CaseReport>,
    ) -> Self {
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        let passed = cases.iter().filter(|c| c.passed).count();
        Self {
            test_dir,
            started_at,
            finished_at,
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// Failing cases, in name order.
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// Pretty JSON rendering of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Panics with every failing case's diagnostics unless all cases passed.
    #[track_caller]
    pub fn assert_passed(&self) {
        if self.all_passed() {
            return;
        }
        let details = self
            .failures()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        panic!(
            "{} of {} test cases failed in {}\n{}",
            self.failed,
            self.total,
            self.test_dir.display(),
            details
        );
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            writeln!(f, "{case}")?;
        }
        write!(
            f,
            "{} passed, {} failed, {} total",
            self.passed, self.failed, self.total
        )
    }
}
