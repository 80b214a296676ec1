//! Harness Error Types
//!
//! This module defines the [`HarnessError`] enum: every error that aborts a whole run.
//! These indicate a broken test-data setup rather than a solver defect, so they are never
//! reported as a per-case failure and never retried.
//!
//! Solver-side problems (a mismatch, an I/O error returned by the solver, a panic) are
//! scoped to their case and live in [`crate::report::Failure`] instead.
//!
//! # Example
//!
//! ```rust
//! use golden::error::HarnessError;
//! use std::path::PathBuf;
//!
//! fn require_expected(path: PathBuf, exists: bool) -> Result<(), HarnessError> {
//!     if !exists {
//!         return Err(HarnessError::MissingExpected { case: "t3".into(), path });
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Represents all fatal error types that can occur in the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The test-data directory could not be listed.
    #[error("reading test directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered case has no expected-output file next to it.
    #[error("missing expected output for case '{case}': {}", .path.display())]
    MissingExpected { case: String, path: PathBuf },

    /// The expected-output file exists but could not be read.
    #[error("reading expected output {}: {source}", .path.display())]
    ReadExpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file of a case could not be opened.
    #[error("opening input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single case was requested by a name that is not a case in the directory.
    #[error("no test case named '{0}'")]
    CaseNotFound(String),

    /// The runtime backing the blocking entry points could not be built.
    #[error("starting runtime: {0}")]
    Runtime(#[source] io::Error),

    /// A case worker was lost for a reason other than a solver panic.
    #[error("case worker for '{case}' failed: {message}")]
    WorkerJoin { case: String, message: String },
}
