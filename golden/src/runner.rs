//! # Runner Module
//!
//! Executes one case end to end on the calling thread: invoke the solver, normalize both
//! sides, compare. The steps always run in that order and nothing here is shared between
//! cases, so any number of cases may run this concurrently.

use crate::comparison::compare;
use crate::error::HarnessError;
use crate::report::{CaseReport, Failure};
use crate::traits::comparator::LineComparator;
use crate::traits::normalizer::Normalizer;
use crate::traits::solver::Solver;
use crate::types::TestCase;
use crate::utilities::file_loader::read_expected;
use crate::utilities::line_normalization::normalize_with;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, warn};

/// What the solver produced for one input.
#[derive(Debug)]
pub enum Captured {
    /// Everything the solver wrote, decoded as text.
    Output(String),
    /// The solver (or the final flush) returned an error.
    SolverError(io::Error),
}

/// Runs `solver` against the file at `input` and captures what it writes.
///
/// The input file is opened for the duration of the call only and is closed as soon as
/// the solver returns, whether or not it read anything. Output bytes are passed through
/// untouched apart from lossy UTF-8 decoding.
///
/// # Errors
///
/// [`HarnessError::OpenInput`] if the input cannot be opened. Solver errors are not
/// `Err`; they come back as [`Captured::SolverError`].
pub fn capture_output(input: &Path, solver: &dyn Solver) -> Result<Captured, HarnessError> {
    let file = File::open(input).map_err(|source| {
        error!(path = %input.display(), "Failed to open input file");
        HarnessError::OpenInput {
            path: input.to_path_buf(),
            source,
        }
    })?;
    let mut reader = BufReader::new(file);
    let mut writer = BufWriter::new(Vec::new());

    let solved = solver.solve(&mut reader, &mut writer);
    drop(reader);
    if let Err(e) = solved {
        return Ok(Captured::SolverError(e));
    }

    if let Err(e) = writer.flush() {
        return Ok(Captured::SolverError(e));
    }
    let bytes = match writer.into_inner() {
        Ok(bytes) => bytes,
        Err(e) => return Ok(Captured::SolverError(e.into_error())),
    };
    Ok(Captured::Output(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Runs one case: invoke, normalize both sides identically, compare.
///
/// # Errors
///
/// Only setup problems ([`HarnessError::OpenInput`], [`HarnessError::ReadExpected`]).
/// Mismatches and solver errors are recorded in the returned [`CaseReport`].
pub fn check_case(
    case: &TestCase,
    solver: &dyn Solver,
    comparator: Option<&dyn LineComparator>,
    normalizer: Option<&dyn Normalizer>,
) -> Result<CaseReport, HarnessError> {
    let started = Instant::now();
    debug!(case = %case.name, "Invoking solver");

    let actual = match capture_output(&case.input, solver)? {
        Captured::Output(text) => text,
        Captured::SolverError(e) => {
            warn!(case = %case.name, error = %e, "Solver returned an error");
            let failure = Failure::SolverError {
                message: e.to_string(),
            };
            return Ok(CaseReport::new(
                &case.name,
                vec![failure],
                started.elapsed().as_millis(),
            ));
        }
    };
    let expected = read_expected(case)?;

    let actual = normalize_with(&actual, normalizer);
    let expected = normalize_with(&expected, normalizer);

    let failures = compare(&expected, &actual, comparator);
    let report = CaseReport::new(&case.name, failures, started.elapsed().as_millis());
    if report.passed {
        debug!(case = %case.name, "Case passed");
    } else {
        warn!(case = %case.name, failures = report.failures.len(), "Case failed");
    }
    Ok(report)
}
