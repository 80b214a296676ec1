//! # Golden Library
//!
//! This crate provides a file-based golden-test harness for small stream-in / stream-out
//! programs, the kind written for competitive-programming problems. It discovers
//! input / expected-output pairs in a directory, runs a solver against each input,
//! normalizes both sides and compares them, reporting every case on its own.
//!
//! ## Key Concepts
//! - **Harness**: The orchestrator. Built from a solver plus optional strategies.
//! - **Test-data layout**: `<name>` is an input, `<name>.a` its expected output. Any file
//!   ending in `.a` is only ever an expected output.
//! - **Comparators**: Optional per-line equality (exact, numeric tolerance, regex, closures).
//! - **Normalizers**: Optional text transforms applied identically to both sides after the
//!   mandatory line-ending and trailing-newline cleanup.
//! - **Reports**: Per-case pass/fail with line-level diagnostics, see [`report`].
//!
//! ## Example
//!
//! ```no_run
//! use golden::Harness;
//! use golden::comparators::ToleranceComparator;
//! use std::io::{self, BufRead, Write};
//!
//! fn solve(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
//!     let mut line = String::new();
//!     input.read_line(&mut line)?;
//!     let n: f64 = line.trim().parse().unwrap_or(0.0);
//!     writeln!(output, "{:.9}", n.sqrt())
//! }
//!
//! Harness::new(solve)
//!     .with_test_dir("testdata")
//!     .with_comparator(ToleranceComparator::default())
//!     .run_all_blocking()
//!     .expect("test data is set up")
//!     .assert_passed();
//! ```

pub mod comparators;
pub mod comparison;
pub mod error;
pub mod report;
pub mod runner;
pub mod traits;
pub mod types;
pub mod utilities;

pub use util::logging::init_logging;

use crate::error::HarnessError;
use crate::report::{CaseReport, Failure, SuiteReport};
use crate::traits::comparator::LineComparator;
use crate::traits::normalizer::Normalizer;
use crate::traits::solver::Solver;
use crate::types::TestCase;
use crate::utilities::file_loader;

use chrono::Utc;
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use util::config;

/// The strategies of one run, shared read-only by every case.
struct Strategies {
    solver: Arc<dyn Solver>,
    comparator: Option<Arc<dyn LineComparator>>,
    normalizer: Option<Arc<dyn Normalizer>>,
}

impl Strategies {
    fn check(&self, case: &TestCase) -> Result<CaseReport, HarnessError> {
        runner::check_case(
            case,
            self.solver.as_ref(),
            self.comparator.as_deref(),
            self.normalizer.as_deref(),
        )
    }
}

/// Represents a golden-test run over one test-data directory.
///
/// Holds the solver, the optional comparison strategies and where to find test data.
/// Directory, suffix and parallelism default to [`util::config::HarnessConfig::global`] and can be
/// overridden per harness, so two harnesses never affect each other.
///
/// # Fields
/// - `solver`: The program under test.
/// - `comparator`: Per-line equality. `None` means whole-text equality.
/// - `normalizer`: Extra normalization after the mandatory canonicalization.
/// - `test_dir`: Directory holding the input / expected pairs.
/// - `expected_suffix`: Suffix that marks expected-output files.
/// - `max_parallel`: Upper bound on cases running at the same time.
pub struct Harness {
    solver: Arc<dyn Solver>,
    comparator: Option<Arc<dyn LineComparator>>,
    normalizer: Option<Arc<dyn Normalizer>>,
    test_dir: PathBuf,
    expected_suffix: String,
    max_parallel: usize,
}

impl Harness {
    /// Create a harness for `solver` with configuration defaults.
    ///
    /// # Arguments
    /// * `solver` - Any [`Solver`], including a plain
    ///   `fn(&mut dyn BufRead, &mut dyn Write) -> io::Result<()>`.
    pub fn new<S: Solver + 'static>(solver: S) -> Self {
        Self {
            solver: Arc::new(solver),
            comparator: None,
            normalizer: None,
            test_dir: util::paths::test_dir(),
            expected_suffix: config::expected_suffix(),
            max_parallel: config::max_parallel().max(1),
        }
    }

    /// Read test data from `dir` instead of the configured directory.
    pub fn with_test_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_dir = util::paths::resolve(dir.into());
        self
    }

    /// Use `suffix` to recognise expected-output files.
    ///
    /// An empty suffix is ignored: it would mark every file as expected output and leave
    /// nothing to run.
    pub fn with_expected_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if suffix.is_empty() {
            warn!("Ignoring empty expected-output suffix");
        } else {
            self.expected_suffix = suffix;
        }
        self
    }

    /// Compare line by line with `comparator` instead of whole-text equality.
    pub fn with_comparator<C: LineComparator + 'static>(mut self, comparator: C) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Apply `normalizer` to both expected and actual text before comparing.
    pub fn with_normalizer<N: Normalizer + 'static>(mut self, normalizer: N) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    /// Run at most `max_parallel` cases at once. Zero is treated as one.
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    pub fn expected_suffix(&self) -> &str {
        &self.expected_suffix
    }

    /// All cases in the test directory, sorted by name.
    ///
    /// # Errors
    /// Fatal setup errors, see [`file_loader::discover`].
    pub fn discover(&self) -> Result<Vec<TestCase>, HarnessError> {
        file_loader::discover(&self.test_dir, &self.expected_suffix)
    }

    /// Run every discovered case.
    ///
    /// Cases run concurrently on blocking worker threads. A failing case never stops
    /// the others; a fatal [`HarnessError`] stops launching cases and is returned.
    ///
    /// # Returns
    /// * `Ok(SuiteReport)` with one entry per case, in name order.
    /// * `Err(HarnessError)` for discovery or per-case setup errors.
    pub async fn run_all(&self) -> Result<SuiteReport, HarnessError> {
        let started_at = Utc::now();
        let cases = self.discover()?;
        info!(
            dir = %self.test_dir.display(),
            cases = cases.len(),
            "Running golden tests"
        );

        let reports = self.run_cases(cases).await?;
        let suite = SuiteReport::new(self.test_dir.clone(), started_at, Utc::now(), reports);
        info!(
            passed = suite.passed,
            failed = suite.failed,
            total = suite.total,
            "Golden tests finished"
        );
        Ok(suite)
    }

    /// Run the single case named `name` (the input file name).
    ///
    /// # Errors
    /// [`HarnessError::CaseNotFound`] for an unknown name, plus the setup errors of
    /// [`Harness::run_all`].
    pub async fn run_case(&self, name: &str) -> Result<CaseReport, HarnessError> {
        let case = file_loader::find_case(&self.test_dir, &self.expected_suffix, name)?;
        let mut reports = self.run_cases(vec![case]).await?;
        reports
            .pop()
            .ok_or_else(|| HarnessError::CaseNotFound(name.to_string()))
    }

    /// [`Harness::run_all`] on a dedicated runtime, for plain `#[test]` functions.
    ///
    /// Must not be called from inside an async context.
    pub fn run_all_blocking(&self) -> Result<SuiteReport, HarnessError> {
        build_runtime()?.block_on(self.run_all())
    }

    /// [`Harness::run_case`] on a dedicated runtime, for plain `#[test]` functions.
    pub fn run_case_blocking(&self, name: &str) -> Result<CaseReport, HarnessError> {
        build_runtime()?.block_on(self.run_case(name))
    }

    fn strategies(&self) -> Arc<Strategies> {
        Arc::new(Strategies {
            solver: Arc::clone(&self.solver),
            comparator: self.comparator.clone(),
            normalizer: self.normalizer.clone(),
        })
    }

    async fn run_cases(&self, cases: Vec<TestCase>) -> Result<Vec<CaseReport>, HarnessError> {
        let strategies = self.strategies();
        let permits = Arc::new(Semaphore::new(self.max_parallel));
        let mut workers: JoinSet<Result<CaseReport, HarnessError>> = JoinSet::new();

        for case in cases {
            let strategies = Arc::clone(&strategies);
            let permits = Arc::clone(&permits);
            workers.spawn(async move {
                let name = case.name.clone();
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return Err(HarnessError::WorkerJoin {
                            case: name,
                            message: e.to_string(),
                        });
                    }
                };

                let started = Instant::now();
                match tokio::task::spawn_blocking(move || strategies.check(&case)).await {
                    Ok(result) => result,
                    Err(e) if e.is_panic() => {
                        let message = panic_message(e.into_panic());
                        error!(case = %name, %message, "Solver panicked");
                        Ok(CaseReport::new(
                            name,
                            vec![Failure::SolverPanic { message }],
                            started.elapsed().as_millis(),
                        ))
                    }
                    Err(e) => Err(HarnessError::WorkerJoin {
                        case: name,
                        message: e.to_string(),
                    }),
                }
            });
        }

        let mut reports = Vec::new();
        while let Some(joined) = workers.join_next().await {
            let outcome = joined.map_err(|e| HarnessError::WorkerJoin {
                case: String::from("<unknown>"),
                message: e.to_string(),
            });
            match outcome.and_then(|result| result) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(error = %e, "Aborting golden test run");
                    workers.abort_all();
                    return Err(e);
                }
            }
        }
        Ok(reports)
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, HarnessError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(HarnessError::Runtime)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("non-string panic payload")
    }
}
