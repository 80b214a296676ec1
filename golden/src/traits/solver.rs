//! # Solver Trait
//!
//! The program under test. A solver reads its whole input from `input` and writes its whole
//! answer to `output` before returning; the harness imposes no timeout, so a solver that
//! never returns blocks its case forever.

use std::io::{self, BufRead, Write};

/// A stream-in / stream-out program under test.
///
/// Returning `Err` marks the case as failed with [`crate::report::Failure::SolverError`];
/// sibling cases keep running.
pub trait Solver: Send + Sync {
    fn solve(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()>;
}

impl<F> Solver for F
where
    F: Fn(&mut dyn BufRead, &mut dyn Write) -> io::Result<()> + Send + Sync,
{
    fn solve(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        self(input, output)
    }
}
