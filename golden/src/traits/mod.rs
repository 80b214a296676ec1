//!
//! Traits Module
//!
//! This module contains the seams of the harness. Each one is a strategy injected into
//! [`crate::Harness`] at configuration time and shared by reference across every case
//! of a run, so implementations must be `Send + Sync` and free of side effects.
//!
//! - [`solver`]: The program under test, as a stream-in / stream-out callable.
//! - [`comparator`]: Optional per-line equality for tolerant comparison.
//! - [`normalizer`]: Optional text transformation applied to both sides before comparing.
//!
//! Plain closures implement all three traits.

pub mod comparator;
pub mod normalizer;
pub mod solver;
