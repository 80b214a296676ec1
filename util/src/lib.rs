//! Shared plumbing for the golden harness: environment configuration, path
//! helpers, logging setup and test fixtures.

pub mod config;
pub mod logging;
pub mod paths;
pub mod test_helpers;
