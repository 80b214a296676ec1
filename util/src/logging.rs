//! Tracing subscriber setup for harness runs.
//!
//! Test binaries call [`init_logging`] once (usually at the top of a test); repeated
//! calls are no-ops because the subscriber is installed with `try_init`.

use crate::config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// - Filter from `LOG_LEVEL`, falling back to the configured level.
/// - Stdout layer when `LOG_TO_STDOUT=true`, written through the test writer so
///   `cargo test` captures it per test.
/// - Daily-rolling file under `logs/` when `LOG_FILE` is set. Keep the returned
///   guard alive for the duration of the run or buffered lines are lost.
pub fn init_logging() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(config::log_level()));

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(true)
    });

    let log_file = config::log_file();
    let (file_layer, guard) = if log_file.is_empty() {
        (None, None)
    } else {
        std::fs::create_dir_all("logs").ok();
        let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily("logs", log_file));
        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .ok();
    tracing::debug!(file = guard.is_some(), "Logging initialised");

    guard
}
