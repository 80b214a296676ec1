//! Global harness configuration manager.
//!
//! `HarnessConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! The harness itself never reads this singleton mid-run: [`HarnessConfig::global`] is
//! consulted once when a harness is built, and every field can be overridden per harness.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Directory searched for test pairs when nothing else is configured.
pub const DEFAULT_TEST_DIR: &str = "testdata";

/// Suffix that marks a file as the expected output of its input sibling.
pub const DEFAULT_EXPECTED_SUFFIX: &str = ".a";

/// Represents the complete harness configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub test_dir: String,
    pub expected_suffix: String,
    pub max_parallel: usize,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
}

/// Lazily-initialized, thread-safe singleton instance of `HarnessConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<HarnessConfig>> = OnceLock::new();

fn default_max_parallel() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_dir: DEFAULT_TEST_DIR.into(),
            expected_suffix: DEFAULT_EXPECTED_SUFFIX.into(),
            max_parallel: default_max_parallel(),
            log_level: "golden=info".into(),
            log_file: String::new(),
            log_to_stdout: false,
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or malformed values fall back to [`HarnessConfig::default`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            test_dir: env::var("GOLDEN_TEST_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.test_dir),
            expected_suffix: env::var("GOLDEN_EXPECTED_SUFFIX")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.expected_suffix),
            max_parallel: env::var("GOLDEN_MAX_PARALLEL")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_parallel),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
        }
    }

    /// Returns a snapshot of the global configuration.
    ///
    /// A poisoned lock still yields the last written value.
    pub fn global() -> HarnessConfig {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(HarnessConfig::from_env()));
        match lock.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = match lock.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = HarnessConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut HarnessConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(HarnessConfig::from_env()));
        let mut guard = match lock.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_test_dir(value: impl Into<String>) {
        HarnessConfig::set_field(|cfg| cfg.test_dir = value.into());
    }

    pub fn set_expected_suffix(value: impl Into<String>) {
        HarnessConfig::set_field(|cfg| cfg.expected_suffix = value.into());
    }

    /// Override `max_parallel`. Zero is clamped to one.
    pub fn set_max_parallel(value: usize) {
        HarnessConfig::set_field(|cfg| cfg.max_parallel = value.max(1));
    }

    pub fn set_log_level(value: impl Into<String>) {
        HarnessConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        HarnessConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        HarnessConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }
}

pub fn test_dir() -> String {
    HarnessConfig::global().test_dir
}

pub fn expected_suffix() -> String {
    HarnessConfig::global().expected_suffix
}

pub fn max_parallel() -> usize {
    HarnessConfig::global().max_parallel
}

pub fn log_level() -> String {
    HarnessConfig::global().log_level
}

pub fn log_file() -> String {
    HarnessConfig::global().log_file
}

pub fn log_to_stdout() -> bool {
    HarnessConfig::global().log_to_stdout
}
