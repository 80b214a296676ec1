use crate::config;
use std::path::{Path, PathBuf};

/// Resolve a possibly relative directory against `current_dir()`.
pub fn resolve<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Configured test-data directory (absolute), from `config::test_dir()`.
pub fn test_dir() -> PathBuf {
    resolve(config::test_dir())
}

/// Whether `file_name` is an expected-output file for the given suffix.
pub fn is_expected_file(file_name: &str, suffix: &str) -> bool {
    file_name.ends_with(suffix)
}

/// Input file of a case:  {dir}/{name}
pub fn input_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Expected output of a case:  {dir}/{name}{suffix}
/// Example: expected_path("testdata", "t1", ".a") → testdata/t1.a
pub fn expected_path(dir: &Path, name: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{name}{suffix}"))
}
