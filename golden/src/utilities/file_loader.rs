//!
//! Test Case Discovery
//!
//! This module lists a test-data directory and pairs every input file with its expected
//! output. A file whose name ends with the expected-output suffix is only ever an expected
//! output, never an input of its own.
//!
//! # Functionality
//!
//! - [`discover`]: every case in a directory, sorted by name.
//! - [`find_case`]: one case by name.
//! - [`read_expected`]: the raw expected text of a case.
//!
//! # Error Handling
//!
//! An unreadable directory, a missing or unreadable expected file, or an unknown case name
//! is a [`HarnessError`]. The whole run stops on these; they are never per-case failures.

use crate::error::HarnessError;
use crate::types::TestCase;
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};
use util::paths::{expected_path, input_path, is_expected_file};

/// Builds the case for `name` and checks that its expected output exists.
fn pair(dir: &Path, name: &str, suffix: &str) -> Result<TestCase, HarnessError> {
    let expected = expected_path(dir, name, suffix);
    if !expected.is_file() {
        error!(case = name, path = %expected.display(), "Expected output file not found");
        return Err(HarnessError::MissingExpected {
            case: name.to_string(),
            path: expected,
        });
    }
    Ok(TestCase {
        name: name.to_string(),
        input: input_path(dir, name),
        expected,
    })
}

/// Lists every case in `dir`.
///
/// - Sub-directories are skipped; every other entry not ending in `suffix` is a case.
/// - Cases are sorted by name so reports are reproducible regardless of the order the
///   filesystem lists entries in.
/// - Every case's expected output must exist. The check runs for all cases before this
///   returns, so a broken setup is reported before any solver is invoked.
///
/// # Errors
///
/// [`HarnessError::ReadDir`] if the directory cannot be listed and
/// [`HarnessError::MissingExpected`] for the first case without an expected file.
pub fn discover(dir: &Path, suffix: &str) -> Result<Vec<TestCase>, HarnessError> {
    let read_dir_error = |source| {
        error!(path = %dir.display(), "Failed to read test directory");
        HarnessError::ReadDir {
            path: dir.to_path_buf(),
            source,
        }
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(entry = ?entry.file_name(), "Skipping entry with a non UTF-8 name");
            continue;
        };
        if is_expected_file(&name, suffix) {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let cases = names
        .iter()
        .map(|name| pair(dir, name, suffix))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(dir = %dir.display(), count = cases.len(), "Discovered test cases");
    Ok(cases)
}

/// Looks up a single case by its input file name.
///
/// # Errors
///
/// [`HarnessError::CaseNotFound`] when `name` carries the expected suffix or no such input
/// file exists, [`HarnessError::MissingExpected`] when the input has no expected output.
pub fn find_case(dir: &Path, suffix: &str, name: &str) -> Result<TestCase, HarnessError> {
    if is_expected_file(name, suffix) || !input_path(dir, name).is_file() {
        error!(case = name, dir = %dir.display(), "Requested test case does not exist");
        return Err(HarnessError::CaseNotFound(name.to_string()));
    }
    pair(dir, name, suffix)
}

/// Reads the expected output of `case`. Invalid UTF-8 is replaced, not rejected.
pub fn read_expected(case: &TestCase) -> Result<String, HarnessError> {
    let bytes = fs::read(&case.expected).map_err(|source| {
        error!(case = %case.name, path = %case.expected.display(), "Failed to read expected output");
        HarnessError::ReadExpected {
            path: case.expected.clone(),
            source,
        }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    //! Unit tests for discovery. Fixture directories are built in temp dirs so each test
    //! controls exactly which files exist.
    use super::*;
    use util::test_helpers::setup_test_data_dir;

    fn names(cases: &[TestCase]) -> Vec<&str> {
        cases.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_excludes_expected_files() {
        let dir = setup_test_data_dir(&[("t1", "1"), ("t1.a", "1"), ("t2", "2"), ("t2.a", "2")]);
        let cases = discover(dir.path(), ".a").unwrap();
        assert_eq!(names(&cases), vec!["t1", "t2"]);
        assert_eq!(cases[0].input, dir.path().join("t1"));
        assert_eq!(cases[0].expected, dir.path().join("t1.a"));
    }

    #[test]
    fn test_sorted_by_name() {
        let dir = setup_test_data_dir(&[
            ("c", ""),
            ("c.a", ""),
            ("a", ""),
            ("a.a", ""),
            ("b", ""),
            ("b.a", ""),
        ]);
        let cases = discover(dir.path(), ".a").unwrap();
        assert_eq!(names(&cases), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_expected_is_fatal() {
        let dir = setup_test_data_dir(&[("t1", "1"), ("t1.a", "1"), ("t3", "3")]);
        match discover(dir.path(), ".a") {
            Err(HarnessError::MissingExpected { case, path }) => {
                assert_eq!(case, "t3");
                assert_eq!(path, dir.path().join("t3.a"));
            }
            other => panic!("Expected MissingExpected, got: {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_directory_is_fatal() {
        let dir = setup_test_data_dir(&[]);
        let missing = dir.path().join("does-not-exist");
        match discover(&missing, ".a") {
            Err(HarnessError::ReadDir { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected ReadDir, got: {:?}", other),
        }
    }

    #[test]
    fn test_subdirectories_skipped() {
        let dir = setup_test_data_dir(&[("t1", "1"), ("t1.a", "1")]);
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let cases = discover(dir.path(), ".a").unwrap();
        assert_eq!(names(&cases), vec!["t1"]);
    }

    #[test]
    fn test_custom_suffix() {
        let dir = setup_test_data_dir(&[("in1", "1"), ("in1.out", "1"), ("in1.a", "x")]);
        let err = discover(dir.path(), ".out").unwrap_err();
        // With ".out" as the suffix, "in1.a" is an input and has no "in1.a.out".
        assert!(matches!(err, HarnessError::MissingExpected { ref case, .. } if case == "in1.a"));
    }

    #[test]
    fn test_empty_directory() {
        let dir = setup_test_data_dir(&[]);
        assert!(discover(dir.path(), ".a").unwrap().is_empty());
    }

    #[test]
    fn test_find_case() {
        let dir = setup_test_data_dir(&[("t1", "1"), ("t1.a", "1"), ("t2", "2")]);
        assert_eq!(find_case(dir.path(), ".a", "t1").unwrap().name, "t1");
        assert!(matches!(
            find_case(dir.path(), ".a", "t1.a"),
            Err(HarnessError::CaseNotFound(_))
        ));
        assert!(matches!(
            find_case(dir.path(), ".a", "nope"),
            Err(HarnessError::CaseNotFound(_))
        ));
        assert!(matches!(
            find_case(dir.path(), ".a", "t2"),
            Err(HarnessError::MissingExpected { .. })
        ));
    }

    #[test]
    fn test_read_expected() {
        let dir = setup_test_data_dir(&[("t1", "1"), ("t1.a", "6\r\n")]);
        let case = find_case(dir.path(), ".a", "t1").unwrap();
        assert_eq!(read_expected(&case).unwrap(), "6\r\n");
    }
}
