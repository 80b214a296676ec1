use std::fs;
use tempfile::TempDir;

/// Creates a unique temporary test-data directory populated with `files`
/// (`(file_name, contents)` pairs). The directory is automatically cleaned up
/// when the returned `TempDir` is dropped.
///
/// Keep the returned `TempDir` in scope for as long as you need the files.
pub fn setup_test_data_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    for (name, contents) in files {
        fs::write(tmp.path().join(name), contents).expect("failed to write fixture file");
    }
    tmp
}
