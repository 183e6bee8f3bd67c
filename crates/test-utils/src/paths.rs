//! Temporary fixture files.

use std::path::PathBuf;

use tempfile::TempDir;

/// Creates a fresh temporary directory; removed when dropped.
pub fn temp_output_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
