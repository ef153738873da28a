//! Shared fixture helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Directory holding the checked-in fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a markup fixture and the placeholder video into a fresh temp dir.
///
/// Returns the temp dir (keep it alive for the test's duration) and the
/// path of the copied markup file.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let src = fixtures_dir();

    fs::copy(src.join("video.mp4"), dir.path().join("video.mp4"))
        .expect("Failed to copy video fixture");
    let markup = dir.path().join(name);
    fs::copy(src.join(name), &markup).expect("Failed to copy markup fixture");

    (dir, markup)
}
