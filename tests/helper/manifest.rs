//! Manifest test utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Create a `Cargo.toml` with the given content in a fresh directory
pub fn create_test_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Path to a `Cargo.toml` that does not exist
pub fn missing_manifest() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    (temp_dir, path)
}
