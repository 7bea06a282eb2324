//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_test_files};
//!
//! let temp = create_temp_dir();
//! create_test_files(&temp, &[("app/Mage.php", "<?php")]);
//! ```

use std::path::Path;

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create test files below a temp directory.
///
/// Takes a list of (path, content) tuples. Parent directories are created.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    write_files(temp.path(), files);
}

/// Create test files below an arbitrary directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn write_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Create a source tree and a destination directory side by side.
///
/// Returns the temp dir plus the `vendor` and `project` paths.
///
/// # Panics
///
/// Panics if the directories cannot be created.
#[must_use]
pub fn create_overlay_pair() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp = create_temp_dir();
    let source = temp.path().join("vendor");
    let destination = temp.path().join("project");
    std::fs::create_dir_all(&source).expect("Failed to create source directory");
    std::fs::create_dir_all(&destination).expect("Failed to create destination directory");
    (temp, source, destination)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("app/code/Mage.php", "<?php"), ("index.php", "")]);

        assert!(temp.path().join("app/code/Mage.php").exists());
        let content =
            std::fs::read_to_string(temp.path().join("app/code/Mage.php")).expect("Failed to read");
        assert_eq!(content, "<?php");
    }

    #[test]
    fn test_create_overlay_pair() {
        let (temp, source, destination) = create_overlay_pair();
        assert!(source.is_dir());
        assert!(destination.is_dir());
        assert!(source.starts_with(temp.path()));
    }
}
