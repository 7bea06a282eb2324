//! Common test utilities for overlay integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A vendor tree and a project directory side by side
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Source tree being overlaid
    pub vendor: PathBuf,
    /// Destination project directory
    pub project: PathBuf,
}

impl TestWorkspace {
    /// Create empty vendor and project directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let vendor = temp.path().join("vendor");
        let project = temp.path().join("project");
        std::fs::create_dir_all(&vendor).expect("Failed to create vendor directory");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        Self {
            temp,
            vendor,
            project,
        }
    }

    /// Write a file in the vendor tree
    pub fn write_vendor_file(&self, path: &str, content: &str) {
        write_file(&self.vendor.join(path), content);
    }

    /// Write a file in the project
    pub fn write_project_file(&self, path: &str, content: &str) {
        write_file(&self.project.join(path), content);
    }

    /// Create an empty directory in the vendor tree
    #[allow(dead_code)]
    pub fn create_vendor_dir(&self, path: &str) {
        std::fs::create_dir_all(self.vendor.join(path)).expect("Failed to create directory");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_project_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.project.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    pub fn project_exists(&self, path: &str) -> bool {
        self.project.join(path).exists()
    }

    /// Names directly under the project root, sorted
    #[allow(dead_code)]
    pub fn project_listing(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.project)
            .expect("Failed to read project directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Command for the overlay binary targeting the workspace's project
#[allow(deprecated)]
pub fn overlay_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("overlay").expect("Failed to find overlay binary");
    cmd.env_remove("OVERLAY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--workspace").arg(&workspace.project);
    cmd
}
