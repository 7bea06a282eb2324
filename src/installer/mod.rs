//! Overlay installation
//!
//! Copies a vendor tree onto a project directory and records each copied
//! file in the [`EntryLedger`]. Directories are created but not recorded;
//! ignored directories in the ledger cover their contents.

use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::Result;
use crate::error::fs::read_dir_failed;
use crate::filesystem::{Filesystem, is_excluded, to_ledger_path};
use crate::ledger::EntryLedger;

/// Counters describing what an install did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallSummary {
    pub files_copied: usize,
    pub directories_created: usize,
    /// Top-most excluded paths (their subtrees are not counted)
    pub excluded: usize,
}

/// Copies a tree onto a destination and fills the ledger
pub struct TreeInstaller<F: Filesystem> {
    filesystem: F,
    ledger: EntryLedger,
    excludes: Vec<String>,
}

impl<F: Filesystem> TreeInstaller<F> {
    pub fn new(filesystem: F, ledger: EntryLedger, excludes: Vec<String>) -> Self {
        Self {
            filesystem,
            ledger,
            excludes,
        }
    }

    /// Copy every non-excluded entry of `source` into `destination`.
    ///
    /// Existing destination files are overwritten, except the ledger file
    /// itself. Copying stops at the first failure, leaving whatever was
    /// copied so far in place.
    pub fn install(&mut self, source: &Path, destination: &Path) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();
        let mut excluded = 0;
        let excludes = &self.excludes;
        let ledger_path = self.ledger.path_within(destination).map(Path::to_path_buf);

        let walker = WalkDir::new(source)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
                if ledger_path.as_deref() == Some(relative) {
                    debug!(path = %relative.display(), "skipped ledger file");
                    return false;
                }
                if is_excluded(excludes, relative) {
                    debug!(path = %relative.display(), "excluded");
                    excluded += 1;
                    return false;
                }
                true
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source);
                read_dir_failed(path.display().to_string(), e.to_string())
            })?;

            let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                if !self.filesystem.exists(&target) {
                    self.filesystem.create_dir_all(&target)?;
                    summary.directories_created += 1;
                }
                continue;
            }

            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.copy_file(entry.path(), &target)?;
            self.ledger.add_entry(&to_ledger_path(relative));
            debug!(path = %target.display(), "copied file");
            summary.files_copied += 1;
        }
        summary.excluded = excluded;

        info!(
            source = %source.display(),
            destination = %destination.display(),
            files = summary.files_copied,
            "installed overlay"
        );

        Ok(summary)
    }

    #[allow(dead_code)] // Used in tests
    pub fn ledger(&self) -> &EntryLedger {
        &self.ledger
    }

    /// Hand the ledger back so the caller can close it
    pub fn into_ledger(self) -> EntryLedger {
        self.ledger
    }
}
