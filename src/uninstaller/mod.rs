//! Removal of a previously overlaid tree
//!
//! The uninstaller walks the *source* tree, not the destination, so only
//! paths the overlay could have put there are ever touched. Files are
//! deleted; directories are removed only once nothing is left in them.
//! Because the walk is children-first, by the time a directory is checked
//! only foreign files can keep it alive.
//!
//! A destination directory that was already empty before the overlay was
//! installed is removed too; the two cases cannot be told apart.
//!
//! Excluded source paths and the ledger file are never touched, the same
//! way the installer never writes them.

use std::cell::Cell;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::filesystem::{Filesystem, is_excluded, walk_children_first};
use crate::ledger::EntryLedger;

/// Counters describing what an uninstall did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UninstallSummary {
    pub files_removed: usize,
    pub directories_removed: usize,
    /// Directories left in place because they still had foreign content
    pub directories_kept: usize,
    /// Source entries with no counterpart in the destination
    pub missing: usize,
    /// Top-most excluded paths (their subtrees are not counted)
    pub excluded: usize,
}

/// Removes an installed tree and clears the ledger
pub struct TreeUninstaller<F: Filesystem> {
    filesystem: F,
    ledger: EntryLedger,
    excludes: Vec<String>,
}

impl<F: Filesystem> TreeUninstaller<F> {
    pub fn new(filesystem: F, ledger: EntryLedger, excludes: Vec<String>) -> Self {
        Self {
            filesystem,
            ledger,
            excludes,
        }
    }

    /// Remove everything under `destination` that mirrors `source`.
    ///
    /// Missing destination paths are skipped. The ledger is wiped once the
    /// walk completes, however much was removed. A filesystem failure stops
    /// the walk; nothing removed before it is restored.
    pub fn uninstall(&mut self, source: &Path, destination: &Path) -> Result<UninstallSummary> {
        let mut summary = UninstallSummary::default();
        let excluded = Cell::new(0);
        let ledger_path = self.ledger.path_within(destination);

        let skip = |relative: &Path| {
            if ledger_path == Some(relative) {
                debug!(path = %relative.display(), "skipped ledger file");
                return true;
            }
            if is_excluded(&self.excludes, relative) {
                debug!(path = %relative.display(), "excluded");
                excluded.set(excluded.get() + 1);
                return true;
            }
            false
        };
        let entries = walk_children_first(&self.filesystem, source, &skip)?;
        summary.excluded = excluded.get();

        for entry in entries {
            let target = destination.join(&entry.relative);

            if !self.filesystem.exists(&target) {
                summary.missing += 1;
                continue;
            }

            if entry.is_dir {
                if self.filesystem.is_dir_empty(&target)? {
                    self.filesystem.remove_dir(&target)?;
                    debug!(path = %target.display(), "removed directory");
                    summary.directories_removed += 1;
                } else {
                    debug!(path = %target.display(), "kept non-empty directory");
                    summary.directories_kept += 1;
                }
                continue;
            }

            self.filesystem.remove_file(&target)?;
            debug!(path = %target.display(), "removed file");
            summary.files_removed += 1;
        }

        debug!(entries = self.ledger.len(), "wiping ledger");
        self.ledger.wipe_out();

        info!(
            source = %source.display(),
            destination = %destination.display(),
            files = summary.files_removed,
            directories = summary.directories_removed,
            "uninstalled overlay"
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
