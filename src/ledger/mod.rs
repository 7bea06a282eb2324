//! Ledger of installed paths, persisted as an ignore-list file
//!
//! The ledger remembers every path an overlay put into a project so the
//! paths can be ignored by version control. Children of an ignored
//! directory are never listed one by one; the directory itself is recorded
//! instead, the first time one of its descendants is added.
//!
//! ## Usage
//!
//! ```ignore
//! let mut ledger = EntryLedger::open(".gitignore", vec!["lib/vendor".into()], true)?;
//! ledger.add_entry("app/Mage.php");
//! ledger.add_entry("lib/vendor/Zend/Db.php"); // records "lib/vendor"
//!
//! // Writes the file, at most once
//! ledger.close()?;
//! ```
//!
//! The file is only touched on close, and only if something changed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::error::fs::{read_error, write_error};

/// Ordered, de-duplicated list of installed paths backed by a file
#[derive(Debug)]
pub struct EntryLedger {
    /// Location of the persisted ledger
    path: PathBuf,

    /// Directories whose contents are covered by the directory entry
    ignored_directories: Vec<String>,

    /// Recorded paths, in insertion order
    entries: Vec<String>,

    /// Whether entries changed since they were loaded
    dirty: bool,

    /// Whether the persistence step already ran
    closed: bool,
}

impl EntryLedger {
    /// Open a ledger at `path`.
    ///
    /// With `load_existing`, each non-empty line of an existing file becomes
    /// an entry. A missing file is an empty ledger.
    pub fn open(
        path: impl Into<PathBuf>,
        ignored_directories: Vec<String>,
        load_existing: bool,
    ) -> Result<Self> {
        let path = path.into();
        let mut ledger = Self {
            path,
            ignored_directories,
            entries: Vec::new(),
            dirty: false,
            closed: false,
        };

        if load_existing && ledger.path.exists() {
            let content =
                fs::read_to_string(&ledger.path).map_err(|e| read_error(&ledger.path, &e))?;
            for line in content.lines().filter(|line| !line.is_empty()) {
                if !ledger.contains(line) {
                    ledger.entries.push(line.to_string());
                }
            }
            debug!(
                path = %ledger.path.display(),
                entries = ledger.entries.len(),
                "loaded ledger"
            );
        }

        Ok(ledger)
    }

    /// Record an installed path
    pub fn add_entry(&mut self, path: &str) {
        if self.contains(path) {
            return;
        }

        let entry = match self.ignored_ancestor(path) {
            Some(dir) => {
                if self.contains_directory(dir) {
                    return;
                }
                dir.to_string()
            }
            None => path.to_string(),
        };

        self.entries.push(entry);
        self.dirty = true;
    }

    /// Forget every entry. The next close commits the empty state.
    pub fn wipe_out(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    /// Recorded entries, in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ledger location relative to `root`, if the ledger lives under it
    pub fn path_within(&self, root: &Path) -> Option<&Path> {
        self.path.strip_prefix(root).ok()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether close would write anything
    #[allow(dead_code)] // Used in tests
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the ledger and consume it.
    ///
    /// Nothing is written unless the entries changed. An empty ledger
    /// truncates an existing file but never creates a new one.
    pub fn close(mut self) -> Result<()> {
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        if !self.dirty {
            return Ok(());
        }

        if self.entries.is_empty() && !self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, &e))?;
            }
        }

        fs::write(&self.path, self.entries.join("\n")).map_err(|e| write_error(&self.path, &e))?;
        debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "wrote ledger"
        );

        Ok(())
    }

    /// First ignored directory that `path` lives under
    fn ignored_ancestor(&self, path: &str) -> Option<&str> {
        self.ignored_directories
            .iter()
            .map(String::as_str)
            .find(|dir| is_under_directory(path, dir))
    }

    /// Whether `dir` is recorded, with or without its trailing slash
    fn contains_directory(&self, dir: &str) -> bool {
        let bare = dir.trim_end_matches('/');
        self.entries
            .iter()
            .any(|entry| entry.trim_end_matches('/') == bare)
    }
}

impl Drop for EntryLedger {
    fn drop(&mut self) {
        if let Err(e) = self.persist() {
            warn!(path = %self.path.display(), "failed to write ledger: {}", e);
        }
    }
}

/// Literal prefix test: `dir` and `dir/` both match `dir/anything`
fn is_under_directory(path: &str, dir: &str) -> bool {
    let bare = dir.trim_end_matches('/');
    if bare.is_empty() {
        return false;
    }
    path.strip_prefix(bare)
        .is_some_and(|rest| rest.starts_with('/'))
}
