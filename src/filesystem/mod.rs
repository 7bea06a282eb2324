//! File system capability used by the installer and uninstaller
//!
//! The core never touches `std::fs` for tree operations directly; it goes
//! through [`Filesystem`] so tests can observe the order of operations.
//! Symlinks are treated as plain files and are never followed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::fs::{read_dir_error, remove_error, write_error};
use crate::error::Result;

/// Filesystem operations consumed by overlay
pub trait Filesystem {
    /// Returns `true` if something (file, directory or link) is at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory (links are not followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if the directory at `path` has no children
    fn is_dir_empty(&self, path: &Path) -> Result<bool>;

    /// Lists the direct children of a directory, sorted, without `.` and `..`
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Removes an empty directory
    fn remove_dir(&self, path: &Path) -> Result<()>;

    /// Deletes a single file
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Ensures a directory exists, creating parents as needed
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copies a file, replacing any existing file at `to`
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;
}

/// [`Filesystem`] backed by the local disk
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
    }

    fn is_dir_empty(&self, path: &Path) -> Result<bool> {
        let mut entries = fs::read_dir(path).map_err(|e| read_dir_error(path, &e))?;
        Ok(entries.next().is_none())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| read_dir_error(path, &e))? {
            let entry = entry.map_err(|e| read_dir_error(path, &e))?;
            children.push(entry.path());
        }
        children.sort();
        Ok(children)
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        fs::remove_dir(path).map_err(|e| remove_error(path, &e))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| remove_error(path, &e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| write_error(path, &e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| write_error(to, &e))
    }
}

/// An entry produced by a tree walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walk root
    pub relative: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Enumerate everything below `root`, children before their directory.
///
/// `root` itself is not part of the result. Entries for which `skip`
/// returns `true` are left out together with everything below them.
pub fn walk_children_first<F: Filesystem + ?Sized>(
    fs: &F,
    root: &Path,
    skip: &dyn Fn(&Path) -> bool,
) -> Result<Vec<WalkEntry>> {
    let mut entries = Vec::new();
    visit_children_first(fs, root, Path::new(""), skip, &mut entries)?;
    Ok(entries)
}

fn visit_children_first<F: Filesystem + ?Sized>(
    fs: &F,
    dir: &Path,
    relative_dir: &Path,
    skip: &dyn Fn(&Path) -> bool,
    entries: &mut Vec<WalkEntry>,
) -> Result<()> {
    for child in fs.read_dir(dir)? {
        let Some(name) = child.file_name() else {
            continue;
        };
        let relative = relative_dir.join(name);
        if skip(&relative) {
            continue;
        }
        let is_dir = fs.is_dir(&child);

        if is_dir {
            visit_children_first(fs, &child, &relative, skip, entries)?;
        }

        entries.push(WalkEntry { relative, is_dir });
    }

    Ok(())
}

/// Render a relative path with `/` separators, as stored in the ledger
pub fn to_ledger_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// An exclude matches the exact relative path, any path below it, or the
/// entry's own file name.
pub fn is_excluded(excludes: &[String], relative: &Path) -> bool {
    let path = to_ledger_path(relative);
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    excludes.iter().any(|exclude| {
        let exclude = exclude.trim_matches('/');
        path == exclude
            || path
                .strip_prefix(exclude)
                .is_some_and(|rest| rest.starts_with('/'))
            || name == exclude
    })
}
