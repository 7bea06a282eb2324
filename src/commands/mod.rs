//! Command implementations for the overlay CLI
//!
//! Commands are thin wrappers: they resolve the destination, load the
//! configuration and open the ledger, then delegate to the installer or
//! uninstaller.

pub mod entries;
pub mod install;
pub mod uninstall;

use std::path::{Path, PathBuf};

use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::ledger::EntryLedger;

/// Everything a command needs to act on a destination
pub struct CommandContext {
    pub destination: PathBuf,
    pub config: OverlayConfig,
}

impl CommandContext {
    pub fn resolve(workspace: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let destination = match workspace {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| OverlayError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };
        let config = OverlayConfig::load(&destination, config_path)?;
        Ok(Self {
            destination,
            config,
        })
    }

    /// Open the ledger configured for this destination
    pub fn open_ledger(&self) -> Result<EntryLedger> {
        EntryLedger::open(
            self.config.ledger_path(&self.destination),
            self.config.ignore_directories.clone(),
            self.config.append,
        )
    }
}

/// Fail unless `source` is an existing directory
fn ensure_source_dir(source: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(crate::error::source::not_found(source.display().to_string()));
    }
    Ok(())
}
