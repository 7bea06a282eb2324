//! Entries command: print the ledger

use std::path::{Path, PathBuf};

use super::CommandContext;
use crate::error::Result;

/// Run entries command
pub fn run(workspace: Option<PathBuf>, config: Option<&Path>) -> Result<()> {
    let context = CommandContext::resolve(workspace, config)?;

    // Always read what is on disk, even when the config does not append
    let ledger = crate::ledger::EntryLedger::open(
        context.config.ledger_path(&context.destination),
        context.config.ignore_directories.clone(),
        true,
    )?;

    for entry in ledger.entries() {
        println!("{entry}");
    }

    Ok(())
}
