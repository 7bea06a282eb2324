//! Install command CLI wrapper

use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use super::{CommandContext, ensure_source_dir};
use crate::cli::TreeArgs;
use crate::error::Result;
use crate::filesystem::LocalFilesystem;
use crate::installer::TreeInstaller;

/// Run install command
pub fn run(workspace: Option<PathBuf>, config: Option<&Path>, args: TreeArgs) -> Result<()> {
    let context = CommandContext::resolve(workspace, config)?;
    ensure_source_dir(&args.source)?;

    let ledger = context.open_ledger()?;
    let mut installer = TreeInstaller::new(LocalFilesystem, ledger, context.config.excludes.clone());

    let summary = installer.install(&args.source, &context.destination)?;
    let ledger = installer.into_ledger();
    debug!(path = %ledger.path().display(), entries = ledger.len(), "closing ledger");
    ledger.close()?;

    let bold = Style::new().bold().green();
    println!(
        "{} {} file(s) into {}",
        bold.apply_to("Installed"),
        summary.files_copied,
        context.destination.display()
    );

    Ok(())
}
