//! Uninstall command CLI wrapper

use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use super::{CommandContext, ensure_source_dir};
use crate::cli::TreeArgs;
use crate::error::Result;
use crate::filesystem::LocalFilesystem;
use crate::uninstaller::TreeUninstaller;

/// Run uninstall command
pub fn run(workspace: Option<PathBuf>, config: Option<&Path>, args: TreeArgs) -> Result<()> {
    let context = CommandContext::resolve(workspace, config)?;
    ensure_source_dir(&args.source)?;

    let ledger = context.open_ledger()?;
    let mut uninstaller =
        TreeUninstaller::new(LocalFilesystem, ledger, context.config.excludes.clone());

    let summary = uninstaller.uninstall(&args.source, &context.destination)?;
    let ledger = uninstaller.into_ledger();
    debug!(path = %ledger.path().display(), entries = ledger.len(), "closing ledger");
    ledger.close()?;

    let bold = Style::new().bold().green();
    let mut line = format!(
        "{} {} file(s) and {} directory(ies)",
        bold.apply_to("Uninstalled"),
        summary.files_removed,
        summary.directories_removed
    );
    if summary.directories_kept > 0 {
        let dim = Style::new().dim();
        line.push_str(&format!(
            " {}",
            dim.apply_to(format!(
                "({} non-empty directory(ies) kept)",
                summary.directories_kept
            ))
        ));
    }
    println!("{line}");

    Ok(())
}
