//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// overlay - vendor tree installer
///
/// Copy a vendor file tree onto a project, track what was copied in an
/// ignore-list file, and remove it again.
#[derive(Parser, Debug)]
#[command(
    name = "overlay",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Overlay a vendor file tree onto a project directory",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  overlay install ./vendor/core\n    \
                  overlay -w ./project uninstall ./vendor/core\n    \
                  overlay entries"
)]
pub struct Cli {
    /// Destination directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to overlay.yaml in the destination)
    #[arg(long, short = 'c', global = true, env = "OVERLAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a source tree onto the destination and record it
    Install(TreeArgs),

    /// Remove a previously installed source tree from the destination
    Uninstall(TreeArgs),

    /// Print the recorded ledger entries
    Entries,
}

/// Arguments for install and uninstall
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory holding the vendor tree
    pub source: PathBuf,
}
