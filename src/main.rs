//! overlay - vendor tree installer
//!
//! Copies a vendor-provided file tree onto a project directory, records what
//! was copied in an ignore-list file, and removes the tree again without
//! touching files the overlay did not put there.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod filesystem;
mod installer;
mod ledger;
mod uninstaller;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "overlay=debug" } else { "overlay=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.workspace, config, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.workspace, config, args),
        Commands::Entries => commands::entries::run(cli.workspace, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
