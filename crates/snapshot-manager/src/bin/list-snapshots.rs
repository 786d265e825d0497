//! # list-snapshots
//! Print every snapshot in the backup store with its size.
//!

use std::process::ExitCode;

use clap::Parser;
use shared::Failure;
use snapshot_manager::{SnapshotManager, cli::CommonArgs, display::listing_lines};

/// List the snapshots in the backup store.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let Some((config, _logger)) = args.common.start() else {
        return ExitCode::SUCCESS;
    };

    let manager = SnapshotManager::new(config);

    if !manager.store_path().is_dir() {
        println!("No backups directory found. Create a backup first with: create-snapshot");
        return ExitCode::FAILURE;
    }

    let listing = manager.list().or_log_and_panic("Could not list snapshots");
    if listing.is_empty() {
        println!("No backups found. Create a backup first with: create-snapshot");
        return ExitCode::FAILURE;
    }

    for line in listing_lines(&listing) {
        println!("{line}");
    }
    println!();
    println!("Use restore-snapshot to restore a backup");
    println!("Use create-snapshot to create a new backup");

    ExitCode::SUCCESS
}
