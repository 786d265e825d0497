//! # restore-snapshot
//! Interactively restore the project from a snapshot.
//!

use clap::Parser;
use shared::Failure;
use snapshot_manager::{
    SnapshotManager,
    cli::CommonArgs,
    session::{Terminal, restore_session},
};
use tracing::info;

/// Restore the project from a snapshot.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let Some((config, _logger)) = args.common.start() else {
        return;
    };

    let manager = SnapshotManager::new(config);
    let outcome = restore_session(&manager, &mut Terminal::stdio())
        .or_log_and_panic("Could not restore snapshot");

    info!("Restore finished: {outcome:?}");
}
