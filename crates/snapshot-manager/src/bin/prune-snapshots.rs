//! # prune-snapshots
//! Interactively delete old snapshots.
//!

use clap::Parser;
use shared::Failure;
use snapshot_manager::{
    SnapshotManager,
    cli::CommonArgs,
    session::{Terminal, prune_session},
};
use tracing::info;

/// Delete snapshots from the backup store.
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
    let outcome = prune_session(&manager, &mut Terminal::stdio())
        .or_log_and_panic("Could not prune snapshots");

    info!("Prune finished: {outcome:?}");
}
