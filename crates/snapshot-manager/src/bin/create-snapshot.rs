//! # create-snapshot
//! Copy the project's configured paths into a new timestamped snapshot.
//!

use clap::Parser;
use shared::Failure;
use snapshot_manager::{SnapshotManager, cli::CommonArgs, display::created_lines};

/// Create a snapshot of the project.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// What the snapshot is for.
    description: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let Some((config, _logger)) = args.common.start() else {
        return;
    };

    let manager = SnapshotManager::new(config);
    let snapshot = manager
        .create(args.description.as_deref())
        .or_log_and_panic("Could not create snapshot");

    for line in created_lines(&manager.config.project_root, &snapshot) {
        println!("{line}");
    }
}
