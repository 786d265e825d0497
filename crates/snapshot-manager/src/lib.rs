//! # snapshot-manager
//! Point in time copies of a project's source files, kept in a local backup store.
//!

pub mod cli;
mod config;
mod context;
pub mod display;
mod info;
mod manager;
pub mod session;
pub mod tree;

pub use config::{Config, DEFAULT_PATHS, LoadConfigError, is_logical_path};
pub use context::Context;
pub use info::{DEFAULT_DESCRIPTION, INFO_FILE, ReadInfoError, SaveInfoError, SnapshotInfo};
pub use manager::{
    CreateSnapshotError, ListError, Listing, PruneError, PrunePolicy, RestoreError,
    SNAPSHOT_PREFIX, Snapshot, SnapshotManager, SnapshotSummary, snapshot_name,
};
