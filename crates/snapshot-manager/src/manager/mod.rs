use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Config, SnapshotInfo};

mod create;
mod list;
mod prune;
mod restore;

pub use create::CreateSnapshotError;
pub use list::{Listing, SnapshotSummary};
pub use prune::{PruneError, PrunePolicy};
pub use restore::RestoreError;

/// The prefix of every snapshot directory name.
pub const SNAPSHOT_PREFIX: &str = "backup-";

/// A snapshot that was just created.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The snapshot's directory name.
    pub name: String,

    /// The snapshot's directory.
    pub path: PathBuf,

    /// The metadata record written for the snapshot.
    pub info: SnapshotInfo,

    /// Configured paths that did not exist and were not captured.
    pub skipped: Vec<PathBuf>,
}

/// Creates, lists, prunes and restores snapshots of a project.
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    /// The manager config.
    pub config: Config,
}

impl SnapshotManager {
    /// Create a new manager from config.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The directory holding the snapshots.
    pub fn store_path(&self) -> PathBuf {
        self.config.store_path()
    }

    /// The names of every snapshot in the store, oldest first.
    ///
    /// A missing store has no snapshots.
    pub fn snapshot_names(&self) -> Result<Vec<String>, ListError> {
        let store = self.store_path();

        let directory = match fs::read_dir(&store) {
            Ok(directory) => directory,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(ListError::Io(error, "read the backup store")),
        };

        let mut names = Vec::new();
        for entry in directory {
            let entry = entry.map_err(|e| ListError::Io(e, "read a backup store entry"))?;

            let is_directory = fs::metadata(entry.path())
                .map_err(|e| ListError::Io(e, "get backup store entry metadata"))?
                .is_dir();
            if !is_directory {
                continue;
            }

            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();

        Ok(names)
    }

    /// The directory of the snapshot called `name`, if `name` is a plain directory name.
    pub fn snapshot_path(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.store_path().join(name)),
            _ => None,
        }
    }
}

/// The name of a snapshot taken at `time`.
pub fn snapshot_name(time: DateTime<Utc>) -> String {
    format!("{SNAPSHOT_PREFIX}{}", time.format("%Y-%m-%dT%H-%M-%S"))
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to {1}: {0}")]
    Io(#[source] io::Error, &'static str),
}
