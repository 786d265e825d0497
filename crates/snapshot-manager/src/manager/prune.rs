use std::{collections::BTreeSet, io};

use thiserror::Error;
use tracing::{error, info};

use crate::{Context, tree::remove_tree};

use super::{ListError, SnapshotManager};

/// Which snapshots to keep when pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrunePolicy {
    /// Keep the newest `n` snapshots.
    KeepLast(usize),

    /// Delete every snapshot.
    DeleteAll,

    /// Keep the snapshots with these display numbers, as numbered by [`SnapshotManager::list`]
    /// (newest is 1). Numbers that match no snapshot are ignored.
    KeepIndices(BTreeSet<usize>),
}

impl SnapshotManager {
    /// The snapshots `policy` would delete, oldest first.
    pub fn plan_prune(&self, policy: &PrunePolicy) -> Result<Vec<String>, ListError> {
        let names = self.snapshot_names()?;
        let count = names.len();

        let doomed = match policy {
            PrunePolicy::KeepLast(keep) => names
                .into_iter()
                .take(count.saturating_sub(*keep))
                .collect(),
            PrunePolicy::DeleteAll => names,
            PrunePolicy::KeepIndices(keep) => names
                .into_iter()
                .enumerate()
                .filter(|(index, _)| !keep.contains(&(count - index)))
                .map(|(_, name)| name)
                .collect(),
        };

        Ok(doomed)
    }

    /// Delete every snapshot `policy` does not keep, oldest first.
    ///
    /// Stops at the first snapshot that fails to delete, the error holds the names that were
    /// already deleted.
    pub fn prune(&self, policy: &PrunePolicy) -> Result<Vec<String>, PruneError> {
        let doomed = self.plan_prune(policy)?;
        self.delete(doomed)
    }

    /// Delete the named snapshots in order.
    pub fn delete(&self, names: Vec<String>) -> Result<Vec<String>, PruneError> {
        let mut context = Context::new("Prune");
        let mut completed = Vec::with_capacity(names.len());

        for name in names {
            context.snapshot = Some(name.clone());

            let Some(path) = self.snapshot_path(&name) else {
                return Err(PruneError::InvalidName { completed, name });
            };

            if let Err(source) = remove_tree(&path) {
                error!("{context}Could not delete snapshot: {source}");
                return Err(PruneError::Delete {
                    completed,
                    snapshot: name,
                    source,
                });
            }

            info!("{context}Deleted");
            completed.push(name);
        }

        Ok(completed)
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Failed to list snapshots: {0}")]
    List(#[from] ListError),

    #[error("'{name}' is not a snapshot name, deleted {} snapshot(s) before stopping", .completed.len())]
    InvalidName { completed: Vec<String>, name: String },

    #[error("Failed to delete '{snapshot}' after deleting {} snapshot(s): {source}", .completed.len())]
    Delete {
        completed: Vec<String>,
        snapshot: String,
        #[source]
        source: io::Error,
    },
}

impl PruneError {
    /// The snapshots deleted before the failure.
    pub fn completed(&self) -> &[String] {
        match self {
            Self::List(_) => &[],
            Self::InvalidName { completed, .. } | Self::Delete { completed, .. } => completed,
        }
    }
}
