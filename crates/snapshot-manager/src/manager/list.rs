use std::path::PathBuf;

use tracing::debug;

use crate::{Context, SnapshotInfo, tree::tree_size};

use super::{ListError, SnapshotManager};

/// A snapshot found in the backup store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// The snapshot's directory name.
    pub name: String,

    /// The snapshot's directory.
    pub path: PathBuf,

    /// The snapshot's metadata, defaulted if missing or unreadable.
    pub info: SnapshotInfo,

    /// The size of everything in the snapshot directory.
    pub bytes: u64,
}

/// The snapshots in the backup store, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// The snapshots, newest first.
    pub snapshots: Vec<SnapshotSummary>,
}

impl Listing {
    /// The combined size of every snapshot.
    pub fn total_bytes(&self) -> u64 {
        self.snapshots.iter().map(|snapshot| snapshot.bytes).sum()
    }

    /// If the store holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// The snapshot shown as `number`, counting from 1.
    pub fn get(&self, number: usize) -> Option<&SnapshotSummary> {
        self.snapshots.get(number.checked_sub(1)?)
    }

    /// The snapshots paired with their display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &SnapshotSummary)> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| (index + 1, snapshot))
    }
}

impl SnapshotManager {
    /// Scan the store for snapshots, newest first.
    pub fn list(&self) -> Result<Listing, ListError> {
        let mut context = Context::new("List");
        let mut snapshots = Vec::new();

        for name in self.snapshot_names()?.into_iter().rev() {
            context.snapshot = Some(name.clone());
            let path = self.store_path().join(&name);

            let info = match SnapshotInfo::load(&path) {
                Ok(info) => info,
                Err(error) => {
                    debug!("{context}Using default metadata: {error}");
                    SnapshotInfo::default()
                }
            };

            let bytes = tree_size(&path).map_err(|e| ListError::Io(e, "size a snapshot"))?;

            snapshots.push(SnapshotSummary {
                name,
                path,
                info,
                bytes,
            });
        }

        Ok(Listing { snapshots })
    }
}
