use std::{io, path::PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    Context, SnapshotInfo,
    config::is_logical_path,
    info::ReadInfoError,
    tree::{copy_tree, remove_tree},
};

use super::SnapshotManager;

impl SnapshotManager {
    /// Replace the project's copy of every path in the snapshot with the snapshot's copy.
    ///
    /// Restores the paths recorded in the snapshot's metadata, or every configured path if the
    /// metadata is missing or unreadable. Paths absent from the snapshot are left alone. Returns
    /// the restored paths in order.
    pub fn restore(&self, name: &str) -> Result<Vec<PathBuf>, RestoreError> {
        let mut context = Context::new("Restore");
        context.snapshot = Some(name.to_string());

        let snapshot_path = self
            .snapshot_path(name)
            .filter(|path| path.is_dir())
            .ok_or_else(|| RestoreError::NotFound(name.to_string()))?;

        let files = match SnapshotInfo::load(&snapshot_path) {
            Ok(SnapshotInfo {
                files: Some(files), ..
            }) => files,
            Ok(_) => {
                warn!("{context}Metadata has no file list, using default file list");
                self.config.paths.clone()
            }
            Err(ReadInfoError::NoFile) => {
                warn!("{context}No metadata found, using default file list");
                self.config.paths.clone()
            }
            Err(error) => {
                warn!("{context}Could not read metadata, using default file list: {error}");
                self.config.paths.clone()
            }
        };

        context.current_context = "Restore Paths";
        let mut restored = Vec::new();

        for file in files {
            if !is_logical_path(&file) {
                warn!("{context}Skipped (outside project root): {file:?}");
                continue;
            }

            let source = snapshot_path.join(&file);
            let exists = source
                .try_exists()
                .map_err(|e| RestoreError::Io(e, "check a snapshot path exists"))?;
            if !exists {
                continue;
            }

            let destination = self.config.project_root.join(&file);

            remove_tree(&destination)
                .inspect_err(|e| error!("{context}Could not remove {destination:?}: {e}"))
                .map_err(|e| RestoreError::Io(e, "remove the current path"))?;

            let skipped_links = copy_tree(&source, &destination)
                .inspect_err(|e| error!("{context}Could not restore {file:?}: {e}"))
                .map_err(|e| RestoreError::Io(e, "copy a path out of the snapshot"))?;
            for link in skipped_links {
                warn!("{context}Skipped (symbolic link): {link:?}");
            }

            info!("{context}Restored: {file:?}");
            restored.push(file);
        }

        Ok(restored)
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("No snapshot called '{0}' exists")]
    NotFound(String),

    #[error("Failed to {1}: {0}")]
    Io(#[source] io::Error, &'static str),
}
