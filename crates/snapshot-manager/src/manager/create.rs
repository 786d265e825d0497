use std::{fs, io, path::PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    Context, SnapshotInfo,
    config::{is_logical_path, normalize_path},
    info::SaveInfoError,
    tree::copy_tree,
};

use super::{Snapshot, SnapshotManager, snapshot_name};

impl SnapshotManager {
    /// Create a snapshot of every configured path that currently exists.
    pub fn create(&self, description: Option<&str>) -> Result<Snapshot, CreateSnapshotError> {
        self.create_at(description, Utc::now())
    }

    /// Create a snapshot named after `now`.
    ///
    /// The metadata record is written after every path has been copied, an interrupted create
    /// leaves a snapshot without one.
    pub fn create_at(
        &self,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Snapshot, CreateSnapshotError> {
        let mut context = Context::new("Create Snapshot");

        if let Some(path) = self.config.paths.iter().find(|path| !is_logical_path(path)) {
            return Err(CreateSnapshotError::InvalidPath(path.clone()));
        }

        let name = snapshot_name(now);
        context.snapshot = Some(name.clone());

        // Prepare snapshot directory
        let store = self.store_path();
        fs::create_dir_all(&store)
            .inspect_err(|e| error!("{context}Could not create backup store {store:?}: {e}"))
            .map_err(|e| CreateSnapshotError::Io(e, "create the backup store"))?;

        let snapshot_path = store.join(&name);
        fs::create_dir(&snapshot_path).map_err(|error| {
            if error.kind() == io::ErrorKind::AlreadyExists {
                CreateSnapshotError::AlreadyExists(name.clone())
            } else {
                error!("{context}Could not create directory {snapshot_path:?}: {error}");
                CreateSnapshotError::Io(error, "create the snapshot directory")
            }
        })?;

        // Copy paths
        context.current_context = "Copy Paths";
        let mut files = Vec::new();
        let mut skipped = Vec::new();

        let store = normalize_path(&store);

        for path in &self.config.paths {
            let source = self.config.project_root.join(path);

            if store.starts_with(normalize_path(&source)) {
                warn!("{context}Skipped (holds the backup store): {path:?}");
                skipped.push(path.clone());
                continue;
            }

            match fs::symlink_metadata(&source) {
                Ok(metadata) if metadata.file_type().is_symlink() => {
                    warn!("{context}Skipped (symbolic link): {path:?}");
                    skipped.push(path.clone());
                    continue;
                }
                Ok(_) => {}
                Err(error) if error.kind() == io::ErrorKind::NotFound => {
                    warn!("{context}Skipped (not found): {path:?}");
                    skipped.push(path.clone());
                    continue;
                }
                Err(error) => return Err(CreateSnapshotError::Io(error, "check a path exists")),
            }

            let skipped_links = copy_tree(&source, &snapshot_path.join(path))
                .inspect_err(|e| error!("{context}Could not copy {path:?}: {e}"))
                .map_err(|e| CreateSnapshotError::Io(e, "copy a path into the snapshot"))?;
            for link in skipped_links {
                warn!("{context}Skipped (symbolic link): {link:?}");
            }

            info!("{context}Backed up: {path:?}");
            files.push(path.clone());
        }

        // Write metadata
        context.current_context = "Write Metadata";
        let info = SnapshotInfo::new(now, description, files);
        info.save(&snapshot_path)
            .inspect_err(|e| error!("{context}Could not write metadata: {e}"))?;

        info!("{context}Created snapshot: {}", info.description);

        Ok(Snapshot {
            name,
            path: snapshot_path,
            info,
            skipped,
        })
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CreateSnapshotError {
    #[error("Configured path {0:?} must be relative to the project root")]
    InvalidPath(PathBuf),

    #[error("A snapshot called '{0}' already exists")]
    AlreadyExists(String),

    #[error("Failed to {1}: {0}")]
    Io(#[source] io::Error, &'static str),

    #[error("Failed to save the metadata record: {0}")]
    SaveInfo(#[from] SaveInfoError),
}
