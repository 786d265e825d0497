use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The paths captured when no config overrides them.
pub const DEFAULT_PATHS: [&str; 7] = [
    "src",
    "index.html",
    "package.json",
    "tailwind.config.js",
    "vite.config.js",
    "postcss.config.js",
    "eslint.config.js",
];

/// The snapshot manager's config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The project root every other path is relative to.
    pub project_root: PathBuf,

    /// The directory holding the snapshots, relative to the project root.
    pub backups_directory: PathBuf,

    /// The logical paths to capture, relative to the project root.
    pub paths: Vec<PathBuf>,

    /// The directory to write logs to, relative to the project root.
    pub log_directory: PathBuf,
}

impl Config {
    /// Tries to load a config from a toml file.
    pub fn load_toml(file_path: &Path) -> Result<Self, LoadConfigError> {
        if !file_path.exists() {
            return Err(LoadConfigError::NoFile);
        }

        let contents = fs::read_to_string(file_path).map_err(LoadConfigError::Read)?;
        let config: Self = toml::from_str(&contents)?;

        if let Some(path) = config.paths.iter().find(|path| !is_logical_path(path)) {
            return Err(LoadConfigError::InvalidPath(path.clone()));
        }

        Ok(config)
    }

    /// The absolute location of the backup store.
    pub fn store_path(&self) -> PathBuf {
        self.project_root.join(&self.backups_directory)
    }

    /// The absolute location of the log directory.
    pub fn log_path(&self) -> PathBuf {
        self.project_root.join(&self.log_directory)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            backups_directory: PathBuf::from("backups"),
            paths: DEFAULT_PATHS.iter().map(PathBuf::from).collect(),
            log_directory: PathBuf::from("logs"),
        }
    }
}

/// If `path` names something strictly inside whatever directory it is joined onto.
pub fn is_logical_path(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::Normal(_)))
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// `path` without any `.` components, so equal locations compare equal.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("The file does not exist.")]
    NoFile,

    #[error("Failed to read the file:\n{0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to deserialize the file:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Path {0:?} must be relative to the project root")]
    InvalidPath(PathBuf),
}
