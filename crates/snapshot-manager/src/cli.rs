//! Arguments and start up shared by the snapshot binaries.
//!

use std::{fs, io, path::PathBuf};

use clap::Args;
use shared::{Failure, LogGuards, init_logger};
use thiserror::Error;
use tracing::info;

use crate::{Config, LoadConfigError};

/// Arguments every snapshot binary accepts.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// The config file to load. Relative paths in it are relative to the file.
    #[arg(long, default_value = "snapshots.toml")]
    pub config: PathBuf,

    /// The project root, overriding the config.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Write the default config to the config file and exit.
    #[arg(long)]
    pub init: bool,
}

impl CommonArgs {
    /// Load the config file, or the default config if there is none.
    pub fn load_config(&self) -> Result<Config, LoadConfigError> {
        let mut config = match Config::load_toml(&self.config) {
            Ok(mut config) => {
                if config.project_root.is_relative() {
                    if let Some(directory) = self.config.parent() {
                        config.project_root = directory.join(&config.project_root);
                    }
                }
                config
            }
            Err(LoadConfigError::NoFile) => Config::default(),
            Err(error) => return Err(error),
        };

        if let Some(root) = &self.root {
            config.project_root.clone_from(root);
        }

        Ok(config)
    }

    /// Write the default config to the config file.
    pub fn write_default_config(&self) -> Result<(), InitConfigError> {
        let contents = toml::to_string_pretty(&Config::default())?;
        fs::write(&self.config, contents).map_err(InitConfigError::Write)?;
        Ok(())
    }

    /// Handle `--init`, load the config and start logging.
    ///
    /// Returns `None` if the binary has nothing left to do.
    pub fn start(&self) -> Option<(Config, LogGuards)> {
        if self.init {
            self.write_default_config()
                .or_log_and_panic("Could not write the default config");
            println!("Wrote the default config to {}", self.config.display());
            return None;
        }

        let config = self.load_config().or_log_and_panic("Could not load config");
        let logger = init_logger(&config.log_path()).or_log_and_panic("Could not start logging");

        info!("Project root: {}", config.project_root.display());

        Some((config, logger))
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum InitConfigError {
    #[error("Failed to serialize the config:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write the config file:\n{0}")]
    Write(#[source] io::Error),
}
