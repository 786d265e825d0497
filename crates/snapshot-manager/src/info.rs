//! The metadata record stored alongside each snapshot.
//!

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The file name of the metadata record inside a snapshot directory.
pub const INFO_FILE: &str = "backup-info.json";

/// The description used when none is given at creation.
pub const DEFAULT_DESCRIPTION: &str = "Manual backup";

const UNKNOWN_DESCRIPTION: &str = "No description";
const UNKNOWN_DATE: &str = "Unknown date";

/// Information about a snapshot.
///
/// Deserializing is lenient, any missing field falls back to the same defaults as a missing
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// When the snapshot was taken as an ISO-8601 instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// When the snapshot was taken, formatted for display in local time.
    #[serde(default = "unknown_date")]
    pub date: String,

    /// The snapshot's description.
    #[serde(default = "unknown_description")]
    pub description: String,

    /// The logical paths captured in the snapshot, `None` if unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PathBuf>>,
}

impl SnapshotInfo {
    /// Create the record for a snapshot taken at `now`.
    pub fn new(now: DateTime<Utc>, description: Option<&str>, files: Vec<PathBuf>) -> Self {
        let description = description
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);

        Self {
            timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            date: now
                .with_timezone(&Local)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            description: description.to_string(),
            files: Some(files),
        }
    }

    /// Tries to load the record from a snapshot directory.
    pub fn load(snapshot_directory: &Path) -> Result<Self, ReadInfoError> {
        let path = snapshot_directory.join(INFO_FILE);

        let contents = fs::read_to_string(path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                ReadInfoError::NoFile
            } else {
                ReadInfoError::Read(error)
            }
        })?;
        let info = serde_json::from_str(&contents)?;

        Ok(info)
    }

    /// Save the record into a snapshot directory.
    pub fn save(&self, snapshot_directory: &Path) -> Result<(), SaveInfoError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(snapshot_directory.join(INFO_FILE), contents).map_err(SaveInfoError::Write)?;
        Ok(())
    }
}

impl Default for SnapshotInfo {
    fn default() -> Self {
        Self {
            timestamp: None,
            date: unknown_date(),
            description: unknown_description(),
            files: None,
        }
    }
}

fn unknown_date() -> String {
    UNKNOWN_DATE.to_string()
}

fn unknown_description() -> String {
    UNKNOWN_DESCRIPTION.to_string()
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ReadInfoError {
    #[error("The snapshot has no metadata record")]
    NoFile,

    #[error("Failed to read the metadata record: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to deserialize the metadata record: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SaveInfoError {
    #[error("Failed to serialize the metadata record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write the metadata record: {0}")]
    Write(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn blank_description_uses_default() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let info = SnapshotInfo::new(now, Some("  "), Vec::new());

        assert_eq!(info.description, DEFAULT_DESCRIPTION);
        assert_eq!(info.timestamp.as_deref(), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let info: SnapshotInfo = serde_json::from_str(r#"{ "description": "nightly" }"#).unwrap();

        assert_eq!(info.description, "nightly");
        assert_eq!(info.date, UNKNOWN_DATE);
        assert!(info.files.is_none());
    }
}
