//! # common
//!

#![allow(dead_code, missing_docs)]

use std::{fs, path::PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use shared::test::TestDirectory;
use snapshot_manager::{Config, SnapshotManager};

/// A throwaway project with a manager pointed at it.
pub struct TestProject {
    pub directory: TestDirectory,
    pub manager: SnapshotManager,
}

impl TestProject {
    pub fn new(name: &str) -> Self {
        let directory = TestDirectory::new(name);
        let config = Config {
            project_root: directory.path().to_path_buf(),
            ..Config::default()
        };

        Self {
            directory,
            manager: SnapshotManager::new(config),
        }
    }

    /// Write the usual project files, without `tailwind.config.js`.
    pub fn write_sources(&self) {
        self.directory.write("src/a.txt", "a");
        self.directory.write("src/nested/b.txt", "b");
        self.directory.write("index.html", "<html></html>");
        self.directory.write("package.json", "{}");
    }

    /// Create an empty snapshot directory with a single file in it.
    pub fn fake_snapshot(&self, name: &str) -> PathBuf {
        let path = self.manager.store_path().join(name);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("index.html"), name).unwrap();
        path
    }

    pub fn snapshot_names(&self) -> Vec<String> {
        self.manager.snapshot_names().unwrap()
    }
}

/// Midnight UTC on the given day of January 2024.
pub fn january(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}
