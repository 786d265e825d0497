//! Human readable output for the snapshot binaries.
//!

use std::path::Path;

use crate::{Listing, Snapshot, SnapshotInfo, SnapshotSummary};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count as `KB` or, above a mebibyte, `MB` with one decimal.
#[allow(clippy::as_conversions)]
pub fn format_size(bytes: u64) -> String {
    if bytes > MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    }
}

/// The number of captured paths, or `Unknown`.
pub fn file_count(info: &SnapshotInfo) -> String {
    match &info.files {
        Some(files) => files.len().to_string(),
        None => "Unknown".to_string(),
    }
}

/// The detailed lines for one listing entry.
pub fn summary_lines(number: usize, summary: &SnapshotSummary) -> Vec<String> {
    vec![
        format!("{number}. {}", summary.name),
        format!("   Description: {}", summary.info.description),
        format!("   Date: {}", summary.info.date),
        format!("   Size: {}", format_size(summary.bytes)),
        format!("   Files: {} items", file_count(&summary.info)),
        String::new(),
    ]
}

/// One line per snapshot, for menus.
pub fn short_line(number: usize, summary: &SnapshotSummary) -> String {
    format!(
        "{number}. {} - {} ({})",
        summary.name, summary.info.description, summary.info.date
    )
}

/// The full listing with its total.
pub fn listing_lines(listing: &Listing) -> Vec<String> {
    let mut lines = vec!["Available backups:".to_string(), String::new()];

    for (number, summary) in listing.numbered() {
        lines.extend(summary_lines(number, summary));
    }

    lines.push(format!(
        "Total: {} backups, {}",
        listing.len(),
        format_size(listing.total_bytes())
    ));

    lines
}

/// The report for a freshly created snapshot.
pub fn created_lines(project_root: &Path, snapshot: &Snapshot) -> Vec<String> {
    let location = snapshot
        .path
        .strip_prefix(project_root)
        .unwrap_or(&snapshot.path);

    let mut lines = Vec::new();

    for file in snapshot.info.files.iter().flatten() {
        lines.push(format!("Backed up: {}", file.display()));
    }
    for file in &snapshot.skipped {
        lines.push(format!("Skipped: {}", file.display()));
    }

    lines.push(String::new());
    lines.push("Backup created successfully!".to_string());
    lines.push(format!("Location: {}", location.display()));
    lines.push(format!("Description: {}", snapshot.info.description));
    lines.push(format!("Time: {}", snapshot.info.date));

    lines
}
