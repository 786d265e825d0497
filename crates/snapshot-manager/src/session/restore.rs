use std::path::PathBuf;

use crate::{SnapshotManager, display::summary_lines};

use super::{Prompt, SessionError, confirm, is_quit};

/// How an interactive restore ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The store is missing or empty.
    NothingFound,

    /// The operator quit or declined the confirmation.
    Cancelled,

    /// The operator picked a number that matches no snapshot.
    InvalidSelection,

    /// The snapshot was restored.
    Restored {
        /// The restored snapshot.
        snapshot: String,
        /// The restored paths.
        paths: Vec<PathBuf>,
    },
}

/// Ask the operator which snapshot to restore, confirm, then restore it.
pub fn restore_session<P: Prompt>(
    manager: &SnapshotManager,
    prompt: &mut P,
) -> Result<RestoreOutcome, SessionError> {
    let listing = manager.list()?;
    if listing.is_empty() {
        prompt.say("No backups found. Create a backup first with: create-snapshot")?;
        return Ok(RestoreOutcome::NothingFound);
    }

    prompt.say("Available backups:")?;
    prompt.say("")?;
    for (number, summary) in listing.numbered() {
        for line in summary_lines(number, summary) {
            prompt.say(&line)?;
        }
    }

    let choice = prompt.ask("Enter the number of the backup to restore (or \"q\" to quit): ")?;
    if is_quit(&choice) {
        prompt.say("Restore cancelled.")?;
        return Ok(RestoreOutcome::Cancelled);
    }

    let Some(selected) = choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| listing.get(number))
    else {
        prompt.say("Invalid selection.")?;
        return Ok(RestoreOutcome::InvalidSelection);
    };

    prompt.say("")?;
    prompt.say(&format!(
        "This will replace your current project files with the backup: {}",
        selected.name
    ))?;

    if !confirm(prompt)? {
        prompt.say("Restore cancelled.")?;
        return Ok(RestoreOutcome::Cancelled);
    }

    let paths = manager.restore(&selected.name)?;

    prompt.say("")?;
    for path in &paths {
        prompt.say(&format!("Restored: {}", path.display()))?;
    }
    prompt.say("Backup restored successfully!")?;

    Ok(RestoreOutcome::Restored {
        snapshot: selected.name.clone(),
        paths,
    })
}
