use std::collections::BTreeSet;

use crate::{PrunePolicy, SnapshotManager, display::short_line};

use super::{Prompt, SessionError, confirm, is_quit};

/// How an interactive prune ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The store is missing or empty.
    NothingFound,

    /// The operator quit or declined the confirmation.
    Cancelled,

    /// The operator picked an option that does not exist.
    InvalidChoice,

    /// The chosen policy keeps every snapshot.
    NothingToDelete,

    /// The snapshots were deleted, oldest first.
    Deleted(Vec<String>),
}

/// Ask the operator how to prune the store, confirm, then delete.
pub fn prune_session<P: Prompt>(
    manager: &SnapshotManager,
    prompt: &mut P,
) -> Result<PruneOutcome, SessionError> {
    let names = manager.snapshot_names()?;
    if names.is_empty() {
        prompt.say("No backups found.")?;
        return Ok(PruneOutcome::NothingFound);
    }

    prompt.say(&format!("Found {} backups", names.len()))?;
    prompt.say("")?;
    prompt.say("Cleanup options:")?;
    prompt.say("1. Keep last 5 backups (delete older ones)")?;
    prompt.say("2. Keep last 10 backups (delete older ones)")?;
    prompt.say("3. Delete all backups")?;
    prompt.say("4. Custom cleanup (choose which to keep)")?;

    let choice = prompt.ask("Enter your choice (1-4, or \"q\" to quit): ")?;
    if is_quit(&choice) {
        prompt.say("Cleanup cancelled.")?;
        return Ok(PruneOutcome::Cancelled);
    }

    let policy = match choice.trim() {
        "1" => PrunePolicy::KeepLast(5),
        "2" => PrunePolicy::KeepLast(10),
        "3" => PrunePolicy::DeleteAll,
        "4" => {
            let listing = manager.list()?;

            prompt.say("")?;
            prompt.say("Available backups:")?;
            for (number, summary) in listing.numbered() {
                prompt.say(&short_line(number, summary))?;
            }

            let answer =
                prompt.ask("Enter numbers of backups to KEEP (comma-separated, e.g. 1,3,5): ")?;
            PrunePolicy::KeepIndices(parse_numbers(&answer))
        }
        _ => {
            prompt.say("Invalid choice.")?;
            return Ok(PruneOutcome::InvalidChoice);
        }
    };

    let doomed = manager.plan_prune(&policy)?;
    if doomed.is_empty() {
        prompt.say("No backups to delete.")?;
        return Ok(PruneOutcome::NothingToDelete);
    }

    prompt.say("")?;
    prompt.say(&format!("This will delete {} backup(s):", doomed.len()))?;
    for name in &doomed {
        prompt.say(&format!("  - {name}"))?;
    }

    if !confirm(prompt)? {
        prompt.say("Cleanup cancelled.")?;
        return Ok(PruneOutcome::Cancelled);
    }

    let deleted = manager.delete(doomed)?;

    prompt.say("")?;
    prompt.say(&format!(
        "Cleanup complete! Deleted {} backup(s).",
        deleted.len()
    ))?;
    prompt.say(&format!(
        "{} backup(s) remaining.",
        names.len().saturating_sub(deleted.len())
    ))?;

    Ok(PruneOutcome::Deleted(deleted))
}

/// Parse a comma separated list of numbers, ignoring anything that is not a number.
fn parse_numbers(answer: &str) -> BTreeSet<usize> {
    answer
        .split(',')
        .filter_map(|number| number.trim().parse().ok())
        .collect()
}
