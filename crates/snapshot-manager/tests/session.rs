//! Tests for the interactive prune and restore flows
//!

use std::{fs, io::Cursor, path::PathBuf};

use common::{TestProject, january};
use snapshot_manager::session::{
    PruneOutcome, RestoreOutcome, Terminal, prune_session, restore_session,
};

mod common;

fn terminal(input: &str) -> Terminal<Cursor<String>, Vec<u8>> {
    Terminal::new(Cursor::new(input.to_string()), Vec::new())
}

fn output(terminal: &Terminal<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(terminal.output().clone()).unwrap()
}

fn seven_snapshots(name: &str) -> TestProject {
    let project = TestProject::new(name);
    for day in 1..=7 {
        project.fake_snapshot(&format!("backup-2024-01-{day:02}T00-00-00"));
    }
    project
}

#[test]
fn prune_keep_five_confirmed() {
    let project = seven_snapshots("prune_keep_five_confirmed");
    let mut prompt = terminal("1\ny\n");

    let outcome = prune_session(&project.manager, &mut prompt).unwrap();

    assert_eq!(
        outcome,
        PruneOutcome::Deleted(vec![
            "backup-2024-01-01T00-00-00".to_string(),
            "backup-2024-01-02T00-00-00".to_string()
        ])
    );
    assert_eq!(project.snapshot_names().len(), 5);
    assert!(output(&prompt).contains("5 backup(s) remaining."));
}

#[test]
fn prune_declined_deletes_nothing() {
    let project = seven_snapshots("prune_declined_deletes_nothing");
    let mut prompt = terminal("3\nn\n");

    let outcome = prune_session(&project.manager, &mut prompt).unwrap();

    assert_eq!(outcome, PruneOutcome::Cancelled);
    assert_eq!(project.snapshot_names().len(), 7);
}

#[test]
fn prune_quit_and_invalid_choice() {
    let project = seven_snapshots("prune_quit_and_invalid_choice");

    let outcome = prune_session(&project.manager, &mut terminal("Q\n")).unwrap();
    assert_eq!(outcome, PruneOutcome::Cancelled);

    let outcome = prune_session(&project.manager, &mut terminal("7\n")).unwrap();
    assert_eq!(outcome, PruneOutcome::InvalidChoice);

    assert_eq!(project.snapshot_names().len(), 7);
}

#[test]
fn prune_keep_ten_has_nothing_to_delete() {
    let project = seven_snapshots("prune_keep_ten_has_nothing_to_delete");

    let outcome = prune_session(&project.manager, &mut terminal("2\n")).unwrap();

    assert_eq!(outcome, PruneOutcome::NothingToDelete);
}

#[test]
fn prune_custom_keeps_chosen_numbers() {
    let project = seven_snapshots("prune_custom_keeps_chosen_numbers");
    let mut prompt = terminal("4\n1,2,7\nyes\n");

    let outcome = prune_session(&project.manager, &mut prompt).unwrap();

    assert!(matches!(outcome, PruneOutcome::Deleted(ref deleted) if deleted.len() == 4));
    assert_eq!(
        project.snapshot_names(),
        vec![
            "backup-2024-01-01T00-00-00".to_string(),
            "backup-2024-01-06T00-00-00".to_string(),
            "backup-2024-01-07T00-00-00".to_string()
        ]
    );
    assert!(output(&prompt).contains("1. backup-2024-01-07T00-00-00"));
}

#[test]
fn sessions_on_empty_store() {
    let project = TestProject::new("sessions_on_empty_store");

    let outcome = prune_session(&project.manager, &mut terminal("")).unwrap();
    assert_eq!(outcome, PruneOutcome::NothingFound);

    let outcome = restore_session(&project.manager, &mut terminal("")).unwrap();
    assert_eq!(outcome, RestoreOutcome::NothingFound);
}

#[test]
fn sessions_on_existing_empty_store() {
    let project = TestProject::new("sessions_on_existing_empty_store");
    fs::create_dir_all(project.manager.store_path()).unwrap();

    let outcome = prune_session(&project.manager, &mut terminal("")).unwrap();
    assert_eq!(outcome, PruneOutcome::NothingFound);

    let outcome = restore_session(&project.manager, &mut terminal("")).unwrap();
    assert_eq!(outcome, RestoreOutcome::NothingFound);
}

#[test]
fn restore_newest_confirmed() {
    let project = TestProject::new("restore_newest_confirmed");
    project.write_sources();
    project.manager.create_at(Some("old"), january(1)).unwrap();
    project.directory.write("index.html", "second");
    project.manager.create_at(Some("new"), january(2)).unwrap();
    project.directory.write("index.html", "current");

    let mut prompt = terminal("1\ny\n");
    let outcome = restore_session(&project.manager, &mut prompt).unwrap();

    assert_eq!(
        outcome,
        RestoreOutcome::Restored {
            snapshot: "backup-2024-01-02T00-00-00".to_string(),
            paths: vec![
                PathBuf::from("src"),
                PathBuf::from("index.html"),
                PathBuf::from("package.json")
            ],
        }
    );
    assert_eq!(project.directory.read("index.html"), "second");
    assert!(output(&prompt).contains("Description: new"));
}

#[test]
fn restore_invalid_selection_and_decline() {
    let project = TestProject::new("restore_invalid_selection_and_decline");
    project.write_sources();
    project.manager.create_at(None, january(1)).unwrap();
    project.directory.write("index.html", "current");

    for input in ["0\n", "2\n", "first\n"] {
        let outcome = restore_session(&project.manager, &mut terminal(input)).unwrap();
        assert_eq!(outcome, RestoreOutcome::InvalidSelection, "{input:?}");
    }

    let outcome = restore_session(&project.manager, &mut terminal("1\nno\n")).unwrap();
    assert_eq!(outcome, RestoreOutcome::Cancelled);

    let outcome = restore_session(&project.manager, &mut terminal("q\n")).unwrap();
    assert_eq!(outcome, RestoreOutcome::Cancelled);

    assert_eq!(project.directory.read("index.html"), "current");
}
