// tests/status_table.rs

use proptest::prelude::*;

use runall::errors::RunallError;
use runall::status::{CommandId, CommandStatus, StatusTable};

fn failed(code: i32, stderr: &str) -> CommandStatus {
    CommandStatus::Failed {
        exit_code: code,
        stderr: stderr.to_string(),
    }
}

#[test]
fn new_table_starts_all_pending_in_order() {
    let table = StatusTable::new(["build", "lint", "test"]);

    let snapshot = table.snapshot();
    let commands: Vec<_> = snapshot.iter().map(|l| l.command.as_str()).collect();
    assert_eq!(commands, vec!["build", "lint", "test"]);
    assert!(snapshot.iter().all(|l| l.status == CommandStatus::Pending));
    assert!(!table.all_terminal());
    assert!(!table.has_failures());
}

#[test]
fn set_moves_entry_to_terminal_status() {
    let table = StatusTable::new(["true", "false"]);

    table.set(CommandId(0), CommandStatus::Succeeded).unwrap();
    assert!(!table.all_terminal());

    table.set(CommandId(1), failed(1, "")).unwrap();
    assert!(table.all_terminal());
    assert!(table.has_failures());
    assert_eq!(table.status(CommandId(0)), Some(CommandStatus::Succeeded));
    assert_eq!(table.status(CommandId(1)), Some(failed(1, "")));
}

#[test]
fn second_set_is_rejected_and_first_status_kept() {
    let table = StatusTable::new(["make"]);
    table.set(CommandId(0), failed(2, "boom")).unwrap();

    match table.set(CommandId(0), CommandStatus::Succeeded) {
        Err(RunallError::InvalidTransition { id, command, .. }) => {
            assert_eq!(id, CommandId(0));
            assert_eq!(command, "make");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }

    assert_eq!(table.status(CommandId(0)), Some(failed(2, "boom")));
}

#[test]
fn setting_pending_is_rejected() {
    let table = StatusTable::new(["make"]);

    let err = table.set(CommandId(0), CommandStatus::Pending).unwrap_err();
    assert!(matches!(err, RunallError::InvalidTransition { .. }));
    assert_eq!(table.status(CommandId(0)), Some(CommandStatus::Pending));
}

#[test]
fn unknown_id_is_rejected() {
    let table = StatusTable::new(["make"]);

    let err = table.set(CommandId(3), CommandStatus::Succeeded).unwrap_err();
    assert!(matches!(err, RunallError::UnknownCommand(CommandId(3))));
}

#[test]
fn duplicate_commands_are_distinct_entries() {
    let table = StatusTable::new(["echo hi", "echo hi"]);
    assert_eq!(table.len(), 2);

    table.set(CommandId(0), CommandStatus::Succeeded).unwrap();

    assert_eq!(table.status(CommandId(0)), Some(CommandStatus::Succeeded));
    assert_eq!(table.status(CommandId(1)), Some(CommandStatus::Pending));
}

#[test]
fn empty_table_is_vacuously_terminal() {
    let table = StatusTable::new(Vec::<String>::new());

    assert!(table.is_empty());
    assert!(table.all_terminal());
    assert!(table.snapshot().is_empty());
    assert!(table.failures().is_empty());
}

#[test]
fn failures_lists_failed_entries_in_table_order() {
    let table = StatusTable::new(["a", "b", "c", "d"]);
    table.set(CommandId(3), failed(4, "d broke")).unwrap();
    table.set(CommandId(0), failed(1, "a broke")).unwrap();
    table.set(CommandId(1), CommandStatus::Succeeded).unwrap();

    let failed: Vec<_> = table.failures().into_iter().map(|l| l.command).collect();
    assert_eq!(failed, vec!["a".to_string(), "d".to_string()]);
}

#[test]
fn concurrent_writers_each_land_in_their_own_entry() {
    let table = std::sync::Arc::new(StatusTable::new((0..64).map(|i| format!("cmd {i}"))));

    let handles: Vec<_> = (0..64i32)
        .map(|i| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || {
                let status = if i % 3 == 0 {
                    failed(i, "")
                } else {
                    CommandStatus::Succeeded
                };
                table.set(CommandId(i as usize), status).unwrap();
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert!(table.all_terminal());
    for line in table.snapshot() {
        let i = line.id.0 as i32;
        if i % 3 == 0 {
            assert_eq!(line.status, failed(i, ""));
        } else {
            assert_eq!(line.status, CommandStatus::Succeeded);
        }
    }
}

fn outcome_strategy() -> impl Strategy<Value = Option<CommandStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(CommandStatus::Succeeded)),
        (1..255i32, "[a-z ]{0,12}").prop_map(|(code, stderr)| Some(CommandStatus::Failed {
            exit_code: code,
            stderr,
        })),
    ]
}

proptest! {
    #[test]
    fn terminal_states_never_change(
        outcomes in proptest::collection::vec(outcome_strategy(), 0..16),
    ) {
        let table = StatusTable::new((0..outcomes.len()).map(|i| format!("cmd {i}")));

        for (i, outcome) in outcomes.iter().enumerate() {
            if let Some(status) = outcome {
                table.set(CommandId(i), status.clone()).unwrap();
            }
        }

        let first = table.snapshot();

        // A second write to any terminal entry fails and changes nothing.
        for (i, outcome) in outcomes.iter().enumerate() {
            if outcome.is_some() {
                prop_assert!(table.set(CommandId(i), CommandStatus::Succeeded).is_err());
            }
        }

        prop_assert_eq!(&first, &table.snapshot());
        prop_assert_eq!(first.len(), outcomes.len());

        for (line, outcome) in first.iter().zip(&outcomes) {
            let expected = outcome.clone().unwrap_or(CommandStatus::Pending);
            prop_assert_eq!(&line.status, &expected);
        }

        prop_assert_eq!(table.all_terminal(), outcomes.iter().all(Option::is_some));
    }
}
