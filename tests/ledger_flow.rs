//! End-to-end exercises of the submit/undo/reset cycle and snapshot persistence.

use tally_core::errors::{SubmitError, UndoError};
use tally_core::ledger::Ledger;
use tally_core::utils::persistence::{load_ledger_from_file, save_ledger_to_file};
use tempfile::TempDir;

fn totals_of(ledger: &Ledger) -> Vec<(String, i64)> {
    ledger
        .snapshot()
        .totals
        .into_iter()
        .map(|c| (c.name, c.total))
        .collect()
}

#[test]
fn noisy_session_accumulates_merges_and_undoes() {
    let mut ledger = Ledger::new();

    ledger
        .submit_batch("Продукты: 450\nКофе: 120\n\nТакси - -15")
        .expect("first submission");
    ledger
        .submit_batch("продукты - 100\nкакая-то ерунда без числа после тире\nКофе: 80")
        .expect("second submission");

    assert_eq!(
        totals_of(&ledger),
        vec![
            ("Продукты".to_owned(), 550),
            ("Кофе".to_owned(), 200),
            ("Такси".to_owned(), -15),
        ]
    );
    assert_eq!(ledger.snapshot().submission_count, 2);

    ledger.undo_last_batch().expect("undo second submission");
    assert_eq!(
        totals_of(&ledger),
        vec![
            ("Продукты".to_owned(), 450),
            ("Кофе".to_owned(), 120),
            ("Такси".to_owned(), -15),
        ]
    );
    assert_eq!(ledger.snapshot().submission_count, 1);
    assert_eq!(ledger.undo_last_batch(), Err(UndoError::NothingToUndo));
}

#[test]
fn cycle_limit_blocks_until_reset() {
    let mut ledger = Ledger::new();
    for _ in 0..Ledger::MAX_SUBMISSIONS {
        ledger.submit_batch("Еда: 1").expect("within the cycle limit");
    }
    assert!(ledger.is_full());
    assert_eq!(ledger.submit_batch("Еда: 1"), Err(SubmitError::CycleFull));
    assert_eq!(totals_of(&ledger), vec![("Еда".to_owned(), 6)]);

    ledger.reset_cycle();
    assert!(!ledger.is_full());
    assert!(totals_of(&ledger).is_empty());
}

#[test]
fn session_survives_save_and_load() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("counter_state.json");

    let mut ledger = Ledger::new();
    ledger.submit_batch("Еда: 100\nТакси: 50").expect("submission");
    save_ledger_to_file(&ledger, &path).expect("save");

    let mut restored = load_ledger_from_file(&path).expect("load");
    assert_eq!(restored, ledger);

    // The restored session keeps its undo record and key order.
    restored.undo_last_batch().expect("undo after restore");
    assert!(totals_of(&restored).is_empty());
    assert_eq!(restored.snapshot().submission_count, 0);
}
