//! End-to-end progress flows against the file-backed store.

use std::cell::RefCell;
use std::rc::Rc;

use coursekit_core::{Catalog, Day, EventKind, ProgressStats};
use coursekit_progress::persist::{COMPLETED_KEY, CURSOR_KEY};
use coursekit_progress::{LessonAccess, ProgressStore, TimeLedger};
use coursekit_storage::{JsonFileStore, KeyValueStore};

fn open(dir: &std::path::Path) -> ProgressStore<JsonFileStore> {
    ProgressStore::open(Catalog::builtin(), JsonFileStore::open(dir).unwrap())
}

#[test]
fn progress_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open(dir.path());
        store.mark_complete(1).unwrap();
        store.mark_complete(2).unwrap();
        store.mark_complete(9).unwrap();
    }

    let store = open(dir.path());
    let days: Vec<u8> = store.state().completed_days.iter().map(|d| d.get()).collect();
    assert_eq!(days, vec![1, 2, 9]);
    assert_eq!(store.unlock_cursor().get(), 3);
    assert_eq!(
        store.compute_stats(),
        ProgressStats { completed_count: 3, remaining_count: 27, percentage: 10, streak: 3 }
    );
}

#[test]
fn corrupted_values_reset_progress() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut raw = JsonFileStore::open(dir.path()).unwrap();
        raw.set(COMPLETED_KEY, "definitely not json".into()).unwrap();
        raw.set(CURSOR_KEY, "{}".into()).unwrap();
    }

    let store = open(dir.path());
    assert!(store.state().completed_days.is_empty());
    assert_eq!(store.unlock_cursor(), Day::MIN);
}

#[test]
fn out_of_range_values_are_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut raw = JsonFileStore::open(dir.path()).unwrap();
        raw.set(COMPLETED_KEY, "[0, 3, 3, 45, \"7\", 2]".into()).unwrap();
        raw.set(CURSOR_KEY, "77".into()).unwrap();
    }

    let store = open(dir.path());
    let days: Vec<u8> = store.state().completed_days.iter().map(|d| d.get()).collect();
    assert_eq!(days, vec![3, 2]);
    assert_eq!(store.unlock_cursor(), Day::MAX);
}

#[test]
fn learner_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = notifications.clone();
    store.subscribe(move |e| {
        let line = match &e.kind {
            EventKind::LessonCompleted { day } => format!("completed {}", day),
            EventKind::LessonLocked { day } => format!("locked {}", day),
            EventKind::NavigateTo { path, .. } => format!("goto {}", path),
        };
        sink.borrow_mut().push(line);
    });

    assert_eq!(store.open_lesson(2).unwrap(), LessonAccess::Locked);
    store.open_lesson(1).unwrap();
    store.mark_complete(1).unwrap();
    store.mark_complete(1).unwrap();
    store.open_lesson(2).unwrap();

    assert_eq!(
        *notifications.borrow(),
        vec![
            "locked 2",
            "goto lessons/day-1.html",
            "completed 1",
            "goto lessons/day-2.html",
        ]
    );
}

#[test]
fn time_ledger_shares_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    store.mark_complete(1).unwrap();

    let mut ledger = TimeLedger::load(store.storage());
    ledger.record("lessons/day-1.html", std::time::Duration::from_millis(900));
    ledger.persist(store.storage_mut()).unwrap();

    let reopened = open(dir.path());
    assert_eq!(reopened.unlock_cursor().get(), 2);
    assert_eq!(
        TimeLedger::load(reopened.storage()).total("lessons/day-1.html"),
        std::time::Duration::from_millis(900)
    );
}
