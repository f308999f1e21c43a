use notes_calendar_lib::config::{StoreConfig, DATA_DIR_NAME, DATA_FILE_NAME};
use notes_calendar_lib::store::NoteStore;
use serde_json::json;
use std::fs;

fn open_in(home: &std::path::Path) -> NoteStore {
    NoteStore::open(StoreConfig::from_home(home)).expect("open note store")
}

#[test]
fn first_run_creates_data_dir_and_loads_empty() {
    let home = tempfile::tempdir().expect("temp home");
    let store = open_in(home.path());
    assert!(home.path().join(DATA_DIR_NAME).is_dir());
    assert_eq!(store.load_data(), json!([]));
}

#[test]
fn notes_survive_reopening_the_store() {
    let home = tempfile::tempdir().expect("temp home");
    let notes = json!([
        {"id": 1, "title": "X"},
        {"id": "k3", "title": "Dentista", "date": "2026-11-02", "done": false}
    ]);
    assert!(open_in(home.path()).save_data(&notes));

    let reopened = open_in(home.path());
    assert_eq!(reopened.load_data(), notes);
    assert_eq!(
        reopened.data_file(),
        home.path().join(DATA_DIR_NAME).join(DATA_FILE_NAME)
    );
}

#[test]
fn external_corruption_reads_as_empty_and_next_save_recovers() {
    let home = tempfile::tempdir().expect("temp home");
    let store = open_in(home.path());
    assert!(store.save_data(&json!([{"id": 1}])));

    fs::write(store.data_file(), "<<garbage>>").expect("corrupt file");
    assert_eq!(store.load_data(), json!([]));

    assert!(store.save_data(&json!([{"id": 2}])));
    assert_eq!(store.load_data(), json!([{"id": 2}]));
}
