//! Snapshot store tests - slot semantics for the file and memory stores.

use crate::helpers::TestSessionBuilder;
use metromap::constants::{CURRENT_SNAPSHOT_KEY, LAST_SNAPSHOT_KEY};
use metromap::{FileStore, MemoryStore, Session, SnapshotStore};

#[test]
fn test_file_store_round_trip() {
    metromap::logging::init();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::at(dir.path().join("slots")).unwrap();

    assert_eq!(store.get("current").unwrap(), None);
    store.put("current", r#"{"stations":[],"lines":[]}"#).unwrap();
    assert_eq!(
        store.get("current").unwrap().as_deref(),
        Some(r#"{"stations":[],"lines":[]}"#)
    );
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("slots");
    {
        let mut store = FileStore::at(&root).unwrap();
        store.put("current", "blob-v1").unwrap();
    }
    let store = FileStore::at(&root).unwrap();
    assert_eq!(store.get("current").unwrap().as_deref(), Some("blob-v1"));
}

#[test]
fn test_save_rotates_current_into_last() {
    let mut store = MemoryStore::new();
    let mut session = TestSessionBuilder::new()
        .with_station(1, 0.0, 0.0)
        .with_title("v1")
        .build();

    session.save_to(&mut store).unwrap();
    assert!(store.get(CURRENT_SNAPSHOT_KEY).unwrap().is_some());
    assert_eq!(store.get(LAST_SNAPSHOT_KEY).unwrap(), None);

    let first_save = store.get(CURRENT_SNAPSHOT_KEY).unwrap();
    session.set_title("v2");
    session.save_to(&mut store).unwrap();

    assert_eq!(store.get(LAST_SNAPSHOT_KEY).unwrap(), first_save);
    assert_ne!(store.get(CURRENT_SNAPSHOT_KEY).unwrap(), first_save);
}

#[test]
fn test_load_restores_saved_map() {
    let mut store = MemoryStore::new();
    let session = TestSessionBuilder::new()
        .with_station(1, 10.0, 20.0)
        .with_line(1, "Red", &[1])
        .with_title("Saved")
        .build();
    session.save_to(&mut store).unwrap();

    let mut restored = Session::new();
    assert!(restored.load_from(&store).unwrap());
    assert_eq!(restored.title(), "Saved");
    assert_eq!(restored.graph().station_count(), 1);
    assert_eq!(restored.graph().line_count(), 1);
}

#[test]
fn test_load_from_empty_store_is_a_no_op() {
    let store = MemoryStore::new();
    let mut session = Session::new();
    assert!(!session.load_from(&store).unwrap());
    assert_eq!(session.graph().station_count(), 0);
}

#[test]
fn test_export_blob_reads_slots_verbatim() {
    let mut store = MemoryStore::new();
    store.put(LAST_SNAPSHOT_KEY, "recovery-blob").unwrap();
    assert_eq!(
        Session::export_blob(&store, LAST_SNAPSHOT_KEY)
            .unwrap()
            .as_deref(),
        Some("recovery-blob")
    );
    assert_eq!(
        Session::export_blob(&store, CURRENT_SNAPSHOT_KEY).unwrap(),
        None
    );
}
