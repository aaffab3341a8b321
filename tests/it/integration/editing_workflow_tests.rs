//! Editing Workflow Integration Tests
//!
//! Complete edit sessions end-to-end: mode entry, edits, finish, and the
//! import/export boundary.

use crate::helpers::{assert_station_count, line_station_ids, TestSessionBuilder};
use metromap::{EditError, EditMode, GraphError, LineId, MapSnapshot, Session, StationId};

#[test]
fn test_new_session_defaults() {
    let session = Session::new();
    assert!(session.mode().is_idle());
    assert_eq!(session.viewport().scale, 1.0);
    assert_eq!(session.graph().station_count(), 0);
    assert!(session.history().is_none());
    assert_eq!(session.title(), "Untitled map");
}

#[test]
fn test_full_editing_workflow() {
    let mut session = TestSessionBuilder::new()
        .with_station(1, 0.0, 0.0)
        .with_station(2, 200.0, 0.0)
        .with_line(1, "Red", &[1, 2])
        .with_title("Downtown")
        .build();

    // add two stations
    session.enter_edit_mode(EditMode::AddingStation);
    assert_eq!(session.history().unwrap().mode(), EditMode::AddingStation);
    let added_a = session.add_station(100.0, 50.0).unwrap();
    let added_b = session.add_station(100.0, -50.0).unwrap();
    session.finish_editing();
    assert_station_count(&session, 4);

    // nudge one of them
    session.enter_edit_mode(EditMode::MovingStation);
    session.move_station(added_a, 110.0, 55.0).unwrap();
    session.finish_editing();
    let station = session.graph().station(added_a).unwrap();
    assert_eq!((station.x, station.y), (110.0, 55.0));

    // thread both into the line
    session.enter_edit_mode(EditMode::LineEditing);
    session.begin_insertion(LineId(1), 1).unwrap();
    assert_eq!(
        session.mode().edit_mode(),
        Some(EditMode::SelectingStationForInsertion)
    );
    session.insert_station(added_a).unwrap();
    session.insert_station(added_b).unwrap();
    assert_eq!(
        line_station_ids(&session, 1),
        vec![1, added_a.0, added_b.0, 2]
    );

    session.finish_editing();
    assert!(session.mode().is_idle());
    assert!(session.history().is_none());
    // the target line is remembered but no index stays highlighted
    let info = session.insert_info().unwrap();
    assert_eq!(info.line_id, LineId(1));
    assert_eq!(info.insert_index, -1);
    assert!(!info.is_active());
}

#[test]
fn test_added_station_ids_are_fresh() {
    let mut session = TestSessionBuilder::new()
        .with_station(7, 0.0, 0.0)
        .build_in_mode(EditMode::AddingStation);

    let id = session.add_station(10.0, 10.0).unwrap();
    assert_eq!(id, StationId(8));
    let next = session.add_station(20.0, 20.0).unwrap();
    assert_eq!(next, StationId(9));
}

#[test]
fn test_begin_insertion_requires_line_editing_mode() {
    let mut session = TestSessionBuilder::new()
        .with_line(1, "Red", &[])
        .build();
    assert_eq!(
        session.begin_insertion(LineId(1), 0),
        Err(EditError::WrongMode)
    );
}

#[test]
fn test_begin_insertion_rejects_unknown_line() {
    let mut session = TestSessionBuilder::new().build_in_mode(EditMode::LineEditing);
    assert_eq!(
        session.begin_insertion(LineId(9), 0),
        Err(EditError::Graph(GraphError::LineNotFound(LineId(9))))
    );
    assert_eq!(session.insert_info(), None);
}

#[test]
fn test_import_replaces_content_and_applies_title() {
    let mut session = TestSessionBuilder::new()
        .with_station(1, 0.0, 0.0)
        .with_title("Old")
        .build();

    let replacement = TestSessionBuilder::new()
        .with_station(10, 5.0, 5.0)
        .with_station(11, 6.0, 6.0)
        .with_title("New")
        .build()
        .export_snapshot();

    session.import_snapshot(replacement);
    assert_station_count(&session, 2);
    assert!(!session.graph().contains_station(StationId(1)));
    assert_eq!(session.title(), "New");
}

#[test]
fn test_import_with_empty_title_keeps_current_one() {
    let mut session = TestSessionBuilder::new().with_title("Keep me").build();
    session.import_snapshot(MapSnapshot::default());
    assert_eq!(session.title(), "Keep me");
}

#[test]
fn test_export_import_round_trip() {
    let session = TestSessionBuilder::new()
        .with_named_station(1, "Harbor", 0.0, 0.0)
        .with_named_station(2, "Museum", 150.0, 40.0)
        .with_line(3, "Blue", &[2, 1])
        .with_title("Round trip")
        .build();

    let snapshot = session.export_snapshot();
    let mut restored = Session::new();
    restored.import_snapshot(snapshot.clone());

    assert_eq!(restored.export_snapshot(), snapshot);
    assert_eq!(
        restored.graph().station(StationId(1)).unwrap().name,
        "Harbor"
    );
    assert_eq!(line_station_ids(&restored, 3), vec![2, 1]);
}

#[test]
fn test_viewport_survives_edit_sessions() {
    let mut session = TestSessionBuilder::new().build();
    session.handle_wheel(&crate::helpers::wheel(-1000.0, 100.0, 100.0));
    let viewport = session.viewport();

    session.enter_edit_mode(EditMode::AddingStation);
    session.add_station(0.0, 0.0).unwrap();
    session.finish_editing();
    assert_eq!(session.viewport(), viewport);
}
