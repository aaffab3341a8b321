//! Snapshot serialization tests using the insta crate.
//!
//! Inline snapshots pin the exact JSON shape exchanged with the
//! import/export collaborator. To update after intentional changes:
//!
//! ```sh
//! cargo insta test --accept
//! ```

use metromap::{Line, LineId, MapSnapshot, Station, StationId};

#[test]
fn snapshot_station_json() {
    let mut station = Station::new(StationId(3), 12.5, -4.0);
    station.name = "Riverside".to_string();
    insta::assert_json_snapshot!(station, @r###"
    {
      "station_id": 3,
      "x": 12.5,
      "y": -4.0,
      "name": "Riverside"
    }
    "###);
}

#[test]
fn snapshot_map_json() {
    let snapshot = MapSnapshot {
        stations: vec![Station::new(StationId(1), 0.0, 0.0)],
        lines: vec![Line::new(LineId(1), "Red", vec![StationId(1)])],
        title: "Demo".to_string(),
    };
    insta::assert_json_snapshot!(snapshot, @r###"
    {
      "stations": [
        {
          "station_id": 1,
          "x": 0.0,
          "y": 0.0,
          "name": "Station 1"
        }
      ],
      "lines": [
        {
          "line_id": 1,
          "name": "Red",
          "stations": [
            1
          ]
        }
      ],
      "title": "Demo"
    }
    "###);
}

#[test]
fn test_snapshot_json_round_trip() {
    let snapshot = MapSnapshot {
        stations: vec![
            Station::new(StationId(1), 0.0, 0.0),
            Station::new(StationId(2), 250.0, -30.5),
        ],
        lines: vec![Line::new(
            LineId(7),
            "Circle",
            vec![StationId(1), StationId(2), StationId(1)],
        )],
        title: "Round trip".to_string(),
    };

    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored: MapSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
