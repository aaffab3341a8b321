//! Core types for the metromap graph.
//!
//! Stations and lines are the map content being edited; [`MapSnapshot`] is
//! their serializable form used by import/export and the snapshot store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a station, unique within one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a line, unique within one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: StationId,
    /// Map-space position
    pub x: f64,
    pub y: f64,
    pub name: String,
}

impl Station {
    /// New station with the default name derived from its id. Imported
    /// stations keep whatever name the snapshot carries.
    pub fn new(station_id: StationId, x: f64, y: f64) -> Self {
        Self {
            station_id,
            x,
            y,
            name: format!("Station {station_id}"),
        }
    }
}

/// A line: an ordered sequence of stations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub line_id: LineId,
    pub name: String,
    pub stations: Vec<StationId>,
}

impl Line {
    pub fn new(line_id: LineId, name: impl Into<String>, stations: Vec<StationId>) -> Self {
        Self {
            line_id,
            name: name.into(),
            stations,
        }
    }
}

/// Serializable snapshot of a whole map, exchanged with the import/export
/// and persistence collaborators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    #[serde(default)]
    pub title: String,
}
