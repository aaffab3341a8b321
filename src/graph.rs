//! The station/line graph store.
//!
//! Single source of truth for map content. Every mutation goes through the
//! operations here; each is atomic and reports failure through
//! [`GraphError`] without touching prior state. History tracking lives one
//! layer up, in [`crate::history`].

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Line, LineId, Station, StationId};

/// Errors surfaced by graph store operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Station creation with an id that is already taken
    #[error("station {0} already exists")]
    DuplicateStation(StationId),

    /// Line creation with an id that is already taken
    #[error("line {0} already exists")]
    DuplicateLine(LineId),

    /// Operation referenced a station absent from the graph
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Operation referenced a line absent from the graph
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Insertion or removal index outside the line's current bounds
    #[error("index {index} out of range for line {line} (len {len})")]
    IndexOutOfRange {
        line: LineId,
        index: usize,
        len: usize,
    },
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// The station/line graph.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    stations: HashMap<StationId, Station>,
    lines: HashMap<LineId, Line>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from snapshot sequences. Later entries win on key
    /// collision, matching map-replacement import semantics.
    pub fn from_parts(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        Self {
            stations: stations.into_iter().map(|s| (s.station_id, s)).collect(),
            lines: lines.into_iter().map(|l| (l.line_id, l)).collect(),
        }
    }

    /// Snapshot sequences, sorted by id so exports are stable.
    pub fn to_parts(&self) -> (Vec<Station>, Vec<Line>) {
        let mut stations: Vec<Station> = self.stations.values().cloned().collect();
        stations.sort_by_key(|s| s.station_id);
        let mut lines: Vec<Line> = self.lines.values().cloned().collect();
        lines.sort_by_key(|l| l.line_id);
        (stations, lines)
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn contains_station(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Smallest id not yet taken by any station. Stable across removal of
    /// lower ids only while the highest station survives, which is enough
    /// for fresh-id allocation during an editing session.
    pub fn next_station_id(&self) -> StationId {
        StationId(
            self.stations
                .keys()
                .map(|id| id.0)
                .max()
                .map_or(1, |max| max + 1),
        )
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Create a station at a map position, with its default name.
    pub fn add_station(&mut self, id: StationId, x: f64, y: f64) -> GraphResult<()> {
        if self.stations.contains_key(&id) {
            return Err(GraphError::DuplicateStation(id));
        }
        self.stations.insert(id, Station::new(id, x, y));
        Ok(())
    }

    /// Remove a station. Does not cascade into lines referencing it;
    /// callers that need that issue separate `remove_station_from_line`
    /// calls so each step stays individually invertible.
    pub fn remove_station(&mut self, id: StationId) -> GraphResult<Station> {
        self.stations
            .remove(&id)
            .ok_or(GraphError::StationNotFound(id))
    }

    /// Overwrite a station's position.
    pub fn move_station(&mut self, id: StationId, x: f64, y: f64) -> GraphResult<()> {
        let station = self
            .stations
            .get_mut(&id)
            .ok_or(GraphError::StationNotFound(id))?;
        station.x = x;
        station.y = y;
        Ok(())
    }

    /// Create a line with an initial station sequence.
    pub fn add_line(
        &mut self,
        id: LineId,
        name: impl Into<String>,
        stations: Vec<StationId>,
    ) -> GraphResult<()> {
        if self.lines.contains_key(&id) {
            return Err(GraphError::DuplicateLine(id));
        }
        self.lines.insert(id, Line::new(id, name, stations));
        Ok(())
    }

    /// Insert `station_id` into a line's sequence at `index`. `index` may
    /// equal the current length (append).
    pub fn insert_station_into_line(
        &mut self,
        line_id: LineId,
        station_id: StationId,
        index: usize,
    ) -> GraphResult<()> {
        if !self.stations.contains_key(&station_id) {
            return Err(GraphError::StationNotFound(station_id));
        }
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(GraphError::LineNotFound(line_id))?;
        if index > line.stations.len() {
            return Err(GraphError::IndexOutOfRange {
                line: line_id,
                index,
                len: line.stations.len(),
            });
        }
        line.stations.insert(index, station_id);
        Ok(())
    }

    /// Remove the station at `index` from a line's sequence.
    pub fn remove_station_from_line(
        &mut self,
        line_id: LineId,
        index: usize,
    ) -> GraphResult<StationId> {
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(GraphError::LineNotFound(line_id))?;
        if index >= line.stations.len() {
            return Err(GraphError::IndexOutOfRange {
                line: line_id,
                index,
                len: line.stations.len(),
            });
        }
        Ok(line.stations.remove(index))
    }
}
