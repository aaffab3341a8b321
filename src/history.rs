//! Mode-scoped edit history.
//!
//! Every structural edit is captured as an [`EditRecord`] that carries
//! enough data to be replayed forward and inverted, without consulting any
//! state beyond the graph itself. A history belongs to one editing mode;
//! entering a mode starts an empty history and finishing the mode discards
//! it.
//!
//! The cursor marks the last applied record (`-1` when nothing is
//! applied). A fresh edit after undos truncates the redo tail, standard
//! linear-history semantics.

use crate::graph::{Graph, GraphResult};
use crate::input::EditMode;
use crate::types::{LineId, StationId};

/// A reversible description of one structural edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditRecord {
    /// Station created at a point
    StationAdd {
        station_id: StationId,
        x: f64,
        y: f64,
    },

    /// Station position changed
    StationMove {
        station_id: StationId,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
    },

    /// Station inserted into a line's sequence at an index
    LineInsertion {
        station_id: StationId,
        line_id: LineId,
        station_index: usize,
    },
}

impl EditRecord {
    /// Replay the edit forward against the graph.
    pub fn apply(&self, graph: &mut Graph) -> GraphResult<()> {
        match *self {
            EditRecord::StationAdd { station_id, x, y } => graph.add_station(station_id, x, y),
            EditRecord::StationMove {
                station_id,
                to_x,
                to_y,
                ..
            } => graph.move_station(station_id, to_x, to_y),
            EditRecord::LineInsertion {
                station_id,
                line_id,
                station_index,
            } => graph.insert_station_into_line(line_id, station_id, station_index),
        }
    }

    /// Apply the inverse edit against the graph.
    pub fn revert(&self, graph: &mut Graph) -> GraphResult<()> {
        match *self {
            EditRecord::StationAdd { station_id, .. } => {
                graph.remove_station(station_id).map(|_| ())
            }
            EditRecord::StationMove {
                station_id,
                from_x,
                from_y,
                ..
            } => graph.move_station(station_id, from_x, from_y),
            EditRecord::LineInsertion {
                line_id,
                station_index,
                ..
            } => graph.remove_station_from_line(line_id, station_index).map(|_| ()),
        }
    }
}

/// Linear undo log for one editing mode.
#[derive(Clone, Debug)]
pub struct EditHistory {
    mode: EditMode,
    records: Vec<EditRecord>,
    /// Index of the last applied record; -1 when none is applied.
    cursor: isize,
}

impl EditHistory {
    pub fn new(mode: EditMode) -> Self {
        Self {
            mode,
            records: Vec::new(),
            cursor: -1,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor >= 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.records.len() as isize
    }

    /// Record an edit that was already applied to the graph. Any records
    /// beyond the cursor (the redo tail) are dropped first.
    pub fn push(&mut self, record: EditRecord) {
        self.records.truncate((self.cursor + 1) as usize);
        self.records.push(record);
        self.cursor += 1;
    }

    /// Revert the record at the cursor and step back. Returns the reverted
    /// record, or `None` when undo is disabled. A graph failure leaves the
    /// cursor where it was.
    pub fn undo(&mut self, graph: &mut Graph) -> GraphResult<Option<EditRecord>> {
        if !self.can_undo() {
            return Ok(None);
        }
        let record = self.records[self.cursor as usize];
        record.revert(graph)?;
        self.cursor -= 1;
        Ok(Some(record))
    }

    /// Replay the record after the cursor and step forward. Returns the
    /// replayed record, or `None` when redo is disabled.
    pub fn redo(&mut self, graph: &mut Graph) -> GraphResult<Option<EditRecord>> {
        if !self.can_redo() {
            return Ok(None);
        }
        let record = self.records[(self.cursor + 1) as usize];
        record.apply(graph)?;
        self.cursor += 1;
        Ok(Some(record))
    }
}

/// Pending line-insertion target while selecting stations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertInfo {
    pub line_id: LineId,
    /// Index the next insertion lands at; -1 when no target is active.
    pub insert_index: isize,
}

impl InsertInfo {
    pub fn new(line_id: LineId, insert_index: usize) -> Self {
        Self {
            line_id,
            insert_index: insert_index as isize,
        }
    }

    pub fn is_active(&self) -> bool {
        self.insert_index >= 0
    }

    /// Next insertion lands one position further along the line.
    pub(crate) fn advance(&mut self) {
        self.insert_index += 1;
    }

    /// Step the pending index back, floored at the start of the line.
    pub(crate) fn roll_back(&mut self) {
        if self.insert_index > 0 {
            self.insert_index -= 1;
        }
    }

    /// Keep the target line but stop highlighting a pending index.
    pub(crate) fn deactivate(&mut self) {
        self.insert_index = -1;
    }
}
