//! Recorded edit operations and undo/redo.
//!
//! Each operation mutates the graph first and records only on success, so
//! the history never holds a record for an edit that did not happen.

use thiserror::Error;

use crate::graph::GraphError;
use crate::history::{EditHistory, EditRecord, InsertInfo};
use crate::input::{EditMode, Mode};
use crate::session::Session;
use crate::types::{LineId, StationId};

/// Errors from session-level edit operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// A recorded edit was invoked outside the mode that owns it
    #[error("operation not available in the current mode")]
    WrongMode,

    /// Station insertion attempted without a pending target
    #[error("no insertion target selected")]
    NoInsertionTarget,

    /// The underlying graph operation failed
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for session edit operations.
pub type EditResult<T> = Result<T, EditError>;

impl Session {
    // ========================================================================
    // Mode control
    // ========================================================================

    /// Open a structural editing session. Any in-progress gesture is
    /// discarded and the mode starts with an empty history.
    pub fn enter_edit_mode(&mut self, mode: EditMode) {
        tracing::debug!(?mode, "entering edit mode");
        self.history = Some(EditHistory::new(mode));
        self.mode = Mode::Editing(mode);
    }

    /// Finish the active editing session, discarding its history. The
    /// insertion target stays on its line but stops being highlighted.
    pub fn finish_editing(&mut self) {
        if !self.mode.is_editing() {
            return;
        }
        tracing::debug!(mode = ?self.mode.edit_mode(), "finishing edit session");
        if let Some(info) = self.insert_info.as_mut() {
            info.deactivate();
        }
        self.history = None;
        self.mode = Mode::Idle;
    }

    /// Pick the target line and insertion index while line editing, then
    /// switch to selecting stations for insertion.
    pub fn begin_insertion(&mut self, line_id: LineId, index: usize) -> EditResult<()> {
        self.require_mode(EditMode::LineEditing)?;
        if self.graph.line(line_id).is_none() {
            return Err(GraphError::LineNotFound(line_id).into());
        }
        self.insert_info = Some(InsertInfo::new(line_id, index));
        self.enter_edit_mode(EditMode::SelectingStationForInsertion);
        Ok(())
    }

    // ========================================================================
    // Recorded edits
    // ========================================================================

    /// Create a station at a map position and record the edit. The id is
    /// allocated by the graph.
    pub fn add_station(&mut self, x: f64, y: f64) -> EditResult<StationId> {
        self.require_mode(EditMode::AddingStation)?;
        let id = self.graph.next_station_id();
        self.graph.add_station(id, x, y)?;
        self.record(EditRecord::StationAdd { station_id: id, x, y });
        tracing::debug!(station = %id, x, y, "station added");
        Ok(id)
    }

    /// Move a station to a new position and record the edit.
    pub fn move_station(&mut self, id: StationId, to_x: f64, to_y: f64) -> EditResult<()> {
        self.require_mode(EditMode::MovingStation)?;
        let station = self
            .graph
            .station(id)
            .ok_or(GraphError::StationNotFound(id))?;
        let (from_x, from_y) = (station.x, station.y);
        self.graph.move_station(id, to_x, to_y)?;
        self.record(EditRecord::StationMove {
            station_id: id,
            from_x,
            from_y,
            to_x,
            to_y,
        });
        tracing::debug!(station = %id, to_x, to_y, "station moved");
        Ok(())
    }

    /// Insert a station into the pending target line at the pending
    /// index, record the edit, and advance the index so consecutive
    /// insertions land one after another.
    pub fn insert_station(&mut self, station_id: StationId) -> EditResult<()> {
        self.require_mode(EditMode::SelectingStationForInsertion)?;
        let info = self
            .insert_info
            .filter(InsertInfo::is_active)
            .ok_or(EditError::NoInsertionTarget)?;
        let index = info.insert_index as usize;
        self.graph
            .insert_station_into_line(info.line_id, station_id, index)?;
        self.record(EditRecord::LineInsertion {
            station_id,
            line_id: info.line_id,
            station_index: index,
        });
        if let Some(info) = self.insert_info.as_mut() {
            info.advance();
        }
        tracing::debug!(station = %station_id, line = %info.line_id, index, "station inserted into line");
        Ok(())
    }

    // ========================================================================
    // Undo / redo
    // ========================================================================

    /// Revert the newest applied edit. `Ok(false)` when undo is disabled.
    pub fn undo(&mut self) -> EditResult<bool> {
        let Some(history) = self.history.as_mut() else {
            return Ok(false);
        };
        let Some(record) = history.undo(&mut self.graph)? else {
            return Ok(false);
        };
        // The pending insertion index is mode-local UI state, not part of
        // the graph, so it is rolled back here.
        if let EditRecord::LineInsertion { .. } = record {
            if let Some(info) = self.insert_info.as_mut() {
                info.roll_back();
            }
        }
        tracing::debug!(?record, "edit undone");
        Ok(true)
    }

    /// Replay the next undone edit. `Ok(false)` when redo is disabled.
    pub fn redo(&mut self) -> EditResult<bool> {
        let Some(history) = self.history.as_mut() else {
            return Ok(false);
        };
        let Some(record) = history.redo(&mut self.graph)? else {
            return Ok(false);
        };
        if let EditRecord::LineInsertion { .. } = record {
            if let Some(info) = self.insert_info.as_mut() {
                info.advance();
            }
        }
        tracing::debug!(?record, "edit redone");
        Ok(true)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn require_mode(&self, mode: EditMode) -> EditResult<()> {
        if self.mode.edit_mode() == Some(mode) {
            Ok(())
        } else {
            Err(EditError::WrongMode)
        }
    }

    fn record(&mut self, record: EditRecord) {
        if let Some(history) = self.history.as_mut() {
            history.push(record);
        }
    }
}
