//! Editor session - the single owner of view, mode, graph and history
//! state.
//!
//! Handlers receive the session by `&mut` reference, which keeps the
//! one-writer-at-a-time discipline without global mutable state. The impl
//! is split by concern: gesture handling in [`crate::input`], recorded
//! edits and undo/redo in `editing`, snapshot import/export and the save
//! slots in `persistence`.

mod editing;
mod persistence;

pub use editing::{EditError, EditResult};

use crate::constants::DEFAULT_TITLE;
use crate::graph::Graph;
use crate::history::{EditHistory, InsertInfo};
use crate::input::Mode;
use crate::viewport::Viewport;

/// One editor instance: a map being viewed and edited.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) viewport: Viewport,
    pub(crate) mode: Mode,
    pub(crate) graph: Graph,
    /// Present exactly while a structural editing mode is active
    pub(crate) history: Option<EditHistory>,
    pub(crate) insert_info: Option<InsertInfo>,
    pub(crate) title: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty map at the default zoom.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            mode: Mode::Idle,
            graph: Graph::new(),
            history: None,
            insert_info: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    // ========================================================================
    // Render-facing state
    // ========================================================================

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The active mode's history, for undo/redo control state.
    pub fn history(&self) -> Option<&EditHistory> {
        self.history.as_ref()
    }

    /// Pending insertion target, for highlighting in the UI.
    pub fn insert_info(&self) -> Option<InsertInfo> {
        self.insert_info
    }

    pub fn can_undo(&self) -> bool {
        self.history.as_ref().is_some_and(EditHistory::can_undo)
    }

    pub fn can_redo(&self) -> bool {
        self.history.as_ref().is_some_and(EditHistory::can_redo)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}
