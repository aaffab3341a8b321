//! Interaction mode state machine.
//!
//! One mode is active at a time. Gesture payloads (reference point, start
//! distance, start scale, start translation) live inside the variants so a
//! gesture can never be observed without its reference data.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning                  (pointer down on the canvas)
//! Idle -> TouchPanning             (touch start, one contact)
//! Idle -> TouchScaling             (touch start, two contacts)
//! Panning -> Idle                  (pointer up or leave)
//! TouchPanning | TouchScaling -> Idle   (touch end, any remaining contacts)
//! Any -> Editing(..)               (explicit edit-mode entry; supersedes gestures)
//! Editing(..) -> Idle              (explicit finish only)
//! Editing(LineEditing) -> Editing(SelectingStationForInsertion)
//!                                  (insertion target picked)
//! ```

use crate::geometry::Point;

/// Structural editing modes. Each one owns an independent undo scope that
/// is discarded when the mode is finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    /// Clicking empty canvas creates stations
    AddingStation,
    /// Dragging stations changes their position
    MovingStation,
    /// Picking a line and an index to insert at
    LineEditing,
    /// Clicking stations inserts them into the picked line
    SelectingStationForInsertion,
}

/// The single active interaction mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// No active gesture or editing session
    Idle,

    /// Pointer-drag panning; moves apply their movement delta directly
    Panning,

    /// One-finger drag
    TouchPanning {
        /// First contact position, fixed for the whole gesture
        ref_point: Point,
        /// Translation when the gesture began
        start_translate: Point,
    },

    /// Two-finger pinch/pan
    TouchScaling {
        /// Midpoint of the two contacts at gesture start
        ref_point: Point,
        /// Inter-contact distance at gesture start
        start_distance: f64,
        /// Scale when the gesture began
        start_scale: f64,
        /// Translation when the gesture began
        start_translate: Point,
    },

    /// A structural editing session
    Editing(EditMode),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Idle
    }
}

impl Mode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning)
    }

    /// Returns true for either touch gesture (pan or pinch).
    pub fn is_touch_gesture(&self) -> bool {
        matches!(self, Self::TouchPanning { .. } | Self::TouchScaling { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The active structural editing mode, if any.
    pub fn edit_mode(&self) -> Option<EditMode> {
        match self {
            Self::Editing(mode) => Some(*mode),
            _ => None,
        }
    }
}
