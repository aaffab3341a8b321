//! Interactive editing core for a transit-map builder.
//!
//! A [`session::Session`] owns everything one open map needs: the view
//! transform, the interaction mode, the station/line graph and the active
//! edit history. Raw input events go in through the handlers in
//! [`input`]; the renderer reads state back out through the session's
//! accessors.
//!
//! The pieces compose bottom-up:
//!
//! - [`geometry`] - point math shared by everything
//! - [`viewport`] - the affine view transform and anchor-preserving zoom
//! - [`graph`] - the station/line store, sole mutation path for content
//! - [`history`] - reversible edit records with per-mode undo/redo
//! - [`input`] - mode state machine and gesture handlers
//! - [`session`] - the context object tying the above together
//! - [`storage`] - opaque snapshot slots for saving and recovery

pub mod constants;
pub mod geometry;
pub mod graph;
pub mod history;
pub mod input;
pub mod logging;
pub mod session;
pub mod storage;
pub mod types;
pub mod viewport;

pub use geometry::Point;
pub use graph::{Graph, GraphError, GraphResult};
pub use history::{EditHistory, EditRecord, InsertInfo};
pub use input::{EditMode, Mode, PointerEvent, Touch, WheelEvent};
pub use session::{EditError, EditResult, Session};
pub use storage::{FileStore, MemoryStore, SnapshotStore};
pub use types::{Line, LineId, MapSnapshot, Station, StationId};
pub use viewport::Viewport;
