//! Input event payloads consumed by the session handlers.
//!
//! These mirror what a windowing layer delivers; the session never talks
//! to a window system directly.

use crate::geometry::Point;

/// A wheel tick over the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical wheel delta; negative deltas zoom in
    pub delta_y: f64,
    /// Pointer position, used as the zoom anchor
    pub position: Point,
}

impl WheelEvent {
    pub fn new(delta_y: f64, position: Point) -> Self {
        Self { delta_y, position }
    }
}

/// A pointer (mouse) event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    /// Movement since the previous pointer event, as delivered by the
    /// windowing layer
    pub movement: Point,
}

impl PointerEvent {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            movement: Point::ZERO,
        }
    }

    pub fn moved(position: Point, movement: Point) -> Self {
        Self { position, movement }
    }
}

/// One active touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    pub id: u64,
    pub position: Point,
}

impl Touch {
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}
