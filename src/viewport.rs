//! View transform state and the anchor-preserving zoom math.
//!
//! The viewport is the affine map from map space to screen space:
//! `screen = scale * map + translate`. All operations here are pure; the
//! gesture handlers in [`crate::input`] decide when to commit a result.

use crate::constants::{DEFAULT_SCALE, MIN_SCALE, WHEEL_SENSITIVITY};
use crate::geometry::Point;

/// Current view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Zoom factor, always above [`MIN_SCALE`]
    pub scale: f64,
    /// Screen-space offset of the map origin
    pub translate: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            translate: Point::ZERO,
        }
    }
}

/// Translation that keeps `anchor` visually fixed while the scale is
/// multiplied by `ratio`.
///
/// With `screen = scale * map + translate`, holding the anchor's screen
/// position constant across the scale change solves, per axis, to
/// `translate' = anchor - ratio * (anchor - translate)`.
pub fn scale_about_anchor(ratio: f64, translate: Point, anchor: Point) -> Point {
    Point::new(
        anchor.x - ratio * (anchor.x - translate.x),
        anchor.y - ratio * (anchor.y - translate.y),
    )
}

impl Viewport {
    pub fn new(scale: f64, translate: Point) -> Self {
        Self { scale, translate }
    }

    /// Project a map-space point to screen space.
    pub fn map_to_screen(&self, point: Point) -> Point {
        Point::new(
            self.scale * point.x + self.translate.x,
            self.scale * point.y + self.translate.y,
        )
    }

    /// Inverse projection, screen space back to map space.
    pub fn screen_to_map(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.translate.x) / self.scale,
            (point.y - self.translate.y) / self.scale,
        )
    }

    /// Wheel zoom about `anchor`. `None` when the resulting scale would
    /// reach the floor; the caller drops the event.
    #[must_use]
    pub fn wheel_zoom(&self, delta_y: f64, anchor: Point) -> Option<Viewport> {
        self.zoom_to(delta_y * WHEEL_SENSITIVITY + self.scale, anchor)
    }

    /// Zoom to an absolute scale, keeping `anchor` visually stationary.
    /// `None` when `next_scale` is at or below the floor.
    #[must_use]
    pub fn zoom_to(&self, next_scale: f64, anchor: Point) -> Option<Viewport> {
        if next_scale <= MIN_SCALE {
            return None;
        }
        let ratio = next_scale / self.scale;
        Some(Viewport {
            scale: next_scale,
            translate: scale_about_anchor(ratio, self.translate, anchor),
        })
    }

    /// Shift the view by a screen-space delta.
    #[must_use]
    pub fn pan_by(&self, delta: Point) -> Viewport {
        Viewport {
            scale: self.scale,
            translate: self.translate + delta,
        }
    }
}
