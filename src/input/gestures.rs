//! Gesture handling - wheel zoom, pointer pan, touch pan and pinch.
//!
//! Each handler interprets one raw event against the current mode and
//! commits the resulting viewport. The viewport math itself is pure and
//! lives in [`crate::viewport`]; nothing here touches the graph.

use crate::constants::MIN_SCALE;
use crate::geometry::Point;
use crate::input::events::{PointerEvent, Touch, WheelEvent};
use crate::input::mode::Mode;
use crate::session::Session;
use crate::viewport::scale_about_anchor;

impl Session {
    /// Zoom about the pointer. Events that would push the scale to the
    /// floor are dropped without feedback.
    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        match self.viewport.wheel_zoom(event.delta_y, event.position) {
            Some(next) => self.viewport = next,
            None => {
                tracing::trace!(delta_y = event.delta_y, "wheel zoom under scale floor, dropped")
            }
        }
    }

    pub fn handle_pointer_down(&mut self, _event: &PointerEvent) {
        if self.mode.is_idle() {
            self.mode = Mode::Panning;
        }
    }

    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if self.mode.is_panning() {
            self.viewport = self.viewport.pan_by(event.movement);
        }
    }

    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) {
        if self.mode.is_panning() {
            self.mode = Mode::Idle;
        }
    }

    /// Leaving the canvas ends a pan the same way a release does.
    pub fn handle_pointer_leave(&mut self, event: &PointerEvent) {
        self.handle_pointer_up(event);
    }

    /// Start a touch gesture: one contact pans, two contacts pinch. Other
    /// contact counts, and any touch while editing, are ignored.
    pub fn handle_touch_start(&mut self, touches: &[Touch]) {
        if self.mode.is_editing() {
            return;
        }
        match touches {
            [touch] => {
                self.mode = Mode::TouchPanning {
                    ref_point: touch.position,
                    start_translate: self.viewport.translate,
                };
            }
            [first, second] => {
                self.mode = Mode::TouchScaling {
                    ref_point: Point::midpoint(first.position, second.position),
                    start_distance: first.position.distance_to(second.position),
                    start_scale: self.viewport.scale,
                    start_translate: self.viewport.translate,
                };
            }
            _ => {}
        }
    }

    pub fn handle_touch_move(&mut self, touches: &[Touch]) {
        match (self.mode, touches) {
            (
                Mode::TouchPanning {
                    ref_point,
                    start_translate,
                },
                [touch],
            ) => {
                // The reference point never moves mid-gesture; this is a
                // drag relative to the start, not an accumulation of
                // per-event deltas.
                let displacement = touch.position.displacement_to(ref_point);
                self.viewport.translate = displacement + start_translate;
            }
            (
                Mode::TouchScaling {
                    ref_point,
                    start_distance,
                    start_scale,
                    start_translate,
                },
                [first, second],
            ) => {
                let distance = first.position.distance_to(second.position);
                let next_scale = start_scale * distance / start_distance;
                if next_scale <= MIN_SCALE {
                    tracing::trace!(next_scale, "pinch under scale floor, dropped");
                    return;
                }
                // Zoom about the original midpoint relative to the start
                // state, then re-center as the midpoint drifts.
                let ratio = next_scale / start_scale;
                let scaled_translate = scale_about_anchor(ratio, start_translate, ref_point);
                let midpoint = Point::midpoint(first.position, second.position);
                self.viewport.scale = next_scale;
                self.viewport.translate = midpoint.displacement_to(ref_point) + scaled_translate;
            }
            _ => {}
        }
    }

    /// Any touch end collapses the gesture, no matter how many contacts
    /// remain.
    pub fn handle_touch_end(&mut self, _touches: &[Touch]) {
        if self.mode.is_touch_gesture() {
            self.mode = Mode::Idle;
        }
    }
}
