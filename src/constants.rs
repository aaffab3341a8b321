//! Editor-wide constants.
//!
//! Centralizes magic numbers to keep gesture math and persistence keys in
//! one place.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Wheel delta to scale conversion factor. Negative so that wheel-up
/// (negative delta) zooms in.
pub const WHEEL_SENSITIVITY: f64 = -0.0006;

/// Scale floor. Gesture inputs that would take the scale to or below this
/// value are dropped, not clamped.
pub const MIN_SCALE: f64 = 0.1;

/// Initial zoom level.
pub const DEFAULT_SCALE: f64 = 1.0;

// ============================================================================
// Persistence
// ============================================================================

/// Storage slot holding the latest saved snapshot.
pub const CURRENT_SNAPSHOT_KEY: &str = "current";

/// Storage slot holding the previous save, kept for recovery export.
pub const LAST_SNAPSHOT_KEY: &str = "last";

/// Default title for a map that was never named.
pub const DEFAULT_TITLE: &str = "Untitled map";
