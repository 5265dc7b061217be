//! Shared numeric constants for the annotation engine.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.2;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 5.0;

/// Per-notch zoom multiplier for wheel input.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_HIT_RADIUS_PX: f64 = 8.0;

/// Screen-space hit slop in pixels for the rotate handle.
pub const ROTATE_HIT_RADIUS_PX: f64 = 10.0;

/// Distance from the N handle to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 20.0;

/// Screen-space tolerance in pixels for clicking the first point of an
/// in-progress polygon path to close it.
pub const POLY_CLOSE_TOLERANCE_PX: f64 = 8.0;

// ── Geometry limits ─────────────────────────────────────────────

/// Minimum width and height, in world units, below which a draw gesture is
/// discarded instead of committed.
pub const MIN_COMMIT_SIZE_WORLD: f64 = 5.0;

/// Minimum dimension, in world units, that a resize can shrink a shape to.
pub const MIN_RESIZE_DIM_WORLD: f64 = 1.0;

/// Offset, in world units, applied on both axes when duplicating a shape.
pub const DUPLICATE_OFFSET_WORLD: f64 = 10.0;

// ── Global style ────────────────────────────────────────────────

/// Smallest allowed label font size.
pub const FONT_SIZE_MIN: f64 = 8.0;

/// Largest allowed label font size.
pub const FONT_SIZE_MAX: f64 = 48.0;

/// Default label font size.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Default annotation color as a CSS color string.
pub const DEFAULT_COLOR: &str = "#E53935";

/// Default annotation opacity.
pub const DEFAULT_OPACITY: f64 = 1.0;
