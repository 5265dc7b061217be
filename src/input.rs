//! Input model: tools, modifier keys, mouse buttons, and the gesture state
//! machine.
//!
//! `Tool` is a single tagged field, so exactly one tool can ever be active —
//! no boolean quartet to keep in sync. `InputState` is the active gesture
//! between pointer-down and pointer-up; each variant carries the context
//! needed to compute incremental deltas and commit on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::geom::{BoundingBox, Handle};
use crate::store::ShapeId;

/// Which tool is currently active. Activating a tool implicitly deactivates
/// the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw a rectangle annotation.
    Rect,
    /// Build a polygon annotation point by point.
    Polygon,
    /// Place a free-standing text label (a frameless rectangle).
    Text,
    /// Drag out the crop-selection rectangle used by export.
    Crop,
}

impl Tool {
    /// Whether this tool draws a box by dragging from an anchor corner.
    #[must_use]
    pub fn is_box_draw(self) -> bool {
        matches!(self, Self::Rect | Self::Text | Self::Crop)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the browser reports it (e.g. `"Delete"`,
/// `"Escape"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Crop aspect ratio constraint, as a width:height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub w: f64,
    pub h: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Space bar is held, turning a primary-button drag into a pan.
    pub space_held: bool,
    /// Aspect ratio the crop tool snaps to, if any.
    pub crop_aspect: Option<AspectRatio>,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the pan delta.
        last_screen: Point,
    },
    /// The user is moving every selected shape across the canvas.
    Dragging {
        /// World-space pointer position at the previous event. Movement is
        /// applied frame-to-frame so multiple shapes stay in lockstep
        /// without drift.
        last_world: Point,
        /// Whether any movement happened; a motionless click commits no
        /// history snapshot.
        moved: bool,
    },
    /// The user is resizing the sole selected shape around a fixed pivot.
    Resizing {
        id: ShapeId,
        /// Which corner/edge handle is being dragged.
        handle: Handle,
        /// World-space position of the opposite handle; the fixed pivot.
        pivot: Point,
        /// Shape width at the start of the resize.
        orig_w: f64,
        /// Shape height at the start of the resize.
        orig_h: f64,
        /// Polygon vertices at the start of the resize; each frame rescales
        /// these originals so the transform never accumulates error.
        orig_points: Vec<Point>,
        moved: bool,
    },
    /// The user is rotating the sole selected shape about its center.
    Rotating {
        id: ShapeId,
        /// World-space rotation pivot (the bounding-box center at grab
        /// time).
        center: Point,
        /// Angle applied at the previous event; polygon vertices rotate by
        /// the per-frame delta so repeated frames compose.
        last_angle: f64,
        moved: bool,
    },
    /// The user is dragging out a new rectangle / text frame / crop box.
    DrawingShape {
        /// World-space corner where the drag started.
        anchor_world: Point,
        /// Current candidate box — a transient preview, not yet in the
        /// store.
        candidate: BoundingBox,
    },
    /// The user is placing polygon vertices click by click.
    BuildingPolygon {
        /// Committed path points so far, in world coordinates.
        points: Vec<Point>,
        /// Live cursor position for the preview edge from the last point.
        preview: Option<Point>,
    },
}
