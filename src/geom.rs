//! Geometry kernel: rotated-rectangle and polygon math.
//!
//! Everything here is a pure function over value types — no store access, no
//! I/O. This module is the single source of truth for handle placement: both
//! hit-testing ([`crate::hit`]) and the host renderer must derive handle
//! positions from [`handle_positions`], never recompute them independently.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::camera::Point;
use crate::consts::ROTATE_HANDLE_OFFSET_PX;
use crate::store::{Geometry, Shape};

/// Axis-aligned bounding box, top-left based, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Axis-aligned min/max bounds over a point sequence. An empty sequence
    /// yields a zero box at the origin.
    #[must_use]
    pub fn of_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self { x: min_x, y: min_y, w: max_x - min_x, h: max_y - min_y }
    }

    /// The box spanned by two opposite corners, with positive width/height.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Fold any negative width/height into an equivalent positive-size box.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        if out.w < 0.0 {
            out.x += out.w;
            out.w = -out.w;
        }
        if out.h < 0.0 {
            out.y += out.h;
            out.h = -out.h;
        }
        out
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Rotate `p` by `angle` radians about `center`.
#[must_use]
pub fn rotate_about(p: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Whether `p` lies strictly inside the shape body.
///
/// Rectangles are tested in their rotated local frame with strict
/// inequalities, so boundary points (and therefore the corner handles) are
/// outside. Polygons use even-odd ray casting over the point loop, with the
/// closing edge from last back to first point included.
#[must_use]
pub fn point_in_shape(p: Point, shape: &Shape) -> bool {
    match &shape.geometry {
        Geometry::Rect => {
            let bbox = shape.bbox.normalized();
            let center = bbox.center();
            let local = rotate_about(p, center, -shape.rotation);
            (local.x - center.x).abs() < bbox.w / 2.0 && (local.y - center.y).abs() < bbox.h / 2.0
        }
        Geometry::Polygon { points } => point_in_polygon(p, points),
    }
}

/// Even-odd ray cast: a horizontal ray to the right from `p` crosses an edge
/// when the edge's endpoints straddle `p.y` and its x-intercept at `p.y`
/// exceeds `p.x`.
#[must_use]
pub fn point_in_polygon(p: Point, points: &[Point]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_intercept = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_intercept {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `p` lies within the closed disk of radius `r` around `center`.
/// Inclusive, unlike shape bodies — handles are easier to grab that way.
#[must_use]
pub fn point_in_circle(p: Point, center: Point, r: f64) -> bool {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    dx * dx + dy * dy <= r * r
}

/// A resize or rotate hotspot on a selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Nw,
    Ne,
    Sw,
    Se,
    N,
    S,
    W,
    E,
    Rotate,
}

impl Handle {
    /// The eight resize handles, in a fixed order.
    pub const RESIZE: [Self; 8] = [
        Self::Nw,
        Self::Ne,
        Self::Sw,
        Self::Se,
        Self::N,
        Self::S,
        Self::W,
        Self::E,
    ];

    /// Unit direction of the handle from the box center, per axis, in the
    /// shape's unrotated local frame. Zero on an axis the handle does not
    /// move.
    #[must_use]
    pub fn direction(self) -> (f64, f64) {
        match self {
            Self::Nw => (-1.0, -1.0),
            Self::Ne => (1.0, -1.0),
            Self::Sw => (-1.0, 1.0),
            Self::Se => (1.0, 1.0),
            Self::N | Self::Rotate => (0.0, -1.0),
            Self::S => (0.0, 1.0),
            Self::W => (-1.0, 0.0),
            Self::E => (1.0, 0.0),
        }
    }

    /// The handle diagonally or axially opposite, which serves as the fixed
    /// pivot during a resize. `Rotate` is its own opposite.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Nw => Self::Se,
            Self::Ne => Self::Sw,
            Self::Sw => Self::Ne,
            Self::Se => Self::Nw,
            Self::N => Self::S,
            Self::S => Self::N,
            Self::W => Self::E,
            Self::E => Self::W,
            Self::Rotate => Self::Rotate,
        }
    }

    /// Whether this handle resizes both axes at once.
    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Nw | Self::Ne | Self::Sw | Self::Se)
    }

    /// Canonical compass bearing of the handle in degrees, N = 0, clockwise.
    #[must_use]
    pub fn bearing_deg(self) -> f64 {
        match self {
            Self::N | Self::Rotate => 0.0,
            Self::Ne => 45.0,
            Self::E => 90.0,
            Self::Se => 135.0,
            Self::S => 180.0,
            Self::Sw => 225.0,
            Self::W => 270.0,
            Self::Nw => 315.0,
        }
    }
}

/// CSS cursor class for a resize handle at some effective angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorClass {
    Ns,
    Nesw,
    Ew,
    Nwse,
}

impl CursorClass {
    /// The CSS cursor keyword for this class.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Ns => "ns-resize",
            Self::Nesw => "nesw-resize",
            Self::Ew => "ew-resize",
            Self::Nwse => "nwse-resize",
        }
    }
}

/// Cursor class for `handle` on a shape rotated by `rotation` radians.
///
/// The handle's compass bearing plus the shape rotation is bucketed into
/// 45°-wide sectors centered on the eight compass points, so cursors track
/// the shape's rotation.
#[must_use]
pub fn resize_cursor(handle: Handle, rotation: f64) -> CursorClass {
    let effective = (handle.bearing_deg() + rotation.to_degrees()).rem_euclid(360.0);
    // Sector 0 is centered on N; each sector spans 45 degrees.
    let sector = (((effective + 22.5) / 45.0).floor() as i64).rem_euclid(8);
    match sector {
        0 | 4 => CursorClass::Ns,
        1 | 5 => CursorClass::Nesw,
        2 | 6 => CursorClass::Ew,
        _ => CursorClass::Nwse,
    }
}

/// World-space positions of all nine handles for `shape` at the given zoom.
///
/// The eight resize handles sit on the corners and edge midpoints of the
/// unrotated box; the rotate handle sits a constant *screen-space* distance
/// above the N handle (so it keeps its apparent size at any zoom). All nine
/// are then rotated by the shape's angle about the box center.
#[must_use]
pub fn handle_positions(shape: &Shape, zoom: f64) -> [(Handle, Point); 9] {
    let bbox = shape.bbox.normalized();
    let center = bbox.center();
    let hw = bbox.w / 2.0;
    let hh = bbox.h / 2.0;
    let rotate_offset = ROTATE_HANDLE_OFFSET_PX / zoom;

    let local = |handle: Handle| -> Point {
        let (dx, dy) = handle.direction();
        let mut p = Point::new(center.x + dx * hw, center.y + dy * hh);
        if handle == Handle::Rotate {
            p.y -= rotate_offset;
        }
        p
    };

    let place = |handle: Handle| (handle, rotate_about(local(handle), center, shape.rotation));

    [
        place(Handle::Nw),
        place(Handle::Ne),
        place(Handle::Sw),
        place(Handle::Se),
        place(Handle::N),
        place(Handle::S),
        place(Handle::W),
        place(Handle::E),
        place(Handle::Rotate),
    ]
}

/// World-space position of a single handle. Convenience over
/// [`handle_positions`] for callers that need just one.
#[must_use]
pub fn handle_position(shape: &Shape, handle: Handle, zoom: f64) -> Point {
    let positions = handle_positions(shape, zoom);
    for (h, p) in positions {
        if h == handle {
            return p;
        }
    }
    // All nine variants are present in the array above.
    positions[0].1
}
