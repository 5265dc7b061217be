//! Annotation store: the canonical shape list, selection set, id allocation,
//! and the process-wide render style.
//!
//! The store exclusively owns every live [`Shape`]. Consumers (renderer,
//! export) read through accessors each frame and never retain references
//! across a mutation. Undo/redo restores whole-list snapshots through
//! [`ShapeStore::replace_all`], which also re-seeds the id allocator so ids
//! never collide with restored or imported data.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::camera::Point;
use crate::consts::{
    DEFAULT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_OPACITY, DUPLICATE_OFFSET_WORLD, FONT_SIZE_MAX,
    FONT_SIZE_MIN,
};
use crate::geom::BoundingBox;

/// Unique identifier for a shape. Monotonically assigned, never reused
/// within a session.
pub type ShapeId = u64;

/// Shape-specific geometry. Rectangles *are* their bounding box; polygons
/// carry absolute world-space vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rect,
    Polygon { points: Vec<Point> },
}

/// A single annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    /// Top-left-based bounding box in world coordinates. For polygons this
    /// must equal [`BoundingBox::of_points`] over `points` at rest; it may
    /// go transiently stale during an in-progress transform.
    pub bbox: BoundingBox,
    /// Rotation in radians about the bounding-box center.
    pub rotation: f64,
    /// Label text. `None` means unset — the renderer draws nothing.
    pub label: Option<String>,
    /// Suppresses the outline; the shape offers only rotation and a dashed
    /// frame affordance.
    pub text_only: bool,
    pub visible: bool,
}

impl Shape {
    #[must_use]
    pub fn center(&self) -> Point {
        self.bbox.normalized().center()
    }

    #[must_use]
    pub fn is_polygon(&self) -> bool {
        matches!(self.geometry, Geometry::Polygon { .. })
    }

    /// Polygon vertices, if any.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match &self.geometry {
            Geometry::Rect => None,
            Geometry::Polygon { points } => Some(points),
        }
    }

    /// Move the whole shape, bounding box and vertices alike.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.bbox = self.bbox.translated(dx, dy);
        if let Geometry::Polygon { points } = &mut self.geometry {
            for p in points {
                p.x += dx;
                p.y += dy;
            }
        }
    }

    /// Re-establish the at-rest invariant: polygon bounding boxes follow
    /// their vertices, and negative extents fold positive. Called on every
    /// transform commit.
    pub fn settle(&mut self) {
        if let Geometry::Polygon { points } = &self.geometry {
            self.bbox = BoundingBox::of_points(points);
        }
        self.bbox = self.bbox.normalized();
    }
}

/// Process-wide render style, applied uniformly to all shapes at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    color: String,
    font_size: f64,
    opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl Style {
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Clamped to `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// In-memory store of annotation shapes.
///
/// The list order is the z-order: index 0 draws first (bottom), the last
/// element draws on top. Hit-testing iterates back-to-front.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    selection: Vec<ShapeId>,
    next_id: ShapeId,
    style: Style,
}

impl ShapeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── Shape lifecycle ─────────────────────────────────────────

    /// Append a new rectangle. Does not record history; commit timing is the
    /// caller's call.
    pub fn add_rect(&mut self, bbox: BoundingBox) -> ShapeId {
        self.add_box_shape(bbox, false)
    }

    /// Append a new text-only shape (a rectangle frame that renders no
    /// outline).
    pub fn add_text(&mut self, bbox: BoundingBox) -> ShapeId {
        self.add_box_shape(bbox, true)
    }

    fn add_box_shape(&mut self, bbox: BoundingBox, text_only: bool) -> ShapeId {
        let id = self.alloc_id();
        self.shapes.push(Shape {
            id,
            geometry: Geometry::Rect,
            bbox: bbox.normalized(),
            rotation: 0.0,
            label: None,
            text_only,
            visible: true,
        });
        self.prune_selection();
        id
    }

    /// Append a new polygon; its bounding box is computed from the points.
    pub fn add_polygon(&mut self, points: Vec<Point>) -> ShapeId {
        let id = self.alloc_id();
        let bbox = BoundingBox::of_points(&points);
        self.shapes.push(Shape {
            id,
            geometry: Geometry::Polygon { points },
            bbox,
            rotation: 0.0,
            label: None,
            text_only: false,
            visible: true,
        });
        self.prune_selection();
        id
    }

    /// Deep-clone a shape under a fresh id, offset by a fixed small delta on
    /// both axes so the copy is visible next to the original. Returns `None`
    /// if the id is unknown.
    pub fn duplicate(&mut self, id: ShapeId) -> Option<ShapeId> {
        let index = self.index_of(id)?;
        let mut copy = self.shapes[index].clone();
        copy.id = self.alloc_id();
        copy.translate(DUPLICATE_OFFSET_WORLD, DUPLICATE_OFFSET_WORLD);
        let new_id = copy.id;
        self.shapes.push(copy);
        self.prune_selection();
        Some(new_id)
    }

    /// Remove a shape by id. No-op returning `false` if absent.
    pub fn delete(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.shapes.remove(index);
        self.prune_selection();
        true
    }

    /// Bulk-set the shape list (undo/redo restore and import both land
    /// here). Re-seeds the id allocator to `max(id) + 1` so ids never
    /// collide with restored data, even if it used ids higher than any
    /// allocated locally.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.next_id = shapes.iter().map(|s| s.id + 1).max().unwrap_or(0);
        self.shapes = shapes;
        self.prune_selection();
    }

    /// Deep copy of the shape list — the history element and export payload.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    // ── Lookups ─────────────────────────────────────────────────

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Toggle a shape's visibility. Returns `false` if the id is unknown.
    pub fn set_visible(&mut self, id: ShapeId, visible: bool) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Move a shape to the top of the z-order. No-op if absent.
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if let Some(index) = self.index_of(id) {
            let shape = self.shapes.remove(index);
            self.shapes.push(shape);
        }
    }

    // ── Selection ───────────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> &[ShapeId] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// The selected shape when exactly one is selected.
    #[must_use]
    pub fn sole_selection(&self) -> Option<ShapeId> {
        match self.selection.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Replace the selection with a single id. Unknown ids clear it.
    pub fn select_only(&mut self, id: ShapeId) {
        self.selection.clear();
        if self.index_of(id).is_some() {
            self.selection.push(id);
        }
    }

    /// Add or remove an id from the selection (multi-select modifier).
    pub fn toggle_selected(&mut self, id: ShapeId) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else if self.index_of(id).is_some() {
            self.selection.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop selected ids that no longer resolve to a live shape. Invoked by
    /// every mutating operation.
    fn prune_selection(&mut self) {
        let shapes = &self.shapes;
        self.selection.retain(|id| shapes.iter().any(|s| s.id == *id));
    }

    // ── Style ───────────────────────────────────────────────────

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}
