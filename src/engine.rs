//! Top-level engine: pointer/keyboard handlers, commit semantics, and the
//! host-facing action stream.
//!
//! [`EngineCore`] holds all state and logic and has no browser dependency,
//! so the whole gesture machine is testable natively. [`Engine`] wraps it
//! with the canvas element for the WASM host. Handlers return [`Action`]s
//! the host reacts to (redraw, cursor change, open the label editor); the
//! engine never touches the DOM itself.

use std::f64::consts::FRAC_PI_2;

use web_sys::HtmlCanvasElement;

use crate::camera::{Camera, Point};
use crate::consts::{MIN_COMMIT_SIZE_WORLD, MIN_RESIZE_DIM_WORLD, POLY_CLOSE_TOLERANCE_PX, WHEEL_ZOOM_STEP};
use crate::export::{self, ExportLayout, ImportError, ImportSummary};
use crate::geom::{self, BoundingBox, Handle};
use crate::history::History;
use crate::hit::{self, HitPart};
use crate::input::{AspectRatio, Button, InputState, Key, Modifiers, Tool, UiState, WheelDelta};
use crate::store::{Geometry, Shape, ShapeId, ShapeStore, Style};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// State changed in a way that requires a redraw.
    RenderNeeded,
    /// The pointer cursor should change to the given CSS cursor keyword.
    CursorChanged(String),
    /// A new shape wants its label typed; the host opens its editor and
    /// calls [`EngineCore::set_label`] back.
    EditLabelRequested { id: ShapeId },
    /// The crop-selection rectangle changed.
    CropChanged,
}

/// Natural and display dimensions of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub natural_w: f64,
    pub natural_h: f64,
    pub canvas_w: f64,
    pub canvas_h: f64,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub store: ShapeStore,
    pub history: History,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    image: Option<ImageInfo>,
    crop: Option<BoundingBox>,
    cursor: String,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ShapeStore::new(),
            history: History::default(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            image: None,
            crop: None,
            cursor: "default".to_owned(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Image lifecycle ─────────────────────────────────────────

    /// Load a new image: the store, history, camera, and crop all reset.
    pub fn load_image(&mut self, info: ImageInfo) {
        self.image = Some(info);
        self.reset_document();
    }

    /// Unload the current image; annotation state resets with it.
    pub fn unload_image(&mut self) {
        self.image = None;
        self.reset_document();
    }

    fn reset_document(&mut self) {
        self.store.replace_all(Vec::new());
        self.store.clear_selection();
        self.history.reset(Vec::new());
        self.camera.reset();
        self.crop = None;
        self.input = InputState::Idle;
        self.ui.tool = Tool::Select;
    }

    /// Fit the loaded image to the canvas. No-op without an image.
    pub fn fit_to_screen(&mut self) {
        if let Some(img) = self.image {
            self.camera.fit_to_screen(img.natural_w, img.natural_h, img.canvas_w, img.canvas_h);
        }
    }

    // ── Tools and edits ─────────────────────────────────────────

    /// Activate a tool. Any other tool deactivates, and an in-progress
    /// draw or polygon path is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        if matches!(self.input, InputState::DrawingShape { .. } | InputState::BuildingPolygon { .. }) {
            self.input = InputState::Idle;
        }
        self.ui.tool = tool;
    }

    /// Constrain the crop tool to an aspect ratio, or free-form with `None`.
    pub fn set_crop_aspect(&mut self, aspect: Option<AspectRatio>) {
        self.ui.crop_aspect = aspect;
    }

    pub fn clear_crop(&mut self) {
        self.crop = None;
    }

    /// Set or clear a shape's label. Records one history snapshot when the
    /// label actually changed; returns `false` for unknown ids.
    pub fn set_label(&mut self, id: ShapeId, label: Option<String>) -> bool {
        let Some(shape) = self.store.shape_mut(id) else {
            return false;
        };
        if shape.label != label {
            shape.label = label;
            self.commit();
        }
        true
    }

    /// Delete every selected shape. One history snapshot for the lot;
    /// `false` if nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let ids: Vec<ShapeId> = self.store.selection().to_vec();
        if ids.is_empty() {
            return false;
        }
        for id in ids {
            self.store.delete(id);
        }
        self.commit();
        true
    }

    /// Duplicate a shape, select the copy, and record history. `None` if
    /// the id is unknown.
    pub fn duplicate(&mut self, id: ShapeId) -> Option<ShapeId> {
        let new_id = self.store.duplicate(id)?;
        self.store.select_only(new_id);
        self.commit();
        Some(new_id)
    }

    // ── Style ───────────────────────────────────────────────────

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.store.style_mut().set_color(color);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.store.style_mut().set_font_size(size);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.store.style_mut().set_opacity(opacity);
    }

    pub fn reset_style(&mut self) {
        self.store.style_mut().reset();
    }

    // ── History ─────────────────────────────────────────────────

    fn commit(&mut self) {
        let snapshot = self.store.snapshot();
        self.history.push(snapshot);
    }

    /// Step back one undo point. `false` when already at the floor.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Step forward one redo point. `false` when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Rewrite the store from a snapshot with history capture suppressed.
    fn restore(&mut self, snapshot: Vec<Shape>) {
        self.history.begin_restore();
        self.store.replace_all(snapshot);
        self.history.end_restore();
        self.input = InputState::Idle;
    }

    // ── Import / export ─────────────────────────────────────────

    /// Replace the annotation set from wire-format JSON. The store is
    /// untouched on error; on success the import is an undoable action.
    ///
    /// # Errors
    ///
    /// Propagates [`ImportError`] from [`export::from_json`].
    pub fn import_annotations(&mut self, json: &str) -> Result<ImportSummary, ImportError> {
        let (shapes, summary) = export::from_json(json)?;
        self.store.replace_all(shapes);
        self.commit();
        Ok(summary)
    }

    /// Serialize the current annotation set to wire-format JSON.
    #[must_use]
    pub fn export_annotations(&self) -> String {
        export::to_json(self.store.shapes())
    }

    /// Export surface layout for the loaded image and current crop. `None`
    /// without an image.
    #[must_use]
    pub fn export_layout(&self) -> Option<ExportLayout> {
        let img = self.image?;
        Some(ExportLayout::compute(
            img.natural_w,
            img.natural_h,
            img.canvas_w,
            img.canvas_h,
            self.crop,
        ))
    }

    /// Layout plus the re-parameterized shape list for high-resolution
    /// compositing. Reads a deep snapshot, so the host may hand the result
    /// to a worker without racing live mutations.
    #[must_use]
    pub fn export_shapes(&self) -> Option<(ExportLayout, Vec<Shape>)> {
        let layout = self.export_layout()?;
        let snapshot = self.store.snapshot();
        let shapes = layout.composite(&snapshot);
        Some((layout, shapes))
    }

    // ── Queries ─────────────────────────────────────────────────

    #[must_use]
    pub fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    #[must_use]
    pub fn crop(&self) -> Option<BoundingBox> {
        self.crop
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        self.store.style()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Handle geometry for a shape, for the host renderer. Must be the
    /// renderer's only source of handle positions.
    #[must_use]
    pub fn handles_for(&self, id: ShapeId) -> Option<[(Handle, Point); 9]> {
        self.store
            .shape(id)
            .map(|shape| geom::handle_positions(shape, self.camera.zoom))
    }

    // ── Pointer events ──────────────────────────────────────────

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen);
        let pan_trigger = button == Button::Middle || self.ui.space_held;

        if let InputState::BuildingPolygon { .. } = self.input {
            if pan_trigger || button != Button::Primary {
                return Vec::new();
            }
            return self.polygon_click(world);
        }
        if !matches!(self.input, InputState::Idle) {
            return Vec::new();
        }

        if pan_trigger {
            self.input = InputState::Panning { last_screen: screen };
            return vec![self.emit_cursor("grabbing"), Action::RenderNeeded];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        if self.ui.tool == Tool::Polygon {
            self.store.clear_selection();
            self.input = InputState::BuildingPolygon { points: vec![world], preview: None };
            return vec![Action::RenderNeeded];
        }

        if let Some(actions) = self.grab_handle(world) {
            return actions;
        }

        if let Some(id) = hit::topmost_at(world, self.store.shapes()) {
            if mods.shift {
                self.store.toggle_selected(id);
            } else if !self.store.is_selected(id) {
                self.store.select_only(id);
            }
            self.input = InputState::Dragging { last_world: world, moved: false };
            return vec![Action::RenderNeeded];
        }

        self.store.clear_selection();
        if self.ui.tool.is_box_draw() {
            self.input = InputState::DrawingShape {
                anchor_world: world,
                candidate: BoundingBox::new(world.x, world.y, 0.0, 0.0),
            };
        }
        vec![Action::RenderNeeded]
    }

    /// Rotate/resize handle grab on the sole selected shape, if the click
    /// lands on one.
    fn grab_handle(&mut self, world: Point) -> Option<Vec<Action>> {
        let id = self.store.sole_selection()?;
        let shape = self.store.shape(id)?;
        match hit::hit_handle(world, shape, self.camera.zoom)? {
            HitPart::RotateHandle => {
                self.input = InputState::Rotating {
                    id,
                    center: shape.center(),
                    last_angle: shape.rotation,
                    moved: false,
                };
                Some(vec![self.emit_cursor("grabbing"), Action::RenderNeeded])
            }
            HitPart::ResizeHandle(handle) => {
                let bbox = shape.bbox.normalized();
                let orig_points = shape.points().map(<[Point]>::to_vec).unwrap_or_default();
                self.input = InputState::Resizing {
                    id,
                    handle,
                    pivot: geom::handle_position(shape, handle.opposite(), self.camera.zoom),
                    orig_w: bbox.w,
                    orig_h: bbox.h,
                    orig_points,
                    moved: false,
                };
                Some(vec![Action::RenderNeeded])
            }
            HitPart::Body => None,
        }
    }

    /// A primary click while building a polygon: close the path if it lands
    /// on the first point with enough vertices down, otherwise extend it.
    fn polygon_click(&mut self, world: Point) -> Vec<Action> {
        let close_tol = POLY_CLOSE_TOLERANCE_PX / self.camera.zoom;
        let InputState::BuildingPolygon { points, .. } = &mut self.input else {
            return Vec::new();
        };

        let closes = points.len() >= 3
            && points
                .first()
                .is_some_and(|first| geom::point_in_circle(world, *first, close_tol));
        if !closes {
            points.push(world);
            return vec![Action::RenderNeeded];
        }

        let path = std::mem::take(points);
        self.input = InputState::Idle;
        self.ui.tool = Tool::Select;
        let id = self.store.add_polygon(path);
        self.store.select_only(id);
        self.commit();
        vec![Action::RenderNeeded, Action::EditLabelRequested { id }]
    }

    pub fn on_pointer_move(&mut self, screen: Point, mods: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen);

        if matches!(self.input, InputState::Idle) {
            return self.hover(world);
        }

        match &mut self.input {
            InputState::Panning { last_screen } => {
                self.camera.pan_x += screen.x - last_screen.x;
                self.camera.pan_y += screen.y - last_screen.y;
                *last_screen = screen;
            }
            InputState::Dragging { last_world, moved } => {
                let dx = world.x - last_world.x;
                let dy = world.y - last_world.y;
                if dx != 0.0 || dy != 0.0 {
                    let ids: Vec<ShapeId> = self.store.selection().to_vec();
                    for id in ids {
                        if let Some(shape) = self.store.shape_mut(id) {
                            shape.translate(dx, dy);
                        }
                    }
                    *moved = true;
                }
                *last_world = world;
            }
            InputState::Resizing { id, handle, pivot, orig_w, orig_h, orig_points, moved } => {
                if let Some(shape) = self.store.shape_mut(*id) {
                    apply_resize(shape, *handle, *pivot, *orig_w, *orig_h, orig_points, world, mods.shift);
                    *moved = true;
                }
            }
            InputState::Rotating { id, center, last_angle, moved } => {
                // "Up" maps to angle zero.
                let angle = (world.y - center.y).atan2(world.x - center.x) + FRAC_PI_2;
                let delta = angle - *last_angle;
                if let Some(shape) = self.store.shape_mut(*id) {
                    shape.rotation = angle;
                    if let Geometry::Polygon { points } = &mut shape.geometry {
                        for p in points {
                            *p = geom::rotate_about(*p, *center, delta);
                        }
                    }
                }
                *last_angle = angle;
                *moved = true;
            }
            InputState::DrawingShape { anchor_world, candidate } => {
                *candidate =
                    candidate_rect(*anchor_world, world, self.ui.tool, mods.shift, self.ui.crop_aspect);
            }
            InputState::BuildingPolygon { preview, .. } => {
                *preview = Some(world);
            }
            InputState::Idle => {}
        }
        vec![Action::RenderNeeded]
    }

    /// Idle pointer movement: pick the cursor for whatever is under it.
    fn hover(&mut self, world: Point) -> Vec<Action> {
        let mut cursor = "default";
        if let Some(id) = self.store.sole_selection() {
            if let Some(shape) = self.store.shape(id) {
                match hit::hit_handle(world, shape, self.camera.zoom) {
                    Some(HitPart::RotateHandle) => cursor = "grab",
                    Some(HitPart::ResizeHandle(handle)) => {
                        cursor = geom::resize_cursor(handle, shape.rotation).css();
                    }
                    Some(HitPart::Body) | None => {}
                }
            }
        }
        if cursor == "default" && hit::topmost_at(world, self.store.shapes()).is_some() {
            cursor = "move";
        }
        let action = self.emit_cursor(cursor);
        if matches!(action, Action::CursorChanged(_)) { vec![action] } else { Vec::new() }
    }

    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button, _mods: Modifiers) -> Vec<Action> {
        // A polygon path survives pointer-up; it grows click by click.
        if matches!(self.input, InputState::BuildingPolygon { .. }) {
            return Vec::new();
        }

        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::BuildingPolygon { .. } => Vec::new(),
            InputState::Panning { .. } => {
                vec![self.emit_cursor("default"), Action::RenderNeeded]
            }
            InputState::Dragging { moved, .. }
            | InputState::Resizing { moved, .. }
            | InputState::Rotating { moved, .. } => {
                self.commit_transform(moved);
                vec![Action::RenderNeeded]
            }
            InputState::DrawingShape { candidate, .. } => self.commit_draw(candidate),
        }
    }

    /// Transform commit: polygon bounding boxes follow their points again,
    /// negative extents normalize, and the whole gesture records exactly
    /// one history snapshot — none for a motionless click.
    fn commit_transform(&mut self, moved: bool) {
        let ids: Vec<ShapeId> = self.store.selection().to_vec();
        for id in ids {
            if let Some(shape) = self.store.shape_mut(id) {
                shape.settle();
            }
        }
        if moved {
            self.commit();
        }
    }

    /// Draw commit: materialize the candidate if it clears the minimum
    /// size, otherwise treat the gesture as an accidental click. Either
    /// way the draw tool deactivates.
    fn commit_draw(&mut self, candidate: BoundingBox) -> Vec<Action> {
        let tool = self.ui.tool;
        self.ui.tool = Tool::Select;

        let candidate = candidate.normalized();
        if candidate.w < MIN_COMMIT_SIZE_WORLD || candidate.h < MIN_COMMIT_SIZE_WORLD {
            return vec![Action::RenderNeeded];
        }

        match tool {
            Tool::Rect => {
                let id = self.store.add_rect(candidate);
                self.store.select_only(id);
                self.commit();
                vec![Action::RenderNeeded]
            }
            Tool::Text => {
                let id = self.store.add_text(candidate);
                self.store.select_only(id);
                self.commit();
                vec![Action::RenderNeeded, Action::EditLabelRequested { id }]
            }
            Tool::Crop => {
                // Crop selection lives beside the annotations, outside the
                // store and outside history.
                self.crop = Some(candidate);
                vec![Action::RenderNeeded, Action::CropChanged]
            }
            Tool::Select | Tool::Polygon => vec![Action::RenderNeeded],
        }
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, _mods: Modifiers) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let factor = if delta.dy < 0.0 { WHEEL_ZOOM_STEP } else { 1.0 / WHEEL_ZOOM_STEP };
        if self.camera.zoom_at(factor, screen) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // ── Keyboard events ─────────────────────────────────────────

    pub fn on_key_down(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            " " => {
                self.ui.space_held = true;
                Vec::new()
            }
            "Escape" => self.cancel_gesture(),
            "Delete" | "Backspace" => {
                if self.delete_selection() {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            "z" | "Z" if mods.ctrl || mods.meta => {
                let changed = if mods.shift { self.redo() } else { self.undo() };
                if changed { vec![Action::RenderNeeded] } else { Vec::new() }
            }
            "y" | "Y" if mods.ctrl || mods.meta => {
                if self.redo() {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    pub fn on_key_up(&mut self, key: &Key, _mods: Modifiers) -> Vec<Action> {
        if key.0 == " " {
            self.ui.space_held = false;
        }
        Vec::new()
    }

    /// Explicit cancel: discard an in-progress polygon path or draw
    /// candidate without committing; neither records history.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        match self.input {
            InputState::BuildingPolygon { .. } => {
                self.input = InputState::Idle;
                vec![Action::RenderNeeded]
            }
            InputState::DrawingShape { .. } => {
                self.input = InputState::Idle;
                self.ui.tool = Tool::Select;
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    fn emit_cursor(&mut self, cursor: &str) -> Action {
        if self.cursor == cursor {
            return Action::RenderNeeded;
        }
        self.cursor = cursor.to_owned();
        Action::CursorChanged(cursor.to_owned())
    }
}

/// Pivot-anchored resize: reflect the pointer into the shape's unrotated
/// local frame relative to the fixed opposite-handle pivot, derive the new
/// extent per axis the handle controls, and rotate the result back out.
/// Polygon vertices rescale from their gesture-start positions — an
/// anisotropic scale about the pivot, not a rigid transform.
#[allow(clippy::too_many_arguments)]
fn apply_resize(
    shape: &mut Shape,
    handle: Handle,
    pivot: Point,
    orig_w: f64,
    orig_h: f64,
    orig_points: &[Point],
    world: Point,
    keep_aspect: bool,
) {
    let theta = shape.rotation;
    let local = geom::rotate_about(world, pivot, -theta);
    let vx = local.x - pivot.x;
    let vy = local.y - pivot.y;
    let (dx, dy) = handle.direction();

    let mut new_w = if dx == 0.0 { orig_w } else { (vx * dx).max(MIN_RESIZE_DIM_WORLD) };
    let mut new_h = if dy == 0.0 { orig_h } else { (vy * dy).max(MIN_RESIZE_DIM_WORLD) };

    if keep_aspect && handle.is_corner() && orig_w > 0.0 && orig_h > 0.0 {
        // Dominant axis is whichever grew more, relatively; the other
        // follows the original aspect ratio.
        if new_w / orig_w >= new_h / orig_h {
            new_h = (new_w * orig_h / orig_w).max(MIN_RESIZE_DIM_WORLD);
        } else {
            new_w = (new_h * orig_w / orig_h).max(MIN_RESIZE_DIM_WORLD);
        }
    }

    let offset = Point::new(pivot.x + dx * new_w / 2.0, pivot.y + dy * new_h / 2.0);
    let center = geom::rotate_about(offset, pivot, theta);
    shape.bbox = BoundingBox::new(center.x - new_w / 2.0, center.y - new_h / 2.0, new_w, new_h);

    if let Geometry::Polygon { points } = &mut shape.geometry {
        let sx = if orig_w > 0.0 { new_w / orig_w } else { 1.0 };
        let sy = if orig_h > 0.0 { new_h / orig_h } else { 1.0 };
        for (p, orig) in points.iter_mut().zip(orig_points) {
            let local = geom::rotate_about(*orig, pivot, -theta);
            let scaled = Point::new(
                pivot.x + (local.x - pivot.x) * sx,
                pivot.y + (local.y - pivot.y) * sy,
            );
            *p = geom::rotate_about(scaled, pivot, theta);
        }
    }
}

/// Candidate box from the draw anchor to the live pointer, with the active
/// constraint applied: the crop tool snaps to its aspect ratio by shrinking
/// whichever axis overflows it; shift constrains other draws to a square.
/// The anchor corner stays fixed.
fn candidate_rect(
    anchor: Point,
    current: Point,
    tool: Tool,
    shift: bool,
    aspect: Option<AspectRatio>,
) -> BoundingBox {
    let mut w = (current.x - anchor.x).abs();
    let mut h = (current.y - anchor.y).abs();

    if tool == Tool::Crop {
        if let Some(ratio) = aspect {
            if ratio.w > 0.0 && ratio.h > 0.0 && w > 0.0 && h > 0.0 {
                let target = ratio.w / ratio.h;
                if w / h > target {
                    w = h * target;
                } else {
                    h = w / target;
                }
            }
        }
    } else if shift {
        let side = w.min(h);
        w = side;
        h = side;
    }

    let x = if current.x >= anchor.x { anchor.x } else { anchor.x - w };
    let y = if current.y >= anchor.y { anchor.y } else { anchor.y - h };
    BoundingBox::new(x, y, w, h)
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// The canvas element this engine is bound to.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Current canvas backing-store size in device pixels.
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    // ── Delegated input events ──────────────────────────────────

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen, button, mods)
    }

    pub fn on_pointer_move(&mut self, screen: Point, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen, mods)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen, button, mods)
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, mods: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen, delta, mods)
    }

    pub fn on_key_down(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, mods)
    }

    pub fn on_key_up(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        self.core.on_key_up(key, mods)
    }

    // ── Delegated operations ────────────────────────────────────

    pub fn load_image(&mut self, info: ImageInfo) {
        self.core.load_image(info);
    }

    pub fn unload_image(&mut self) {
        self.core.unload_image();
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_label(&mut self, id: ShapeId, label: Option<String>) -> bool {
        self.core.set_label(id, label)
    }

    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.core.redo()
    }

    /// # Errors
    ///
    /// Propagates [`ImportError`] from the core.
    pub fn import_annotations(&mut self, json: &str) -> Result<ImportSummary, ImportError> {
        self.core.import_annotations(json)
    }

    #[must_use]
    pub fn export_annotations(&self) -> String {
        self.core.export_annotations()
    }
}
