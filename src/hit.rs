//! Hit-testing pointer positions against shape bodies and handles.
//!
//! All geometry comes from [`crate::geom`]; this module just applies the
//! spec'd priorities (rotate handle before resize handles, topmost body
//! last) and the screen-space tolerances, converted to world units at the
//! current zoom.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{HANDLE_HIT_RADIUS_PX, ROTATE_HIT_RADIUS_PX};
use crate::geom::{self, Handle};
use crate::store::{Shape, ShapeId};

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(Handle),
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Test `world_pt` against the handles of a single (selected) shape.
///
/// The rotate handle is checked first with its own, slightly larger
/// tolerance. Text-only shapes expose no resize handles, only rotation.
#[must_use]
pub fn hit_handle(world_pt: Point, shape: &Shape, zoom: f64) -> Option<HitPart> {
    let positions = geom::handle_positions(shape, zoom);
    let rotate_tol = ROTATE_HIT_RADIUS_PX / zoom;
    let resize_tol = HANDLE_HIT_RADIUS_PX / zoom;

    for (handle, pos) in positions {
        if handle == Handle::Rotate && geom::point_in_circle(world_pt, pos, rotate_tol) {
            return Some(HitPart::RotateHandle);
        }
    }
    if shape.text_only {
        return None;
    }
    for (handle, pos) in positions {
        if handle != Handle::Rotate && geom::point_in_circle(world_pt, pos, resize_tol) {
            return Some(HitPart::ResizeHandle(handle));
        }
    }
    None
}

/// Topmost visible shape containing `world_pt`, iterating the z-order
/// back-to-front.
#[must_use]
pub fn topmost_at(world_pt: Point, shapes: &[Shape]) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|s| s.visible && geom::point_in_shape(world_pt, s))
        .map(|s| s.id)
}

/// Full hit test against the store: handles of the sole selected shape
/// first, then shape bodies top-down.
#[must_use]
pub fn hit_test(
    world_pt: Point,
    shapes: &[Shape],
    selected: Option<ShapeId>,
    zoom: f64,
) -> Option<Hit> {
    if let Some(id) = selected {
        if let Some(shape) = shapes.iter().find(|s| s.id == id) {
            if let Some(part) = hit_handle(world_pt, shape, zoom) {
                return Some(Hit { shape_id: id, part });
            }
        }
    }
    topmost_at(world_pt, shapes).map(|shape_id| Hit { shape_id, part: HitPart::Body })
}
