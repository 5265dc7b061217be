#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the loaded image.
///
/// `pan_x` / `pan_y` are in CSS pixels and unconstrained. `zoom` is a scale
/// factor clamped to `[MIN_ZOOM, MAX_ZOOM]` by every mutation. Camera state
/// is view-only: it never enters the undo history.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels, canvas-relative) to world
    /// coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Multiply zoom by `factor`, keeping the point under `center` (screen
    /// coordinates) fixed on screen.
    ///
    /// Returns `false` without touching pan when the clamped zoom equals the
    /// current zoom, so repeated wheel events at a clamp boundary cannot
    /// drift the pan.
    pub fn zoom_at(&mut self, factor: f64, center: Point) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        let ratio = new_zoom / self.zoom;
        self.pan_x = center.x - (center.x - self.pan_x) * ratio;
        self.pan_y = center.y - (center.y - self.pan_y) * ratio;
        self.zoom = new_zoom;
        true
    }

    /// Reset pan and zoom so an image with the given natural size fills the
    /// canvas without cropping.
    pub fn fit_to_screen(&mut self, natural_w: f64, natural_h: f64, canvas_w: f64, canvas_h: f64) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        if natural_w <= 0.0 || natural_h <= 0.0 {
            self.zoom = 1.0;
            return;
        }
        let fit = (canvas_w / natural_w).min(canvas_h / natural_h);
        self.zoom = fit.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Reset to the identity view (zoom 1, no pan).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
