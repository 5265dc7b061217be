//! Export: natural-resolution compositing layout and the JSON wire format.
//!
//! The compositor never renders pixels itself — it re-parameterizes the
//! shape list so the host can draw it onto a surface at the image's natural
//! resolution. Output must be pixel-equivalent to the interactive canvas at
//! zoom 1 within the crop: same geometry kernel, different scale and origin.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};
use tracing::warn;
use wasm_bindgen::JsValue;

use crate::camera::Point;
use crate::geom::BoundingBox;
use crate::store::{Geometry, Shape, ShapeId};

/// Wire value standing in for an unset label.
pub const UNSET_LABEL: &str = "Not defined";

/// Scale factor from world (canvas-resolution) coordinates to export
/// (natural-resolution) coordinates.
///
/// The two axis ratios are averaged rather than taken exactly: aspect-locked
/// canvas sizing leaves them apart by floating-point noise, and averaging
/// absorbs it symmetrically.
#[must_use]
pub fn export_scale(natural_w: f64, natural_h: f64, canvas_w: f64, canvas_h: f64) -> f64 {
    if canvas_w <= 0.0 || canvas_h <= 0.0 {
        return 1.0;
    }
    (natural_w / canvas_w + natural_h / canvas_h) / 2.0
}

/// Resolved export surface: scale plus crop origin/size in integer export
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportLayout {
    pub scale: f64,
    /// Crop origin in export pixels; subtracted from every scaled
    /// coordinate.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Surface size in export pixels, at least 1×1.
    pub width_px: u32,
    pub height_px: u32,
}

impl ExportLayout {
    /// Layout for the given image, canvas, and optional crop rectangle
    /// (world coordinates). Without a crop the whole canvas area exports.
    #[must_use]
    pub fn compute(
        natural_w: f64,
        natural_h: f64,
        canvas_w: f64,
        canvas_h: f64,
        crop: Option<BoundingBox>,
    ) -> Self {
        let scale = export_scale(natural_w, natural_h, canvas_w, canvas_h);
        let crop = crop
            .map(|c| c.normalized())
            .unwrap_or_else(|| BoundingBox::new(0.0, 0.0, canvas_w, canvas_h));
        let origin_x = (crop.x * scale).round();
        let origin_y = (crop.y * scale).round();
        let width_px = (crop.w * scale).round().max(1.0) as u32;
        let height_px = (crop.h * scale).round().max(1.0) as u32;
        Self { scale, origin_x, origin_y, width_px, height_px }
    }

    /// Map a world-space point onto the export surface.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale - self.origin_x, p.y * self.scale - self.origin_y)
    }

    /// Font size scaled to the export surface.
    #[must_use]
    pub fn map_font_size(&self, font_size: f64) -> f64 {
        font_size * self.scale
    }

    /// Re-parameterize the visible shapes for this surface: every
    /// coordinate scaled and crop-offset, polygon bounding boxes recomputed
    /// post-scale.
    #[must_use]
    pub fn composite(&self, shapes: &[Shape]) -> Vec<Shape> {
        shapes
            .iter()
            .filter(|s| s.visible)
            .map(|shape| {
                let mut out = shape.clone();
                match &mut out.geometry {
                    Geometry::Rect => {
                        let tl = self.map_point(Point::new(shape.bbox.x, shape.bbox.y));
                        out.bbox = BoundingBox::new(
                            tl.x,
                            tl.y,
                            shape.bbox.w * self.scale,
                            shape.bbox.h * self.scale,
                        );
                    }
                    Geometry::Polygon { points } => {
                        for p in points.iter_mut() {
                            *p = self.map_point(*p);
                        }
                        out.bbox = BoundingBox::of_points(points);
                    }
                }
                out
            })
            .collect()
    }
}

// ── JSON wire format ────────────────────────────────────────────

/// One shape on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Rotation in radians.
    pub angle: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointRecord>>,
}

/// One polygon vertex on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

/// Optional top-level wrapper some producers emit around the annotation
/// array.
#[derive(Debug, Deserialize)]
struct AnnotationDocument {
    annotations: Vec<serde_json::Value>,
    #[serde(rename = "imageData")]
    image_data: Option<serde_json::Value>,
}

/// Import failures. The store is left untouched when any of these occur.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("annotation JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("first annotation is missing a numeric `x` coordinate")]
    MissingCoordinates,
    #[error("unknown shape type {0:?}")]
    UnknownShapeType(String),
}

// Import failures cross the host boundary as plain error strings.
impl From<ImportError> for JsValue {
    fn from(err: ImportError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// What an import found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub shapes: usize,
    /// A bundled `imageData` blob was present and ignored.
    pub image_data_ignored: bool,
}

/// Serialize shapes to the wire format (a bare JSON array).
#[must_use]
pub fn to_json(shapes: &[Shape]) -> String {
    let records: Vec<ShapeRecord> = shapes.iter().map(to_record).collect();
    // Vec<ShapeRecord> serialization cannot fail; fall back to the empty
    // array rather than propagating an impossible error.
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_owned())
}

fn to_record(shape: &Shape) -> ShapeRecord {
    let (kind, points) = match &shape.geometry {
        Geometry::Rect => ("rect", None),
        Geometry::Polygon { points } => (
            "poly",
            Some(points.iter().map(|p| PointRecord { x: p.x, y: p.y }).collect()),
        ),
    };
    ShapeRecord {
        id: shape.id,
        kind: kind.to_owned(),
        x: shape.bbox.x,
        y: shape.bbox.y,
        w: shape.bbox.w,
        h: shape.bbox.h,
        angle: shape.rotation,
        text: shape.label.clone().unwrap_or_else(|| UNSET_LABEL.to_owned()),
        points,
    }
}

/// Parse the wire format: either a bare array of shape records or an
/// `{annotations, imageData?}` wrapper. A bundled `imageData` payload is
/// ignored with a warning; annotations are all-or-nothing.
///
/// # Errors
///
/// Returns [`ImportError`] on malformed JSON, a first element without a
/// numeric `x`, or an unrecognized shape type. Nothing is partially applied.
pub fn from_json(json: &str) -> Result<(Vec<Shape>, ImportSummary), ImportError> {
    let (raw, image_data_ignored) = match serde_json::from_str::<AnnotationDocument>(json) {
        Ok(doc) => {
            if doc.image_data.is_some() {
                warn!("import payload bundles imageData; only annotations are used");
            }
            (doc.annotations, doc.image_data.is_some())
        }
        Err(_) => (serde_json::from_str::<Vec<serde_json::Value>>(json)?, false),
    };

    if let Some(first) = raw.first() {
        if first.get("x").and_then(serde_json::Value::as_f64).is_none() {
            return Err(ImportError::MissingCoordinates);
        }
    }

    let mut shapes = Vec::with_capacity(raw.len());
    for value in raw {
        let record: ShapeRecord = serde_json::from_value(value)?;
        shapes.push(from_record(record)?);
    }
    let summary = ImportSummary { shapes: shapes.len(), image_data_ignored };
    Ok((shapes, summary))
}

fn from_record(record: ShapeRecord) -> Result<Shape, ImportError> {
    let geometry = match record.kind.as_str() {
        "rect" => Geometry::Rect,
        "poly" => Geometry::Polygon {
            points: record
                .points
                .unwrap_or_default()
                .iter()
                .map(|p| Point::new(p.x, p.y))
                .collect(),
        },
        other => return Err(ImportError::UnknownShapeType(other.to_owned())),
    };
    let label = if record.text.is_empty() || record.text == UNSET_LABEL {
        None
    } else {
        Some(record.text)
    };
    let mut shape = Shape {
        id: record.id,
        geometry,
        bbox: BoundingBox::new(record.x, record.y, record.w, record.h),
        rotation: record.angle,
        label,
        text_only: false,
        visible: true,
    };
    // Imported polygons re-establish the at-rest bbox invariant regardless
    // of what the payload claimed.
    shape.settle();
    Ok(shape)
}
