//! Canvas snapshot and selection types.

use serde::{Deserialize, Serialize};

use crate::geometry::CanvasBounds;
use crate::object::DrawingObject;

/// Immutable snapshot of the drawing surface supplied with each request.
///
/// Object order is z-order and is semantically relevant; the pipeline never
/// reorders or mutates the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// Canvas dimensions.
    pub bounds: CanvasBounds,
    /// Drawing objects in z-order.
    #[serde(default)]
    pub objects: Vec<DrawingObject>,
}

impl CanvasState {
    /// Create an empty canvas with the given bounds.
    #[must_use]
    pub const fn new(bounds: CanvasBounds) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
        }
    }

    /// Create a canvas with objects already on it.
    #[must_use]
    pub fn with_objects(bounds: CanvasBounds, objects: Vec<DrawingObject>) -> Self {
        Self { bounds, objects }
    }

    /// Number of objects on the canvas.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

/// Rectangular selection used by recognition mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Selection width.
    pub width: f64,
    /// Selection height.
    pub height: f64,
}

impl SelectionBox {
    /// Create a selection box.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
