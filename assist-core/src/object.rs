//! Drawing objects and the rendering metadata attached by post-processing.
//!
//! Objects use the canvas wire naming (`lineWidth`, `pathData`, ...). Style
//! transfer replies may also contain raster ("image") objects that carry
//! placement fields at the top level instead of a vector path; those fields
//! are modeled as optional so a single type covers both shapes of reply.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::brush::BrushType;
use crate::geometry::{BBox, PathData};

/// How the renderer should treat an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingType {
    /// Vector stroke rendered with a brush.
    Stroke,
    /// Raster image placed on the canvas.
    Image,
    /// Stamp element placed from raster data.
    Stamp,
}

/// Raster placement captured from an image-like object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampData {
    /// Data URL of the raster content.
    #[serde(rename = "imageDataUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
    /// Left edge in canvas pixels.
    #[serde(default)]
    pub x: f64,
    /// Top edge in canvas pixels.
    #[serde(default)]
    pub y: f64,
    /// Width in pixels, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height in pixels, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Rendering metadata synthesized during style post-processing.
///
/// Never required on input; backends may include it and post-processing
/// fills in whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderMetadata {
    /// Renderer treatment for the object.
    #[serde(rename = "drawingType", default, skip_serializing_if = "Option::is_none")]
    pub drawing_type: Option<DrawingType>,
    /// Brush family for stroke objects.
    #[serde(rename = "brushType", default, skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<BrushType>,
    /// Brush parameters for stroke objects.
    #[serde(rename = "brushParams", default, skip_serializing_if = "Map::is_empty")]
    pub brush_params: Map<String, Value>,
    /// Raster placement for image/stamp objects.
    #[serde(rename = "stampData", default, skip_serializing_if = "Option::is_none")]
    pub stamp_data: Option<StampData>,
}

fn default_color() -> String {
    "#000000".to_string()
}

const fn default_line_width() -> f64 {
    2.0
}

/// One renderable drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    /// Identifier assigned by the canvas app; generators omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Stroke color as a `#RRGGBB` hex string.
    #[serde(default = "default_color")]
    pub color: String,
    /// Stroke width in pixels.
    #[serde(rename = "lineWidth", default = "default_line_width")]
    pub line_width: f64,
    /// Vector geometry; absent on raster objects.
    #[serde(rename = "pathData", default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<PathData>,
    /// Rendering metadata, attached by post-processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RenderMetadata>,
    /// Top-level raster marker emitted by style transfer replies.
    #[serde(rename = "drawingType", default, skip_serializing_if = "Option::is_none")]
    pub drawing_type: Option<String>,
    /// Raster content of an image object.
    #[serde(rename = "imageDataUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
    /// Left edge of an image object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge of an image object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width of an image object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height of an image object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl DrawingObject {
    /// Create a vector object from a path.
    #[must_use]
    pub fn from_path(color: impl Into<String>, line_width: f64, path: PathData) -> Self {
        Self {
            id: None,
            color: color.into(),
            line_width,
            path_data: Some(path),
            metadata: None,
            drawing_type: None,
            image_data_url: None,
            x: None,
            y: None,
            width: None,
            height: None,
        }
    }

    /// Whether this object is a raster image rather than vector geometry.
    #[must_use]
    pub fn is_image_like(&self) -> bool {
        self.drawing_type.as_deref() == Some("image") || self.image_data_url.is_some()
    }

    /// Derive stamp placement from the top-level raster fields.
    #[must_use]
    pub fn stamp_from_fields(&self) -> StampData {
        StampData {
            image_data_url: self.image_data_url.clone(),
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            width: self.width,
            height: self.height,
        }
    }

    /// Bounding box of the object's vector geometry, when usable.
    #[must_use]
    pub fn bbox(&self) -> Option<BBox> {
        self.path_data.as_ref().and_then(PathData::bbox)
    }
}
