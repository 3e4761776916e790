//! Geometry primitives shared by every assist mode.
//!
//! Canvas coordinates are absolute pixels with the origin at the top-left.
//! The heterogeneous path encodings used on the wire (start/end pair,
//! ordered point list, literal text) are modeled as a tagged variant so an
//! object can never carry a geometry payload inconsistent with its type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the canvas in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions. Valid coordinates span `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl CanvasBounds {
    /// Create canvas bounds.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which input family produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Geometric shape tools (line, rectangle, circle, polygon, text).
    Shape,
    /// Freehand brush strokes.
    Freehand,
}

/// Geometry payload of a drawing object, tagged by primitive type.
///
/// Exactly one geometry encoding is populated per variant, matching the
/// wire contract: `start`/`end` for line, rectangle and circle, an ordered
/// `points` sequence for polygon and stroke, and a literal for text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathDataWire", into = "PathDataWire")]
pub enum PathData {
    /// Straight segment between two anchors.
    Line {
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
    },
    /// Axis-aligned rectangle spanned by two opposite corners.
    Rectangle {
        /// First corner.
        start: Point,
        /// Opposite corner.
        end: Point,
    },
    /// Circle; the radius is the distance between the two anchors.
    Circle {
        /// Circle center anchor.
        start: Point,
        /// Radius anchor.
        end: Point,
    },
    /// Closed polygon over an ordered vertex list.
    Polygon {
        /// Polygon vertices in drawing order.
        points: Vec<Point>,
    },
    /// Literal text placed on the canvas.
    Text {
        /// The text content.
        text: String,
    },
    /// Freehand stroke along an ordered point path.
    Stroke {
        /// Stroke points in drawing order.
        points: Vec<Point>,
    },
}

impl PathData {
    /// The input family this path belongs to.
    #[must_use]
    pub const fn tool(&self) -> Tool {
        match self {
            Self::Stroke { .. } => Tool::Freehand,
            _ => Tool::Shape,
        }
    }

    /// Wire name of the primitive type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Polygon { .. } => "polygon",
            Self::Text { .. } => "text",
            Self::Stroke { .. } => "stroke",
        }
    }

    /// Bounding box of the path geometry.
    ///
    /// Derived from the point sequence when one is present, otherwise from
    /// the start/end pair. Returns `None` when neither is usable (text, or
    /// an empty point sequence).
    #[must_use]
    pub fn bbox(&self) -> Option<BBox> {
        match self {
            Self::Polygon { points } | Self::Stroke { points } => BBox::from_points(points),
            Self::Line { start, end } | Self::Rectangle { start, end } | Self::Circle { start, end } => {
                BBox::from_points(&[*start, *end])
            }
            Self::Text { .. } => None,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    /// Smallest x coordinate.
    pub min_x: f64,
    /// Largest x coordinate.
    pub max_x: f64,
    /// Smallest y coordinate.
    pub min_y: f64,
    /// Largest y coordinate.
    pub max_y: f64,
}

impl BBox {
    /// Bounding box of a point sequence; `None` when the sequence is empty.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Box width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Box height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Box center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Error decoding a wire path payload into a [`PathData`] variant.
#[derive(Debug, Error)]
pub enum PathError {
    /// The `type` tag named an unknown primitive.
    #[error("unknown path type `{0}`")]
    UnknownType(String),
    /// The geometry fields required by the type tag were missing.
    #[error("path type `{kind}` requires {required}")]
    MissingGeometry {
        /// Wire name of the primitive type.
        kind: String,
        /// Description of the missing fields.
        required: &'static str,
    },
}

/// Flat wire form: `{"tool": ..., "type": ..., start/end/points/text}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PathDataWire {
    tool: Tool,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl TryFrom<PathDataWire> for PathData {
    type Error = PathError;

    fn try_from(wire: PathDataWire) -> Result<Self, Self::Error> {
        let PathDataWire {
            kind,
            start,
            end,
            points,
            text,
            ..
        } = wire;

        let missing = |required: &'static str| PathError::MissingGeometry {
            kind: kind.clone(),
            required,
        };
        let anchors = || match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(missing("`start` and `end`")),
        };

        match kind.as_str() {
            "line" => {
                let (start, end) = anchors()?;
                Ok(Self::Line { start, end })
            }
            "rectangle" => {
                let (start, end) = anchors()?;
                Ok(Self::Rectangle { start, end })
            }
            "circle" => {
                let (start, end) = anchors()?;
                Ok(Self::Circle { start, end })
            }
            "polygon" => {
                let points = points.ok_or_else(|| missing("`points`"))?;
                Ok(Self::Polygon { points })
            }
            "text" => {
                let text = text.ok_or_else(|| missing("`text`"))?;
                Ok(Self::Text { text })
            }
            "stroke" => {
                let points = points.ok_or_else(|| missing("`points`"))?;
                Ok(Self::Stroke { points })
            }
            other => Err(PathError::UnknownType(other.to_string())),
        }
    }
}

impl From<PathData> for PathDataWire {
    fn from(path: PathData) -> Self {
        let tool = path.tool();
        let kind = path.type_name().to_string();
        let (start, end, points, text) = match path {
            PathData::Line { start, end }
            | PathData::Rectangle { start, end }
            | PathData::Circle { start, end } => (Some(start), Some(end), None, None),
            PathData::Polygon { points } | PathData::Stroke { points } => {
                (None, None, Some(points), None)
            }
            PathData::Text { text } => (None, None, None, Some(text)),
        };
        Self {
            tool,
            kind,
            start,
            end,
            points,
            text,
        }
    }
}
