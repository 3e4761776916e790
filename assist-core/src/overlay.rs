//! Synthetic texture overlays for the impasto style treatment.
//!
//! When a style reply carries no explicit rendering metadata and the style
//! prompt is in the oil/impasto class, each stroke-class object gains two
//! short freehand strokes that emulate thick paint texture. Overlay
//! geometry is expressed as fractional offsets of the source bounding box
//! and jittered deterministically by index so consecutive overlays do not
//! align.

use serde_json::{Map, Value};

use crate::brush::BrushType;
use crate::geometry::{BBox, PathData, Point};
use crate::object::{DrawingObject, DrawingType, RenderMetadata};

/// Fractional bbox offsets for the first texture stroke.
const STROKE_ONE: [(f64, f64); 3] = [(-0.3, -0.2), (-0.1, -0.25), (0.1, -0.15)];
/// Fractional bbox offsets for the second texture stroke.
const STROKE_TWO: [(f64, f64); 3] = [(-0.4, 0.1), (0.0, 0.15), (0.35, 0.05)];

/// Line-width multipliers for the two overlays.
const WIDTH_MULTIPLIERS: [f64; 2] = [1.0, 1.3];

/// Synthesize exactly two texture overlay strokes for a source object.
///
/// `index` is the source object's position in the processed batch; the
/// jitter `((index mod 3) - 1) * 4` pixels desynchronizes consecutive
/// overlays. Overlay color prefers the first `mixColors` entry of the
/// brush parameters, falling back to the source color.
#[must_use]
pub fn impasto_overlays(
    source: &DrawingObject,
    bbox: BBox,
    params: &Map<String, Value>,
    index: usize,
) -> Vec<DrawingObject> {
    let color = params
        .get("mixColors")
        .and_then(Value::as_array)
        .and_then(|colors| colors.first())
        .and_then(Value::as_str)
        .map_or_else(|| source.color.clone(), str::to_string);

    let brush_type = params
        .get("base")
        .and_then(Value::as_str)
        .and_then(BrushType::from_name)
        .unwrap_or(BrushType::Wacky);

    #[allow(clippy::cast_precision_loss)]
    let jitter = ((index % 3) as f64 - 1.0) * 4.0;
    let center = bbox.center();
    let (w, h) = (bbox.width(), bbox.height());

    let make_stroke = |offsets: &[(f64, f64)], width_multiplier: f64| {
        let points = offsets
            .iter()
            .map(|&(rx, ry)| Point::new(center.x + rx * w + jitter, center.y + ry * h + jitter))
            .collect();

        let mut brush_params = params.clone();
        brush_params
            .entry("opacity".to_string())
            .or_insert_with(|| Value::from(0.9));

        let mut overlay =
            DrawingObject::from_path(color.clone(), (source.line_width * width_multiplier).max(2.0), PathData::Stroke { points });
        overlay.metadata = Some(RenderMetadata {
            drawing_type: Some(DrawingType::Stroke),
            brush_type: Some(brush_type),
            brush_params,
            stamp_data: None,
        });
        overlay
    };

    vec![
        make_stroke(&STROKE_ONE, WIDTH_MULTIPLIERS[0]),
        make_stroke(&STROKE_TWO, WIDTH_MULTIPLIERS[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushStyle;
    use serde_json::json;

    fn source() -> DrawingObject {
        DrawingObject::from_path(
            "#FFD700",
            4.0,
            PathData::Circle {
                start: Point::new(1600.0, 80.0),
                end: Point::new(1640.0, 80.0),
            },
        )
    }

    fn impasto_params() -> Map<String, Value> {
        BrushStyle::for_style("Van Gogh oil painting").params
    }

    #[test]
    fn test_exactly_two_overlays() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &impasto_params(), 0);
        assert_eq!(overlays.len(), 2);
        for overlay in &overlays {
            assert!(matches!(
                overlay.path_data,
                Some(PathData::Stroke { ref points }) if points.len() == 3
            ));
        }
    }

    #[test]
    fn test_overlay_color_from_mix_colors() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &impasto_params(), 0);
        assert_eq!(overlays[0].color, "#FFCC33");
    }

    #[test]
    fn test_overlay_color_falls_back_to_source() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &Map::new(), 0);
        assert_eq!(overlays[0].color, "#FFD700");
    }

    #[test]
    fn test_overlay_widths() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &impasto_params(), 0);
        assert!((overlays[0].line_width - 4.0).abs() < f64::EPSILON);
        assert!((overlays[1].line_width - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_width_floor_is_two() {
        let mut obj = source();
        obj.line_width = 1.0;
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &impasto_params(), 0);
        assert!((overlays[0].line_width - 2.0).abs() < f64::EPSILON);
        assert!((overlays[1].line_width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jitter_cycles_by_index() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let params = impasto_params();

        let first_x = |index: usize| {
            let overlays = impasto_overlays(&obj, bbox, &params, index);
            match &overlays[0].path_data {
                Some(PathData::Stroke { points }) => points[0].x,
                _ => panic!("expected stroke"),
            }
        };

        // index 0 -> -4px, index 1 -> 0px, index 2 -> +4px, index 3 wraps.
        assert!((first_x(1) - first_x(0) - 4.0).abs() < 1e-9);
        assert!((first_x(2) - first_x(1) - 4.0).abs() < 1e-9);
        assert!((first_x(3) - first_x(0)).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_metadata() {
        let obj = source();
        let bbox = obj.bbox().expect("bbox");
        let overlays = impasto_overlays(&obj, bbox, &impasto_params(), 0);
        let meta = overlays[0].metadata.as_ref().expect("metadata");
        assert_eq!(meta.drawing_type, Some(DrawingType::Stroke));
        assert_eq!(meta.brush_type, Some(BrushType::Wacky));
        assert_eq!(meta.brush_params.get("opacity"), Some(&json!(0.9)));
        assert_eq!(meta.brush_params.get("texture"), Some(&json!("thick")));
    }
}
