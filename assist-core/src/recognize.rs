//! Rule-based recognition fast path.
//!
//! A pure geometric classifier evaluated before any backend call in
//! recognition mode. Rules are tried in a fixed order and the first match
//! wins, so a scene containing both car and house cues is always labeled
//! "car". A miss returns `None` and hands control back to the pipeline.

use serde::{Deserialize, Serialize};

use crate::canvas::SelectionBox;
use crate::geometry::PathData;
use crate::object::DrawingObject;

/// Label and confidence for a recognized selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Short common-sense label, e.g. `"car"` or `"text: 'Hello'"`.
    pub label: String,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Geometric cues that led to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Recognition {
    fn new(label: impl Into<String>, confidence: f64, explanation: &str) -> Self {
        Self {
            label: label.into(),
            confidence,
            explanation: Some(explanation.to_string()),
        }
    }
}

/// RGB anchor for trunk-like stroke colors.
const TRUNK_RGB: [f64; 3] = [139.0, 69.0, 19.0];
/// RGB anchor for foliage-like stroke colors.
const FOLIAGE_RGB: [f64; 3] = [34.0, 139.0, 34.0];
/// Maximum Euclidean RGB distance from the trunk anchor.
const TRUNK_TOLERANCE: f64 = 100.0;
/// Maximum Euclidean RGB distance from the foliage anchor.
const FOLIAGE_TOLERANCE: f64 = 120.0;

/// Classify the objects inside a selection without calling any backend.
///
/// Returns `None` when no rule matches; the caller then falls through to
/// the generative recognition path.
#[must_use]
pub fn classify(objects: &[DrawingObject], selection: &SelectionBox) -> Option<Recognition> {
    tracing::debug!(
        objects = objects.len(),
        x = selection.x,
        y = selection.y,
        "rule-based recognition"
    );

    let circle_count = count_paths(objects, |p| matches!(p, PathData::Circle { .. }));

    // Rule 1: a lone circle.
    if circle_count == 1 && objects.len() == 1 {
        return Some(Recognition::new(
            "circle",
            0.95,
            "Single circular shape primitive within selection.",
        ));
    }

    // Rule 2: any text primitive, first in input order.
    if let Some(text) = objects.iter().find_map(|o| match &o.path_data {
        Some(PathData::Text { text }) => Some(text.clone()),
        _ => None,
    }) {
        return Some(Recognition::new(
            format!("text: '{text}'"),
            0.98,
            "A text primitive with an explicit string was found.",
        ));
    }

    let rect_count = count_paths(objects, |p| matches!(p, PathData::Rectangle { .. }));
    let polygon_count = count_paths(objects, |p| matches!(p, PathData::Polygon { .. }));

    // Rule 3: body plus at least two wheels. Evaluated before the house
    // rule, so a scene with both cues is labeled "car".
    if rect_count + polygon_count >= 1 && circle_count >= 2 {
        return Some(Recognition::new(
            "car",
            0.90,
            "Rectangular/polygonal body plus multiple circular wheel primitives.",
        ));
    }

    // Rule 4: rectangular base plus triangular roof.
    let triangle_count = count_paths(objects, |p| {
        matches!(p, PathData::Polygon { points } if points.len() == 3)
    });
    if rect_count >= 1 && triangle_count >= 1 {
        return Some(Recognition::new(
            "house",
            0.90,
            "Rectangular base plus triangular roof polygon detected.",
        ));
    }

    // Rule 5: a trunk-colored freehand stroke plus a separate
    // foliage-colored one.
    let trunks = stroke_indices_near(objects, TRUNK_RGB, TRUNK_TOLERANCE);
    let foliage = stroke_indices_near(objects, FOLIAGE_RGB, FOLIAGE_TOLERANCE);
    let has_pair = trunks
        .iter()
        .any(|&t| foliage.iter().any(|&f| f != t));
    if has_pair {
        return Some(Recognition::new(
            "tree",
            0.88,
            "Brown trunk-like stroke plus clustered green freehand strokes resembling foliage.",
        ));
    }

    None
}

fn count_paths(objects: &[DrawingObject], pred: impl Fn(&PathData) -> bool) -> usize {
    objects
        .iter()
        .filter(|o| o.path_data.as_ref().is_some_and(&pred))
        .count()
}

fn stroke_indices_near(objects: &[DrawingObject], anchor: [f64; 3], tolerance: f64) -> Vec<usize> {
    objects
        .iter()
        .enumerate()
        .filter(|(_, o)| {
            matches!(o.path_data, Some(PathData::Stroke { .. }))
                && rgb_distance_squared(hex_to_rgb(&o.color), anchor) <= tolerance * tolerance
        })
        .map(|(i, _)| i)
        .collect()
}

fn rgb_distance_squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// Parse a `#RRGGBB` color; unparseable values degrade to black.
fn hex_to_rgb(color: &str) -> [f64; 3] {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return [0.0, 0.0, 0.0];
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => [f64::from(r), f64::from(g), f64::from(b)],
        _ => [0.0, 0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn selection() -> SelectionBox {
        SelectionBox::new(0.0, 0.0, 400.0, 300.0)
    }

    fn circle(x: f64) -> DrawingObject {
        DrawingObject::from_path(
            "#000000",
            2.0,
            PathData::Circle {
                start: Point::new(x, 80.0),
                end: Point::new(x + 20.0, 80.0),
            },
        )
    }

    fn rectangle() -> DrawingObject {
        DrawingObject::from_path(
            "#FF0000",
            2.0,
            PathData::Rectangle {
                start: Point::new(150.0, 160.0),
                end: Point::new(320.0, 210.0),
            },
        )
    }

    fn triangle() -> DrawingObject {
        DrawingObject::from_path(
            "#8B0000",
            2.0,
            PathData::Polygon {
                points: vec![
                    Point::new(120.0, 180.0),
                    Point::new(190.0, 120.0),
                    Point::new(260.0, 180.0),
                ],
            },
        )
    }

    fn stroke(color: &str) -> DrawingObject {
        DrawingObject::from_path(
            color,
            3.0,
            PathData::Stroke {
                points: vec![Point::new(240.0, 230.0), Point::new(245.0, 270.0)],
            },
        )
    }

    #[test]
    fn test_single_circle() {
        let result = classify(&[circle(130.0)], &selection()).expect("should match");
        assert_eq!(result.label, "circle");
        assert!((result.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_with_company_is_not_rule_one() {
        let objects = vec![circle(130.0), stroke("#123456")];
        let result = classify(&objects, &selection());
        assert!(result.is_none());
    }

    #[test]
    fn test_text_wins_with_literal() {
        let objects = vec![
            circle(130.0),
            DrawingObject::from_path(
                "#000000",
                2.0,
                PathData::Text {
                    text: "Hi".to_string(),
                },
            ),
        ];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "text: 'Hi'");
        assert!((result.confidence - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_text_in_input_order() {
        let text = |s: &str| {
            DrawingObject::from_path(
                "#000000",
                2.0,
                PathData::Text {
                    text: s.to_string(),
                },
            )
        };
        let result = classify(&[text("first"), text("second")], &selection()).expect("match");
        assert_eq!(result.label, "text: 'first'");
    }

    #[test]
    fn test_car_from_body_and_wheels() {
        let objects = vec![rectangle(), circle(180.0), circle(270.0)];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "car");
        assert!((result.confidence - 0.90).abs() < f64::EPSILON);
    }

    #[test]
    fn test_house_from_base_and_roof() {
        let objects = vec![rectangle(), triangle()];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "house");
    }

    #[test]
    fn test_car_precedes_house() {
        // Rectangle + triangle + two wheels satisfies both rules; the car
        // rule is evaluated first.
        let objects = vec![rectangle(), triangle(), circle(180.0), circle(270.0)];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "car");
    }

    #[test]
    fn test_tree_from_trunk_and_foliage() {
        let objects = vec![stroke("#8B4513"), stroke("#228B22")];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "tree");
        assert!((result.confidence - 0.88).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tree_requires_two_distinct_strokes() {
        // A single stroke cannot be both trunk and foliage.
        let objects = vec![stroke("#8B4513")];
        assert!(classify(&objects, &selection()).is_none());
    }

    #[test]
    fn test_tree_color_tolerances() {
        // Within 100 of brown and 120 of green respectively.
        let objects = vec![stroke("#654321"), stroke("#2E8B57")];
        let result = classify(&objects, &selection()).expect("should match");
        assert_eq!(result.label, "tree");

        // Black strokes match neither anchor.
        let objects = vec![stroke("#000000"), stroke("#000000")];
        assert!(classify(&objects, &selection()).is_none());
    }

    #[test]
    fn test_shape_strokes_do_not_count_as_foliage() {
        // Same colors, but geometric primitives instead of freehand strokes.
        let objects = vec![
            DrawingObject::from_path(
                "#8B4513",
                2.0,
                PathData::Line {
                    start: Point::new(0.0, 0.0),
                    end: Point::new(1.0, 1.0),
                },
            ),
            stroke("#228B22"),
        ];
        assert!(classify(&objects, &selection()).is_none());
    }

    #[test]
    fn test_unparseable_color_degrades_to_black() {
        let objects = vec![stroke("not-a-color"), stroke("#228B22")];
        assert!(classify(&objects, &selection()).is_none());
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        assert!(classify(&[], &selection()).is_none());
    }
}
