//! Style-mode post-processing.
//!
//! After a successful style transfer, every object without explicit
//! rendering metadata is given defaults derived from the style prompt, and
//! image-like objects get stamp placement derived from their raster fields.
//! When no object in the whole reply carried explicit metadata and the
//! prompt is in the oil/impasto class, texture overlays are synthesized for
//! every stroke-class object and appended after the originals. Enrichment
//! is best-effort: objects that cannot be enriched pass through unchanged,
//! and nothing here can fail.

use assist_core::{impasto_overlays, BrushStyle, DrawingObject, DrawingType, RenderMetadata};

/// Attach rendering metadata and texture overlays to a style reply.
///
/// Original objects are retained and never reordered; overlays are appended
/// at the end of the batch.
#[must_use]
pub fn apply_style_metadata(objects: Vec<DrawingObject>, style_prompt: &str) -> Vec<DrawingObject> {
    let default_style = BrushStyle::for_style(style_prompt);

    let mut had_explicit_metadata = false;
    let mut processed = Vec::with_capacity(objects.len());

    for mut object in objects {
        let had_metadata = object.metadata.is_some();

        if object.is_image_like() {
            let stamp = object.stamp_from_fields();
            let meta = object.metadata.get_or_insert_with(RenderMetadata::default);
            if meta.drawing_type.is_none() {
                meta.drawing_type = Some(DrawingType::Image);
            }
            if meta.stamp_data.is_none() {
                meta.stamp_data = Some(stamp);
            }
        } else {
            let meta = object.metadata.get_or_insert_with(RenderMetadata::default);
            if meta.drawing_type.is_none() {
                meta.drawing_type = Some(DrawingType::Stroke);
            }
            if meta.brush_type.is_none() {
                meta.brush_type = Some(default_style.brush_type);
            }
            if meta.brush_params.is_empty() {
                meta.brush_params = default_style.params.clone();
            }
        }

        // An object that arrived with metadata and ended up with a brush
        // suppresses overlay synthesis for the entire batch.
        if had_metadata
            && object
                .metadata
                .as_ref()
                .is_some_and(|m| m.brush_type.is_some())
        {
            had_explicit_metadata = true;
        }

        processed.push(object);
    }

    if had_explicit_metadata || !BrushStyle::is_impasto(style_prompt) {
        return processed;
    }

    let mut overlays = Vec::new();
    for (index, object) in processed.iter().enumerate() {
        let is_image = object
            .metadata
            .as_ref()
            .and_then(|m| m.drawing_type)
            == Some(DrawingType::Image);
        if is_image {
            continue;
        }
        let Some(bbox) = object.bbox() else {
            continue;
        };
        overlays.extend(impasto_overlays(object, bbox, &default_style.params, index));
    }

    tracing::debug!(
        overlays = overlays.len(),
        objects = processed.len(),
        "synthesized impasto overlays"
    );

    processed.extend(overlays);
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_core::{BrushType, PathData, Point};

    fn stroke_object() -> DrawingObject {
        DrawingObject::from_path(
            "#FFD700",
            4.0,
            PathData::Stroke {
                points: vec![
                    Point::new(1590.0, 70.0),
                    Point::new(1620.0, 60.0),
                    Point::new(1645.0, 85.0),
                ],
            },
        )
    }

    fn image_object() -> DrawingObject {
        let mut object = DrawingObject::from_path("#000000", 2.0, PathData::Polygon { points: vec![] });
        object.path_data = None;
        object.drawing_type = Some("image".to_string());
        object.image_data_url = Some("data:image/png;base64,AA==".to_string());
        object.x = Some(420.0);
        object.y = Some(320.0);
        object.width = Some(80.0);
        object.height = Some(80.0);
        object
    }

    #[test]
    fn test_unstyled_stroke_gets_defaults_and_overlays() {
        let output = apply_style_metadata(vec![stroke_object()], "Van Gogh oil painting");

        // One source object plus exactly two overlays.
        assert_eq!(output.len(), 3);

        let meta = output[0].metadata.as_ref().expect("metadata attached");
        assert_eq!(meta.drawing_type, Some(DrawingType::Stroke));
        assert_eq!(meta.brush_type, Some(BrushType::Mixed));
        assert!(!meta.brush_params.is_empty());

        // Source object is first; overlays follow.
        assert!(matches!(
            output[0].path_data,
            Some(PathData::Stroke { ref points }) if points.len() == 3
        ));
        assert_eq!(output[1].color, "#FFCC33");
    }

    #[test]
    fn test_non_impasto_style_adds_no_overlays() {
        let output = apply_style_metadata(vec![stroke_object()], "watercolor wash");
        assert_eq!(output.len(), 1);
        let meta = output[0].metadata.as_ref().expect("metadata attached");
        assert_eq!(meta.brush_type, Some(BrushType::Spray));
    }

    #[test]
    fn test_explicit_metadata_suppresses_overlays_for_batch() {
        let mut styled = stroke_object();
        styled.metadata = Some(RenderMetadata {
            drawing_type: Some(DrawingType::Stroke),
            brush_type: Some(BrushType::Wacky),
            brush_params: serde_json::Map::new(),
            stamp_data: None,
        });

        // One styled object suppresses overlays even for unstyled peers.
        let output = apply_style_metadata(vec![styled, stroke_object()], "Van Gogh oil painting");
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_second_pass_adds_nothing() {
        let first = apply_style_metadata(vec![stroke_object()], "Van Gogh oil painting");
        assert_eq!(first.len(), 3);

        let second = apply_style_metadata(first.clone(), "Van Gogh oil painting");
        assert_eq!(second.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_image_object_gets_stamp_data() {
        let output = apply_style_metadata(vec![image_object()], "children sticker stamps");
        assert_eq!(output.len(), 1);

        let meta = output[0].metadata.as_ref().expect("metadata attached");
        assert_eq!(meta.drawing_type, Some(DrawingType::Image));
        let stamp = meta.stamp_data.as_ref().expect("stamp derived");
        assert!((stamp.x - 420.0).abs() < f64::EPSILON);
        assert_eq!(stamp.width, Some(80.0));
        assert!(meta.brush_type.is_none());
    }

    #[test]
    fn test_image_objects_never_get_overlays() {
        let output = apply_style_metadata(vec![image_object()], "Van Gogh oil painting");
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_objects_without_bbox_pass_through() {
        let text = DrawingObject::from_path(
            "#000000",
            2.0,
            PathData::Text {
                text: "Hi".to_string(),
            },
        );
        let output = apply_style_metadata(vec![text], "Van Gogh oil painting");
        // Metadata defaults attach, but no overlay can be derived.
        assert_eq!(output.len(), 1);
        assert!(output[0].metadata.is_some());
    }
}
