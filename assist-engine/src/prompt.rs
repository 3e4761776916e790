//! Prompt framing: per-mode instructions and fixed worked examples.
//!
//! Every backend call uses the same ordered sequence: the mode instruction,
//! a fixed set of worked example pairs, then the live request carrying the
//! serialized canvas snapshot and the intent payload. Framing is
//! deterministic for identical inputs. The instruction text is treated as
//! configuration; the logic here is only the assembly order and the
//! per-mode canvas wire forms.

use assist_core::CanvasState;
use serde_json::json;

use crate::backend::ChatMessage;
use crate::mode::AssistIntent;

/// Instruction for scene synthesis from text.
const SYNTHESIZE_INSTRUCTION: &str = r##"
You are a drawing-command generator for a canvas app.

Inputs you will be given:
- CanvasState: { "drawings": [ ... ], "bounds": { "width": number, "height": number } }
- UserPrompt: a natural-language scene description

Goal:
Return a SINGLE JSON object with an "objects" array. Each item is a canvas-ready drawing command that our app can render directly.

Output (JSON ONLY, no comments, no markdown):
{
  "objects": [
    {
      "color": "#RRGGBB",
      "lineWidth": number,
      "pathData": {
        "tool": "shape|freehand",
        "type": "rectangle|circle|line|polygon|text|stroke",
        "start": {"x": number, "y": number},
        "end":   {"x": number, "y": number},
        "points": [ {"x": number, "y": number}, ... ],
        "text": "string"
      }
    }
  ]
}
Use exactly one geometry encoding per object: start/end for circle/rectangle/line,
points for polygon, text for text. Freehand strokes use tool "freehand", type
"stroke" and an ordered points array along the stroke path.

Rules & Defaults:
- Use ABSOLUTE pixel coordinates with (0,0) at top-left; all points MUST lie within [0, bounds.width] x [0, bounds.height].
- Color words become hex (e.g. "red" -> "#FF0000", "blue" -> "#0000FF").
- Sizes: tiny=20, small=40, medium=80, large=140, huge=220. For circles, represent size by the distance between start and end (radius as line length).
- Convert relative positions to absolute: center=(W/2,H/2), top-left=(0,0), top=(W/2,0), top-right=(W,0), left=(0,H/2), right=(W,H/2), bottom-left=(0,H), bottom=(W/2,H), bottom-right=(W,H).

Style & tool selection:
- Prefer smooth, natural drawings using the freehand brush by default.
- Match the existing canvas style from CanvasState.drawings: mostly shapes -> use mostly shape commands; mostly strokes -> use mostly freehand strokes; both -> shapes for rigid objects, freehand strokes for organic forms and fine details.
- Keep lineWidth and overall complexity visually consistent with the existing drawings.

Detail & realism:
- Each named object should look like an expert sketch, not an undetailed block. Break complex objects (cities, buildings, cars, trees, faces, people) into roughly 3-8 primitives and add visible details.
- Keep the total number of objects modest: a clean expert sketch, not hundreds of tiny primitives.

When CanvasState is provided:
- Avoid obvious overlaps with existing content unless the prompt demands it, and respect the existing composition.

Content fidelity:
- Include EVERY explicitly mentioned object; respect counts, colors, sizes, and spatial relations.
- If motion is described, suggest simple visual cues with primitives or strokes.
- If ambiguous, choose a common-sense default and continue.

Constraints:
- Output MUST be valid JSON matching the schema above. Do not include IDs (the app assigns them).
"##;

const SYNTHESIZE_EXAMPLE_USER_1: &str = r##"
CanvasState: {"drawings":[],"bounds":{"width":1800,"height":800}}
UserPrompt: draw a small blue circle at the top-right
"##;

const SYNTHESIZE_EXAMPLE_REPLY_1: &str = r##"{"objects":[{"color":"#0000FF","lineWidth":2,"pathData":{"tool":"shape","type":"circle","start":{"x":2900,"y":100},"end":{"x":2940,"y":100}}}]}"##;

const SYNTHESIZE_EXAMPLE_USER_2: &str = r##"
CanvasState:
{"drawings":[],"bounds":{"width":1800,"height":800}}
UserPrompt:
"draw a red car driving in the woods"
"##;

const SYNTHESIZE_EXAMPLE_REPLY_2: &str = concat!(
    r##"{"objects":["##,
    r##"{"color":"#228B22","lineWidth":2,"pathData":{"tool":"shape","type":"polygon","points":[{"x":600,"y":1050},{"x":650,"y":950},{"x":700,"y":1050}]}},"##,
    r##"{"color":"#8B4513","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":645,"y":1050},"end":{"x":655,"y":1100}}},"##,
    r##"{"color":"#228B22","lineWidth":2,"pathData":{"tool":"shape","type":"polygon","points":[{"x":2300,"y":1000},{"x":2350,"y":900},{"x":2400,"y":1000}]}},"##,
    r##"{"color":"#8B4513","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":2345,"y":1000},"end":{"x":2355,"y":1050}}},"##,
    r##"{"color":"#555555","lineWidth":6,"pathData":{"tool":"shape","type":"line","start":{"x":400,"y":1400},"end":{"x":2600,"y":1500}}},"##,
    r##"{"color":"#FF0000","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":1450,"y":1380},"end":{"x":1650,"y":1450}}},"##,
    r##"{"color":"#FF0000","lineWidth":2,"pathData":{"tool":"shape","type":"polygon","points":[{"x":1500,"y":1380},{"x":1600,"y":1380},{"x":1550,"y":1340}]}},"##,
    r##"{"color":"#000000","lineWidth":2,"pathData":{"tool":"shape","type":"circle","start":{"x":1500,"y":1450},"end":{"x":1520,"y":1450}}},"##,
    r##"{"color":"#000000","lineWidth":2,"pathData":{"tool":"shape","type":"circle","start":{"x":1600,"y":1450},"end":{"x":1620,"y":1450}}},"##,
    r##"{"color":"#000000","lineWidth":2,"pathData":{"tool":"shape","type":"line","start":{"x":1420,"y":1415},"end":{"x":1450,"y":1400}}},"##,
    r##"{"color":"#006400","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":1400,"y":1505},{"x":1450,"y":1498},{"x":1500,"y":1502},{"x":1550,"y":1496},{"x":1600,"y":1500}]}}"##,
    r##"]}"##,
);

const SYNTHESIZE_EXAMPLE_USER_3: &str = r##"
CanvasState:
{
  "drawings": [
    {"color":"#8B4513","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":1400,"y":1200},"end":{"x":1600,"y":1270}}},
    {"color":"#FF0000","lineWidth":2,"pathData":{"tool":"shape","type":"polygon","points":[{"x":1400,"y":1200},{"x":1500,"y":1120},{"x":1600,"y":1200}]}}
  ],
  "bounds":{"width":1800,"height":800}
}
UserPrompt:
"add a blue window to the right of the house"
"##;

const SYNTHESIZE_EXAMPLE_REPLY_3: &str = r##"{"objects":[{"color":"#0000FF","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":1650,"y":1210},"end":{"x":1690,"y":1245}}}]}"##;

/// Instruction for next-stroke completion.
const COMPLETE_INSTRUCTION: &str = r##"
You are a drawing intent and completion engine for a canvas app.

You receive a CanvasState JSON object with:
- bounds: { "width": number, "height": number }
- drawings: array of drawing objects; the last one(s) are often the user's most recent strokes. Each drawing has color, lineWidth and pathData (freehand strokes: tool "freehand", type "stroke", points; geometric shapes: tool "shape", type line|rectangle|circle|polygon|text with start/end, points or text).

GOAL
1. Infer what the user is trying to draw at a higher level: a recognizable object (tree, house, car, plane, star, person, cloud) or an abstract geometric shape.
2. Infer the SINGLE most likely next primitive that would continue or complete that intent, matching the user's current drawing style: mainly freehand strokes -> predict a freehand stroke; mainly shapes -> predict a geometric shape.
3. Always output ONE object usable as a "ghost" suggestion of what to draw next.

OUTPUT FORMAT (JSON ONLY, no comments, no markdown):
{
  "complete": true|false,
  "confidence": number,
  "object": {
    "color": "#RRGGBB",
    "lineWidth": number,
    "pathData": { "tool": "shape|freehand", "type": "line|circle|rectangle|polygon|stroke|text", "start": {...}, "end": {...}, "points": [...], "text": "string" }
  }
}

STYLE MATCHING
- Look at the LAST few drawings; match their tool family, approximate lineWidth and color.

SCALE & EXTENT (VERY IMPORTANT)
- The suggestion must be a VISIBLE continuation, not a tiny jitter: span roughly 50%-150% of the last stroke's extent, avoid bounding boxes under ~20 pixels unless all recent strokes are that small, and prefer 8-30 points for a suggested freehand stroke.
- Suggested shapes should have a meaningful size comparable to the elements they extend.

SEMANTIC INTENT
- If a likely object is recognizable, add its next natural part (foliage/trunk for a tree, roof/door/window for a house, wheels/windows for a car). If too ambiguous, focus on geometric completion: straighten or extend a line, close a polygon, complete a circle or rectangle.

GEOMETRY AND BOUNDS
- Absolute pixel coordinates within [0, bounds.width] x [0, bounds.height], origin top-left. Shapes of type line/rectangle/circle need start and end; polygons need points; freehand strokes need an ordered points array forming a smooth, coherent segment.

CONFIDENCE AND COMPLETENESS
- Use "confidence" for how sure you are about the intent. If very unsure (confidence < 0.4), set "complete": false but still return the best-effort primitive so the UI can show a light ghost. If the suggestion clearly completes a part of the object, you may set "complete": true.

COLOR AND WIDTH
- Default color: the last drawing's color, else "#000000". Default lineWidth: the last drawing's, else 2.

CONSTRAINTS
- Output MUST be valid JSON matching the schema above. No explanations, no natural language, exactly one "object".
"##;

const COMPLETE_EXAMPLE_USER_1: &str = r##"
CanvasState:
{"drawings":[{"color":"#228B22","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":300,"y":200},{"x":340,"y":180},{"x":380,"y":210},{"x":360,"y":240},{"x":320,"y":230},{"x":300,"y":200}]}}],"bounds":{"width":1200,"height":800}}
"##;

const COMPLETE_EXAMPLE_REPLY_1: &str = r##"{"complete":false,"confidence":0.78,"object":{"color":"#228B22","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":340,"y":220},{"x":380,"y":230},{"x":410,"y":210},{"x":400,"y":180},{"x":370,"y":170},{"x":340,"y":180}]}}}"##;

const COMPLETE_EXAMPLE_USER_2: &str = r##"
CanvasState:
{"drawings":[{"color":"#8B4513","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":400,"y":300},"end":{"x":600,"y":450}}},{"color":"#8B0000","lineWidth":2,"pathData":{"tool":"shape","type":"polygon","points":[{"x":400,"y":300},{"x":500,"y":220},{"x":600,"y":300}]}}],"bounds":{"width":1200,"height":800}}
"##;

const COMPLETE_EXAMPLE_REPLY_2: &str = r##"{"complete":false,"confidence":0.85,"object":{"color":"#654321","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":470,"y":360},"end":{"x":530,"y":450}}}}"##;

const COMPLETE_EXAMPLE_USER_3: &str = r##"
CanvasState:
{"drawings":[{"color":"#FF0000","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":600,"y":500},{"x":650,"y":480},{"x":720,"y":460},{"x":800,"y":460},{"x":880,"y":480},{"x":930,"y":510}]}}],"bounds":{"width":1800,"height":800}}
"##;

const COMPLETE_EXAMPLE_REPLY_3: &str = r##"{"complete":false,"confidence":0.7,"object":{"color":"#000000","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":680,"y":510},{"x":700,"y":540},{"x":730,"y":550},{"x":760,"y":540},{"x":780,"y":510}]}}}"##;

/// Instruction for sketch beautification.
const BEAUTIFY_INSTRUCTION: &str = r##"
You are a sketch beautifier for a canvas drawing app.

You receive a CanvasState JSON object with:
- width: number
- height: number
- objects: array of drawing objects with id, color, lineWidth and pathData (freehand strokes: tool "freehand", type "stroke", points; geometric shapes: tool "shape", type line|rectangle|circle|polygon|text with start/end, points or text).

GOAL
Transform the input CanvasState into a BEAUTIFIED version of the same drawing. Keep the overall composition, layout and intent the same; make the drawing look smoother, cleaner and more deliberate.

OUTPUT FORMAT (JSON ONLY, no comments, no markdown):
{ "objects": [ { "id": "string", "color": "#RRGGBB", "lineWidth": number, "pathData": { ... } }, ... ] }

PRESERVE INTENT
- Do NOT change what the user is drawing; a tree remains a tree, a house remains a house.
- Do NOT radically move objects; small adjustments to align or straighten are allowed. Keep overall proportions and relative sizes of parts.

STROKE SMOOTHING (FREEHAND)
- Remove jitter and noise; smooth the path into confident curves and lines with a reasonable number of points (16-64 per long stroke). Preserve the approximate start and end positions and overall shape.

GEOMETRIC CLEANUP (SHAPES)
- Straighten almost-straight lines, regularize rectangles and circles, clean polygon vertices. You MAY upgrade a clearly intended shape drawn as a messy stroke into a clean geometric shape when the intent is obvious and the drawing's style is respected.

STYLE PRESERVATION
- Maintain the existing palette and lineWidth relationships. Do NOT randomly change colors. If the whole drawing is sketchy and loose, keep a sketchy-but-clean look rather than a CAD-like one.

GLOBAL CONSISTENCY
- Objects that belong together should remain visually aligned and coherent; you may slightly align related parts if it improves cleanliness without changing the composition.

CONSTRAINTS
- Return a JSON object with an "objects" array using the schema above; keep the object count similar to the input. No explanations, no extra fields, no partially processed output.
"##;

const BEAUTIFY_EXAMPLE_USER_1: &str = r##"
CanvasState:
{"width":800,"height":600,"objects":[{"id":"stroke1","color":"#000000","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":100,"y":300},{"x":130,"y":295},{"x":160,"y":290},{"x":190,"y":292},{"x":220,"y":300},{"x":250,"y":310},{"x":280,"y":315}]}}]}
"##;

const BEAUTIFY_EXAMPLE_REPLY_1: &str = r##"{"objects":[{"id":"stroke1","color":"#000000","lineWidth":3,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":100,"y":300},{"x":130,"y":295},{"x":160,"y":292},{"x":190,"y":295},{"x":220,"y":302},{"x":250,"y":310},{"x":280,"y":315}]}}]}"##;

const BEAUTIFY_EXAMPLE_USER_2: &str = r##"
CanvasState:
{"width":800,"height":600,"objects":[{"id":"rect1","color":"#333333","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":200,"y":200},"end":{"x":400,"y":320}}}]}
"##;

const BEAUTIFY_EXAMPLE_REPLY_2: &str = r##"{"objects":[{"id":"rect1","color":"#333333","lineWidth":2,"pathData":{"tool":"shape","type":"rectangle","start":{"x":200,"y":200},"end":{"x":400,"y":320}}}]}"##;

/// Instruction for artistic style transfer.
const STYLE_INSTRUCTION: &str = r##"
You are an artistic style transfer engine for a canvas app.

Inputs:
- CanvasState: { "width": number, "height": number, "objects": [ { id, color, lineWidth, pathData, ... } ] }
- StylePrompt: short natural language description of the style to apply (e.g. "Van Gogh oil painting", "watercolor sketch", "8-bit pixel art").

Goal:
Return a JSON object with an "objects" array representing the same scene restyled to match the StylePrompt. You may output rasterized image objects as { "drawingType":"image", "imageDataUrl": "data:image/png;base64,...", "x":0, "y":0, "width":W, "height":H }. Prefer vector-like modifications (colors, stroke styles, simplified geometry) when possible.

Output (JSON ONLY):
{ "objects": [ ... ] }

Constraints:
- Keep the same composition and relative positions. Do not invent new major scene elements.
- Output valid JSON. The app accepts either vector objects (shape/freehand) or image objects with data URLs.

Renderer capabilities:
When producing vector objects you SHOULD, when appropriate, include an optional `metadata` object describing how the renderer should display the primitive:
- `drawingType`: "stroke" | "image" | "stamp" (default: "stroke")
- `brushType`: one of "normal", "wacky", "drip", "scatter", "neon", "chalk", "spray", "mixed"
- `brushParams`: object with tool-specific parameters, e.g. { "scatterAmount": 0.3, "texture": "thick", "mixColors": ["#FFCC33","#FF9900"] }
- `stampData`: for stamps/images: { "imageDataUrl": string, "x": number, "y": number, "width": number, "height": number }

The frontend provides Brush(brushType, brushParams), MixedColor(colors[]) and Stamp(imageDataUrl, x, y, width, height); select one by setting `metadata.brushType` or `drawingType:"stamp"` plus `stampData`. If a full vector restyling is not possible, return a single image object with a data URL. Prefer vector output when possible.
"##;

const STYLE_EXAMPLE_USER_1: &str = r##"
CanvasState:
{"objects":[{"color":"#FFD700","lineWidth":4,"pathData":{"tool":"shape","type":"circle","start":{"x":1600,"y":80},"end":{"x":1640,"y":80}}}],"width":1800,"height":800}
StylePrompt:
Van Gogh oil painting
"##;

const STYLE_EXAMPLE_REPLY_1: &str = r##"{"objects":[{"color":"#FFCC33","lineWidth":5,"pathData":{"tool":"freehand","type":"stroke","points":[{"x":1590,"y":70},{"x":1605,"y":60},{"x":1620,"y":70},{"x":1635,"y":90},{"x":1645,"y":85}]},"metadata":{"drawingType":"stroke","brushType":"wacky","brushParams":{"texture":"thick","mixColors":["#FFCC33","#FF9900","#FFFF66"],"opacity":0.9}}}]}"##;

/// Instruction for vector object recognition.
const RECOGNIZE_INSTRUCTION: &str = r##"
You are an object recognizer for a vector canvas. IMPORTANT: the inputs you receive are vector primitives (shapes and freehand strokes) encoded as JSON geometry (points, start/end for shapes, line widths, and colors). These are NOT raster images; do not assume photographic textures or pixels. Use the geometric cues (circle-like points, grouped strokes, polygons, repeated small circles for wheels, trunk plus foliage strokes for trees, etc.) to form your label.

You will be given a small JSON payload describing the subset of canvas objects that intersect the user's selection box and the bounding box itself. Return a single JSON object containing a short `label` describing the primary object or scene contained in the selection, a `confidence` score between 0.0 and 1.0, and an optional short `explanation` that states which geometric cues led to the label.

OUTPUT (JSON ONLY):
{
  "label": "string",
  "confidence": number,
  "explanation": "string (optional)"
}

Rules:
- Prefer concise common-sense labels (e.g., "tree", "car", "house", "face", "circle", "text: 'Hello'", "unknown"). If unsure, return "unknown" with a low confidence (e.g., 0.2).
- Use confidence to reflect certainty; 0.6+ for reasonable guesses, 0.85+ for strong matches.
- Do not invent objects not supported by the provided geometry; prefer conservative labels when ambiguous.
"##;

/// Frame the fixed ordered message sequence for an intent.
///
/// The sequence is always instruction, then the mode's worked examples in a
/// fixed order, then the live request.
#[must_use]
pub fn frame(intent: &AssistIntent, canvas: &CanvasState) -> Vec<ChatMessage> {
    match intent {
        AssistIntent::Synthesize { prompt } => {
            let canvas_json = json!({
                "drawings": canvas.objects,
                "bounds": canvas.bounds,
            })
            .to_string();
            vec![
                ChatMessage::system(SYNTHESIZE_INSTRUCTION),
                ChatMessage::user(SYNTHESIZE_EXAMPLE_USER_1),
                ChatMessage::assistant(SYNTHESIZE_EXAMPLE_REPLY_1),
                ChatMessage::user(SYNTHESIZE_EXAMPLE_USER_2),
                ChatMessage::assistant(SYNTHESIZE_EXAMPLE_REPLY_2),
                ChatMessage::user(SYNTHESIZE_EXAMPLE_USER_3),
                ChatMessage::assistant(SYNTHESIZE_EXAMPLE_REPLY_3),
                ChatMessage::user(format!(
                    "CanvasState:\n{canvas_json}\nUserPrompt:\nDescribe all drawing commands \
                     (shapes and freehand strokes) needed to draw this scene: {prompt}"
                )),
            ]
        }

        AssistIntent::Complete => {
            let canvas_json = json!({
                "drawings": canvas.objects,
                "bounds": canvas.bounds,
            })
            .to_string();
            vec![
                ChatMessage::system(COMPLETE_INSTRUCTION),
                ChatMessage::user(COMPLETE_EXAMPLE_USER_1),
                ChatMessage::assistant(COMPLETE_EXAMPLE_REPLY_1),
                ChatMessage::user(COMPLETE_EXAMPLE_USER_2),
                ChatMessage::assistant(COMPLETE_EXAMPLE_REPLY_2),
                ChatMessage::user(COMPLETE_EXAMPLE_USER_3),
                ChatMessage::assistant(COMPLETE_EXAMPLE_REPLY_3),
                ChatMessage::user(format!("CanvasState:\n{canvas_json}")),
            ]
        }

        AssistIntent::Beautify => {
            let canvas_json = json!({
                "width": canvas.bounds.width,
                "height": canvas.bounds.height,
                "objects": canvas.objects,
            })
            .to_string();
            vec![
                ChatMessage::system(BEAUTIFY_INSTRUCTION),
                ChatMessage::user(BEAUTIFY_EXAMPLE_USER_1),
                ChatMessage::assistant(BEAUTIFY_EXAMPLE_REPLY_1),
                ChatMessage::user(BEAUTIFY_EXAMPLE_USER_2),
                ChatMessage::assistant(BEAUTIFY_EXAMPLE_REPLY_2),
                ChatMessage::user(format!("CanvasState:\n{canvas_json}")),
            ]
        }

        AssistIntent::Style { style_prompt } => {
            let canvas_json = json!({
                "objects": canvas.objects,
                "width": canvas.bounds.width,
                "height": canvas.bounds.height,
            })
            .to_string();
            vec![
                ChatMessage::system(STYLE_INSTRUCTION),
                ChatMessage::user(STYLE_EXAMPLE_USER_1),
                ChatMessage::assistant(STYLE_EXAMPLE_REPLY_1),
                ChatMessage::user(format!(
                    "CanvasState:\n{canvas_json}\nStylePrompt:\n{style_prompt}"
                )),
            ]
        }

        AssistIntent::Recognize { selection } => {
            let box_json = json!(selection).to_string();
            let objects_json = json!({
                "objects": canvas.objects,
                "bounds": canvas.bounds,
            })
            .to_string();
            vec![
                ChatMessage::system(RECOGNIZE_INSTRUCTION),
                ChatMessage::user(format!(
                    "SelectionBox:\n{box_json}\nCanvasObjects:\n{objects_json}\n\nPlease \
                     identify the primary object or scene contained within the selection box \
                     and return JSON as specified."
                )),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Role;
    use assist_core::{CanvasBounds, CanvasState, SelectionBox};

    fn canvas() -> CanvasState {
        CanvasState::new(CanvasBounds::new(800.0, 600.0))
    }

    #[test]
    fn test_synthesize_framing_order() {
        let intent = AssistIntent::Synthesize {
            prompt: "a small blue circle".to_string(),
        };
        let messages = frame(&intent, &canvas());

        assert_eq!(messages.len(), 8);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Assistant);
        let last = messages.last().expect("non-empty");
        assert_eq!(last.role, Role::User);
        assert!(last.content.contains("a small blue circle"));
        assert!(last.content.contains(r##""drawings":[]"##));
    }

    #[test]
    fn test_worked_example_replies_are_valid_json() {
        for reply in [
            SYNTHESIZE_EXAMPLE_REPLY_1,
            SYNTHESIZE_EXAMPLE_REPLY_2,
            SYNTHESIZE_EXAMPLE_REPLY_3,
            COMPLETE_EXAMPLE_REPLY_1,
            COMPLETE_EXAMPLE_REPLY_2,
            COMPLETE_EXAMPLE_REPLY_3,
            BEAUTIFY_EXAMPLE_REPLY_1,
            BEAUTIFY_EXAMPLE_REPLY_2,
            STYLE_EXAMPLE_REPLY_1,
        ] {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(reply);
            assert!(parsed.is_ok(), "example reply is not valid JSON: {reply}");
        }
    }

    #[test]
    fn test_beautify_uses_flat_dimensions() {
        let messages = frame(&AssistIntent::Beautify, &canvas());
        assert_eq!(messages.len(), 6);
        let last = messages.last().expect("non-empty");
        assert!(last.content.contains(r##""width":800.0"##));
        assert!(last.content.contains(r##""objects":[]"##));
    }

    #[test]
    fn test_recognize_has_no_worked_examples() {
        let intent = AssistIntent::Recognize {
            selection: SelectionBox::new(100.0, 50.0, 60.0, 60.0),
        };
        let messages = frame(&intent, &canvas());
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.contains("SelectionBox:"));
        assert!(messages[1].content.contains(r##""x":100.0"##));
    }

    #[test]
    fn test_framing_is_deterministic() {
        let intent = AssistIntent::Style {
            style_prompt: "watercolor wash".to_string(),
        };
        let first = frame(&intent, &canvas());
        let second = frame(&intent, &canvas());
        assert_eq!(first, second);
    }
}
