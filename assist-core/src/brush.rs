//! Style-text to brush-descriptor mapping.
//!
//! A style prompt like "Van Gogh oil painting" deterministically selects a
//! brush family plus renderer parameters. The keyword table is ordered and
//! the first match wins, so mixed prompts resolve the same way every time.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Brush families understood by the canvas renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushType {
    /// Plain stroke rendering.
    Normal,
    /// Irregular, textured stroke.
    Wacky,
    /// Paint-drip effect.
    Drip,
    /// Scattered particle stroke.
    Scatter,
    /// Glowing neon stroke.
    Neon,
    /// Grainy chalk stroke.
    Chalk,
    /// Airbrush-style spray.
    Spray,
    /// Multi-color blended stroke.
    Mixed,
}

impl BrushType {
    /// Wire name of the brush.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Wacky => "wacky",
            Self::Drip => "drip",
            Self::Scatter => "scatter",
            Self::Neon => "neon",
            Self::Chalk => "chalk",
            Self::Spray => "spray",
            Self::Mixed => "mixed",
        }
    }

    /// Look a brush up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "wacky" => Some(Self::Wacky),
            "drip" => Some(Self::Drip),
            "scatter" => Some(Self::Scatter),
            "neon" => Some(Self::Neon),
            "chalk" => Some(Self::Chalk),
            "spray" => Some(Self::Spray),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// A brush selection plus its renderer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStyle {
    /// Selected brush family.
    pub brush_type: BrushType,
    /// Renderer parameters for the brush (`brushParams` on the wire).
    pub params: Map<String, Value>,
}

/// Keywords that select the impasto treatment (thick oil-paint texture).
const IMPASTO_KEYWORDS: [&str; 3] = ["van gogh", "oil", "impasto"];

impl BrushStyle {
    /// A plain brush with no parameters.
    #[must_use]
    pub fn normal() -> Self {
        Self {
            brush_type: BrushType::Normal,
            params: Map::new(),
        }
    }

    /// Whether a style prompt belongs to the oil/impasto keyword class.
    #[must_use]
    pub fn is_impasto(style_text: &str) -> bool {
        let s = style_text.to_lowercase();
        IMPASTO_KEYWORDS.iter().any(|k| s.contains(k))
    }

    /// Map a style prompt to a brush descriptor.
    ///
    /// Case-insensitive keyword scan over an ordered rule table; the first
    /// matching row short-circuits. Unmatched prompts fall back to a plain
    /// brush with empty parameters, so the function is total.
    #[must_use]
    pub fn for_style(style_text: &str) -> Self {
        let s = style_text.to_lowercase();

        let (brush_type, params) = if s.contains("watercolor") || s.contains("wash") {
            (
                BrushType::Spray,
                json!({"opacity": 0.6, "scatterAmount": 0.2}),
            )
        } else if Self::is_impasto(&s) {
            (
                BrushType::Mixed,
                json!({
                    "base": "wacky",
                    "texture": "thick",
                    "mixColors": ["#FFCC33", "#FF9900", "#FFFF66"],
                    "opacity": 0.9,
                    "mixAmount": 0.6,
                }),
            )
        } else if s.contains("neon") || s.contains("glow") {
            (BrushType::Neon, json!({"glow": true, "intensity": 0.9}))
        } else if s.contains("chalk") || s.contains("pastel") {
            (BrushType::Chalk, json!({"grain": 0.6}))
        } else if s.contains("spray") || s.contains("splatter") {
            (BrushType::Spray, json!({"scatterAmount": 0.5}))
        } else if s.contains("drip") {
            (BrushType::Drip, json!({"dripRate": 0.4}))
        } else if s.contains("scatter") {
            (BrushType::Scatter, json!({"scatterAmount": 0.4}))
        } else if s.contains("mixed") {
            (
                BrushType::Mixed,
                json!({"mixColors": ["#FFFFFF", "#000000"], "mixAmount": 0.5}),
            )
        } else if s.contains("stamp") || s.contains("sticker") || s.contains("collage") {
            (BrushType::Normal, json!({"preferStamp": true}))
        } else {
            return Self::normal();
        };

        Self {
            brush_type,
            params: into_map(params),
        }
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
