//! Assist modes, caller intents and per-mode generation profiles.

use assist_core::SelectionBox;
use serde::{Deserialize, Serialize};

/// The five assist modes.
///
/// The mode selects message framing, the reply schema and the failure
/// policy applied when every backend tier fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistMode {
    /// Scene synthesis from a text prompt.
    Synthesize,
    /// Next-stroke ghost suggestion.
    Complete,
    /// Sketch beautification.
    Beautify,
    /// Artistic style transfer.
    Style,
    /// Object recognition within a selection.
    Recognize,
}

/// Failure policy class of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeClass {
    /// Adds new content; a total failure is reported as an error since
    /// nothing existing is lost.
    Additive,
    /// Replaces existing content; a total failure rolls back to the
    /// original objects so user work is never destroyed.
    Destructive,
}

/// Sampling profile applied to the hosted backend per mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProfile {
    /// Hosted model identifier.
    pub hosted_model: &'static str,
    /// Sampling temperature.
    pub temperature: f32,
    /// Reply token budget.
    pub max_tokens: u32,
}

impl AssistMode {
    /// Wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synthesize => "synthesize",
            Self::Complete => "complete",
            Self::Beautify => "beautify",
            Self::Style => "style",
            Self::Recognize => "recognize",
        }
    }

    /// Failure policy class of the mode.
    #[must_use]
    pub const fn class(self) -> ModeClass {
        match self {
            Self::Synthesize | Self::Complete | Self::Recognize => ModeClass::Additive,
            Self::Beautify | Self::Style => ModeClass::Destructive,
        }
    }

    /// Sampling profile for the hosted backend.
    #[must_use]
    pub const fn profile(self) -> GenerationProfile {
        match self {
            Self::Synthesize => GenerationProfile {
                hosted_model: "gpt-4o-mini",
                temperature: 0.1,
                max_tokens: 5000,
            },
            Self::Complete => GenerationProfile {
                hosted_model: "gpt-4.1-mini",
                temperature: 0.1,
                max_tokens: 220,
            },
            Self::Beautify => GenerationProfile {
                hosted_model: "gpt-4.1-mini",
                temperature: 0.1,
                max_tokens: 10_000,
            },
            Self::Style => GenerationProfile {
                hosted_model: "gpt-4.1-mini",
                temperature: 0.2,
                max_tokens: 8000,
            },
            Self::Recognize => GenerationProfile {
                hosted_model: "gpt-4.1-mini",
                temperature: 0.0,
                max_tokens: 300,
            },
        }
    }
}

/// A caller intent: the mode plus its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistIntent {
    /// Synthesize a scene from a natural-language prompt.
    Synthesize {
        /// Scene description.
        prompt: String,
    },
    /// Suggest the most likely next primitive for the current canvas.
    Complete,
    /// Beautify the whole canvas in place.
    Beautify,
    /// Restyle the canvas after an artistic style directive.
    Style {
        /// Style directive, e.g. "Van Gogh oil painting".
        style_prompt: String,
    },
    /// Identify the primary object inside a selection. The canvas snapshot
    /// passed alongside holds the already-subset objects; subsetting is the
    /// caller's job.
    Recognize {
        /// Selection rectangle.
        selection: SelectionBox,
    },
}

impl AssistIntent {
    /// The mode this intent runs under.
    #[must_use]
    pub const fn mode(&self) -> AssistMode {
        match self {
            Self::Synthesize { .. } => AssistMode::Synthesize,
            Self::Complete => AssistMode::Complete,
            Self::Beautify => AssistMode::Beautify,
            Self::Style { .. } => AssistMode::Style,
            Self::Recognize { .. } => AssistMode::Recognize,
        }
    }
}
