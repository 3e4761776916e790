//! Generation pipeline orchestration.
//!
//! One pipeline call is a single sequential flow: the rule-based fast path
//! (recognition only), then one primary backend attempt, then one secondary
//! attempt with identical framing, then the mode-specific failure policy.
//! Additive modes surface a terminal error when both tiers fail; destructive
//! modes roll back to the caller's original objects so existing work is
//! never destroyed. There are no retries and no backoff beyond the single
//! two-tier attempt.
//!
//! Dropping the returned future abandons any in-flight backend call; the
//! pipeline holds no per-request state beyond the call itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use assist_core::{classify, CanvasState, DrawingObject, Recognition};

use crate::backend::{
    build_http_client, ChatMessage, GenerativeBackend, HostedBackend, LocalBackend,
};
use crate::config::EngineConfig;
use crate::error::{AssistError, AssistResult, BackendError};
use crate::mode::{AssistIntent, AssistMode, ModeClass};
use crate::postprocess::apply_style_metadata;
use crate::{prompt, schema};

/// Ghost suggestion returned by completion mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeCompletion {
    /// Whether the suggestion clearly completes a part of the sketch.
    pub complete: bool,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// The suggested next primitive.
    pub object: DrawingObject,
}

/// Typed output of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistReply {
    /// Renderable objects (synthesize, beautify, style).
    Objects(Vec<DrawingObject>),
    /// Next-stroke ghost suggestion (complete).
    Completion(ShapeCompletion),
    /// Recognition outcome (recognize).
    Recognition(Recognition),
}

/// Wire wrapper for object-list replies.
#[derive(Debug, Deserialize)]
struct ObjectsReply {
    objects: Vec<DrawingObject>,
}

/// The generation pipeline: fast path, two backend tiers, post-processing.
///
/// Backends are injected at construction so tests can substitute fakes; the
/// pipeline holds no other state and is freely shared across concurrent
/// requests.
pub struct AssistPipeline {
    primary: Arc<dyn GenerativeBackend>,
    secondary: Arc<dyn GenerativeBackend>,
}

impl AssistPipeline {
    /// Build the pipeline with the standard hosted/local backend pair.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the HTTP client cannot be constructed
    /// or an endpoint URL is malformed.
    pub fn new(config: &EngineConfig) -> Result<Self, BackendError> {
        let http = build_http_client(config.request_timeout)?;
        let primary = HostedBackend::new(&config.primary, http.clone())?;
        let secondary = LocalBackend::new(&config.secondary, http)?;
        Ok(Self::with_backends(
            Arc::new(primary),
            Arc::new(secondary),
        ))
    }

    /// Build the pipeline from explicit backends.
    #[must_use]
    pub fn with_backends(
        primary: Arc<dyn GenerativeBackend>,
        secondary: Arc<dyn GenerativeBackend>,
    ) -> Self {
        Self { primary, secondary }
    }

    /// Run one assist request to completion.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::BothBackendsFailed`] when every tier fails in
    /// an additive mode. Destructive modes (beautify, style) never error on
    /// backend failure; they roll back to the original canvas objects.
    pub async fn run(
        &self,
        intent: &AssistIntent,
        canvas: &CanvasState,
    ) -> AssistResult<AssistReply> {
        let request_id = Uuid::new_v4();
        let mode = intent.mode();
        tracing::info!(
            %request_id,
            mode = mode.as_str(),
            objects = canvas.object_count(),
            "assist request"
        );

        // Recognition fast path: no backend is invoked on a hit.
        if let AssistIntent::Recognize { selection } = intent {
            if let Some(hit) = classify(&canvas.objects, selection) {
                tracing::debug!(%request_id, label = %hit.label, "fast path hit");
                return Ok(AssistReply::Recognition(hit));
            }
        }

        let messages = prompt::frame(intent, canvas);

        let outcome = match self.attempt(self.primary.as_ref(), mode, &messages).await {
            Ok(reply) => Ok(reply),
            Err(primary_error) => {
                tracing::warn!(
                    %request_id,
                    backend = self.primary.name(),
                    error = %primary_error,
                    "primary backend failed, falling back"
                );
                self.attempt(self.secondary.as_ref(), mode, &messages).await
            }
        };

        let reply = match outcome {
            Ok(reply) => reply,
            Err(last_error) => {
                return match mode.class() {
                    ModeClass::Additive => {
                        tracing::warn!(%request_id, error = %last_error, "all backends failed");
                        Err(AssistError::BothBackendsFailed(last_error.to_string()))
                    }
                    ModeClass::Destructive => {
                        tracing::warn!(
                            %request_id,
                            error = %last_error,
                            "all backends failed, rolling back to original objects"
                        );
                        Ok(AssistReply::Objects(canvas.objects.clone()))
                    }
                };
            }
        };

        // Style enrichment runs only on a successful generation, never on a
        // rollback, and cannot fail.
        let reply = match (intent, reply) {
            (AssistIntent::Style { style_prompt }, AssistReply::Objects(objects)) => {
                AssistReply::Objects(apply_style_metadata(objects, style_prompt))
            }
            (_, reply) => reply,
        };

        Ok(reply)
    }

    /// One backend attempt: generate, parse, validate, decode.
    async fn attempt(
        &self,
        backend: &dyn GenerativeBackend,
        mode: AssistMode,
        messages: &[ChatMessage],
    ) -> AssistResult<AssistReply> {
        let backend_name = backend.name().to_string();

        let raw = backend
            .generate(mode, messages)
            .await
            .map_err(|error| match error {
                BackendError::InvalidUrl(_)
                | BackendError::NotConfigured
                | BackendError::Http(_) => AssistError::BackendUnavailable {
                    backend: backend_name.clone(),
                    detail: error.to_string(),
                },
                BackendError::UnexpectedResponse(_) => AssistError::InvalidResponse {
                    backend: backend_name.clone(),
                    detail: error.to_string(),
                },
            })?;

        let value: Value =
            serde_json::from_str(&raw).map_err(|error| AssistError::InvalidResponse {
                backend: backend_name.clone(),
                detail: format!("reply is not JSON: {error}"),
            })?;

        schema::validate(mode, &value).map_err(|error| AssistError::InvalidResponse {
            backend: backend_name.clone(),
            detail: error.to_string(),
        })?;

        Self::decode(mode, value).map_err(|detail| AssistError::InvalidResponse {
            backend: backend_name,
            detail,
        })
    }

    /// Decode a schema-valid reply into the typed per-mode output.
    fn decode(mode: AssistMode, value: Value) -> Result<AssistReply, String> {
        match mode {
            AssistMode::Synthesize | AssistMode::Beautify | AssistMode::Style => {
                let reply: ObjectsReply =
                    serde_json::from_value(value).map_err(|e| e.to_string())?;
                Ok(AssistReply::Objects(reply.objects))
            }
            AssistMode::Complete => {
                let completion: ShapeCompletion =
                    serde_json::from_value(value).map_err(|e| e.to_string())?;
                Ok(AssistReply::Completion(completion))
            }
            AssistMode::Recognize => {
                let recognition: Recognition =
                    serde_json::from_value(value).map_err(|e| e.to_string())?;
                Ok(AssistReply::Recognition(recognition))
            }
        }
    }
}
