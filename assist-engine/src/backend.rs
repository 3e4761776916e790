//! Generative chat backends.
//!
//! Two tiers share one call contract: a fixed role-tagged message sequence
//! in, raw reply text out. The primary tier is a hosted chat-completion
//! service reached over HTTPS; the secondary tier is a locally reachable
//! service with the same framing. The pipeline treats both opaquely and
//! extracts only the textual JSON payload.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::{HostedConfig, LocalConfig};
use crate::error::BackendError;
use crate::mode::AssistMode;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instruction.
    System,
    /// Request content or a worked-example request.
    User,
    /// A worked-example reply.
    Assistant,
}

/// One role-tagged message in the fixed framing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: Role,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Build a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A generative service behind the shared message-framing contract.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Short backend name used in logs and error details.
    fn name(&self) -> &str;

    /// Generate raw reply text for the framed message sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, timeout, missing
    /// configuration or an unparseable reply envelope. The pipeline treats
    /// every variant as a signal to fall to the next tier.
    async fn generate(
        &self,
        mode: AssistMode,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError>;
}

/// Build the HTTP client shared by both backends.
///
/// # Errors
///
/// Returns [`BackendError::Http`] if the client cannot be constructed.
pub fn build_http_client(timeout: Duration) -> Result<Client, BackendError> {
    let client = Client::builder()
        .user_agent("assist-engine (sketch-assist)")
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Hosted chat-completion backend (primary tier).
pub struct HostedBackend {
    http: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HostedBackend {
    /// Create the hosted backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidUrl`] if the base URL is malformed.
    pub fn new(config: &HostedConfig, http: Client) -> Result<Self, BackendError> {
        let mut endpoint =
            Url::parse(&config.base_url).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        endpoint.set_path("/v1/chat/completions");

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for HostedBackend {
    fn name(&self) -> &str {
        "hosted"
    }

    async fn generate(
        &self,
        mode: AssistMode,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError> {
        let Some(api_key) = &self.api_key else {
            return Err(BackendError::NotConfigured);
        };

        let profile = mode.profile();
        let request = HostedChatRequest {
            model: profile.hosted_model,
            messages,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        tracing::debug!(
            backend = self.name(),
            mode = mode.as_str(),
            model = profile.hosted_model,
            "dispatching generation request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let reply: HostedChatResponse = response.json().await?;
        let choice = reply.choices.into_iter().next().ok_or_else(|| {
            BackendError::UnexpectedResponse("reply contained no choices".to_string())
        })?;

        Ok(choice.message.content)
    }
}

#[derive(Debug, Serialize)]
struct HostedChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct HostedChatResponse {
    choices: Vec<HostedChoice>,
}

#[derive(Debug, Deserialize)]
struct HostedChoice {
    message: HostedChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct HostedChoiceMessage {
    content: String,
}

/// Locally reachable chat backend (secondary tier).
pub struct LocalBackend {
    http: Client,
    endpoint: Url,
    model: String,
}

impl LocalBackend {
    /// Create the local backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidUrl`] if the base URL is malformed.
    pub fn new(config: &LocalConfig, http: Client) -> Result<Self, BackendError> {
        let mut endpoint =
            Url::parse(&config.base_url).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        endpoint.set_path("/api/chat");

        Ok(Self {
            http,
            endpoint,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for LocalBackend {
    fn name(&self) -> &str {
        "local"
    }

    async fn generate(
        &self,
        mode: AssistMode,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError> {
        let request = LocalChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        tracing::debug!(
            backend = self.name(),
            mode = mode.as_str(),
            model = %self.model,
            "dispatching generation request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let reply: LocalChatResponse = response.json().await?;
        Ok(reply.message.content)
    }
}

#[derive(Debug, Serialize)]
struct LocalChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct LocalChatResponse {
    message: LocalChatMessage,
}

#[derive(Debug, Deserialize)]
struct LocalChatMessage {
    content: String,
}
