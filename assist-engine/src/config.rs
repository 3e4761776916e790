//! Backend configuration injected into the pipeline at construction.
//!
//! Configuration is an explicit value, not ambient process state: the
//! caller loads credentials however it likes and hands the finished value
//! to [`crate::pipeline::AssistPipeline::new`]. Tests substitute fake
//! backends instead and never touch this module.

use std::time::Duration;

/// Configuration for the hosted primary backend.
#[derive(Debug, Clone)]
pub struct HostedConfig {
    /// Base URL of the hosted chat-completion service.
    pub base_url: String,
    /// Bearer credential; `None` leaves the backend unconfigured and every
    /// call fails over to the secondary tier without network traffic.
    pub api_key: Option<String>,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
        }
    }
}

/// Configuration for the locally reachable secondary backend.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    /// Base URL of the local chat service.
    pub base_url: String,
    /// Model name passed with every request.
    pub model: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            model: "llama3:8b".to_string(),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Primary (hosted) backend.
    pub primary: HostedConfig,
    /// Secondary (local) backend.
    pub secondary: LocalConfig,
    /// Upper bound for each backend call; a timeout is treated as a
    /// validation failure and drives the fallback tier.
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            primary: HostedConfig::default(),
            secondary: LocalConfig::default(),
            request_timeout: Duration::from_secs(60),
        }
    }
}
