//! # Assist Engine
//!
//! Generation pipeline for canvas assist modes: scene synthesis,
//! next-stroke completion, beautification, style transfer and object
//! recognition.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  AssistPipeline                  │
//! ├──────────────────────────────────────────────────┤
//! │ fast path  │ primary tier │ secondary tier │ post │
//! │ (classify) │ (hosted)     │ (local)        │ proc │
//! ├──────────────────────────────────────────────────┤
//! │  prompt framing  │ schema validation │ taxonomy  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Each run is one sequential flow; the secondary tier is attempted only
//! after the primary is confirmed failed or invalid. Additive modes error
//! when both tiers fail; destructive modes roll back to the caller's
//! original objects. Backend endpoints and credentials are an explicit
//! [`config::EngineConfig`] value injected at construction.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod error;
pub mod mode;
pub mod pipeline;
pub mod postprocess;
pub mod prompt;
pub mod schema;

pub use backend::{
    build_http_client, ChatMessage, GenerativeBackend, HostedBackend, LocalBackend, Role,
};
pub use config::{EngineConfig, HostedConfig, LocalConfig};
pub use error::{AssistError, AssistResult, BackendError};
pub use mode::{AssistIntent, AssistMode, GenerationProfile, ModeClass};
pub use pipeline::{AssistPipeline, AssistReply, ShapeCompletion};
pub use postprocess::apply_style_metadata;
pub use schema::{validate, SchemaError};

/// Engine crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
