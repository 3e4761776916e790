//! Error taxonomy for the assist pipeline.
//!
//! Transport-tier failures ([`BackendError`]) are always recovered locally
//! by falling to the next backend tier; only [`AssistError::BothBackendsFailed`]
//! escalates to the caller, and only for additive modes. Nothing here is
//! fatal to the host process.

use thiserror::Error;

/// Result alias for pipeline operations.
pub type AssistResult<T> = Result<T, AssistError>;

/// Errors surfaced to the pipeline caller.
#[derive(Debug, Error)]
pub enum AssistError {
    /// Malformed caller payload, rejected before the pipeline runs.
    #[error("bad request: {0}")]
    BadInput(String),

    /// A backend could not be reached or is not configured.
    #[error("backend `{backend}` unavailable: {detail}")]
    BackendUnavailable {
        /// Backend name.
        backend: String,
        /// Failure detail.
        detail: String,
    },

    /// A backend reply failed to parse or did not match the mode schema.
    #[error("invalid response from `{backend}`: {detail}")]
    InvalidResponse {
        /// Backend name.
        backend: String,
        /// Failure detail.
        detail: String,
    },

    /// Every backend tier failed; surfaced for additive modes only.
    #[error("all generation backends failed: {0}")]
    BothBackendsFailed(String),
}

/// Transport-tier errors raised by a single backend call.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend endpoint URL is malformed.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),

    /// The backend has no credential configured.
    #[error("backend is not configured")]
    NotConfigured,

    /// HTTP layer failed (connection, timeout, status, or an envelope that
    /// does not decode).
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The reply envelope did not match the expected structure.
    #[error("unexpected backend response: {0}")]
    UnexpectedResponse(String),
}
