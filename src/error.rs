//! Unified error types for the assist service.

use thiserror::Error;

/// Unified error type for service startup and CLI paths.
///
/// Request handling never returns these: both business endpoints answer
/// HTTP 200 with failures encoded in the payload, so the only errors that
/// can escape are the ones raised before the server accepts traffic.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(String),
}

/// Errors from the outbound summarization call.
///
/// Every variant degrades identically at the policy layer: the request is
/// answered with the error-fallback payload and this error's display message
/// in its `_error` field. The variants exist so logs and metrics can tell
/// transport problems from bad upstream responses.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport-level failure: connect error, TLS failure, or timeout.
    #[error("request to summarization endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("summarization endpoint returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code from the upstream response.
        status: u16,
        /// Response body, captured for the `_error` field.
        body: String,
    },

    /// The endpoint answered 2xx but the body was not valid JSON.
    #[error("failed to decode summarization response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Short label for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Request(_) => "request",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
