//! Clinical notes assist service.
//!
//! A small EHR demo backend: it accepts free-text clinical notes over HTTP
//! and returns a JSON summary. When an upstream AI endpoint is configured
//! the note is summarized there; otherwise, and on any upstream failure,
//! the service answers with a deterministic mock summary. The assist
//! endpoint never returns an error status.
//!
//! # Request handling
//!
//! ```text
//! text  = query param `text`  (if non-empty)
//!       | request body        (if non-empty, lossy UTF-8)
//!       | built-in default note
//!
//! reply = upstream summary    (AI_ENDPOINT + AI_KEY configured, call ok)
//!       | degraded mock       (configured, call failed; carries _error)
//!       | mock                (not configured)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`summarizer`]: Upstream client, mock fallback, and the assist policy
//! - [`analytics`]: Synthetic ward analytics snapshot
//! - [`api`]: HTTP API for assist/analytics/health
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod summarizer;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
