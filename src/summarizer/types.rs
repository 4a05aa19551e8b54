//! Result shapes for the assist endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::utils::truncate_chars;

/// Result of one assist request.
///
/// Exactly one shape is produced per request, and every shape serializes to
/// the response body as-is: callers detect degraded operation by inspecting
/// the payload (`mock` / `_error` keys), never the HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssistOutcome {
    /// Value taken from the upstream response: the `summary` field when the
    /// response carries one, otherwise the whole decoded body. May be any
    /// JSON value, including a bare string.
    Upstream(Value),

    /// Error fallback: an upstream is configured but the call failed. The
    /// failure message is surfaced verbatim in `_error`.
    Degraded {
        /// Display message of the upstream failure.
        #[serde(rename = "_error")]
        error: String,
        /// Always true.
        mock: bool,
        /// Hard-truncated input text.
        summary: String,
    },

    /// Mock summary: no upstream is configured.
    Mock {
        /// Always true.
        mock: bool,
        /// Prefixed, hard-truncated input text.
        summary: String,
    },
}

impl AssistOutcome {
    /// Character budget for the mock summary.
    pub const MOCK_SUMMARY_CHARS: usize = 100;

    /// Character budget for the degraded summary.
    pub const DEGRADED_SUMMARY_CHARS: usize = 120;

    /// Build the mock shape served when no upstream is configured.
    ///
    /// The ellipsis is appended unconditionally, even when the text was
    /// short enough to survive the cut.
    pub fn mock(text: &str) -> Self {
        AssistOutcome::Mock {
            mock: true,
            summary: format!(
                "Summary: {}...",
                truncate_chars(text, Self::MOCK_SUMMARY_CHARS)
            ),
        }
    }

    /// Build the error-fallback shape from a failed upstream call.
    pub fn degraded(text: &str, error: &UpstreamError) -> Self {
        AssistOutcome::Degraded {
            error: error.to_string(),
            mock: true,
            summary: format!(
                "{}...",
                truncate_chars(text, Self::DEGRADED_SUMMARY_CHARS)
            ),
        }
    }

    /// Build the result from a decoded upstream response.
    ///
    /// A non-null `summary` field is returned on its own; anything else
    /// (no such field, or an explicit null) yields the whole decoded value.
    pub fn from_upstream(value: Value) -> Self {
        match value.get("summary") {
            Some(summary) if !summary.is_null() => AssistOutcome::Upstream(summary.clone()),
            _ => AssistOutcome::Upstream(value),
        }
    }
}
