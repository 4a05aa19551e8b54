//! Text resolution and the assist fallback policy.
//!
//! This is the decision core of the service: pick the input text, decide
//! whether to call the upstream summarizer, and always produce one of the
//! three result shapes. Nothing here knows about HTTP requests or the
//! process environment, which keeps the policy unit-testable.

use std::time::Instant;

use tracing::{debug, warn};

use super::client::Summarize;
use super::types::AssistOutcome;
use crate::metrics;

/// Fallback note used when a request carries no text at all.
pub const DEFAULT_NOTE: &str =
    "Patient presents with mild chest pain; EKG normal; recommend rest and follow-up.";

/// Resolve the input text for one request.
///
/// Strict precedence: a non-empty `text` query parameter wins over the body,
/// a non-empty body wins over the default note. The body is decoded as UTF-8
/// with invalid sequences replaced, so resolution itself can never fail.
pub fn resolve_text(query_text: Option<&str>, body: &[u8]) -> String {
    if let Some(text) = query_text.filter(|t| !t.is_empty()) {
        return text.to_string();
    }
    if !body.is_empty() {
        return String::from_utf8_lossy(body).into_owned();
    }
    DEFAULT_NOTE.to_string()
}

/// Produce the result for one assist request.
///
/// Without a client this serves the mock shape and never touches the
/// network. With one, a single call is made and any failure is converted
/// into the degraded shape; nothing propagates past this function.
pub async fn assist<S: Summarize>(summarizer: Option<&S>, text: &str) -> AssistOutcome {
    let Some(client) = summarizer else {
        debug!("No upstream configured, serving mock summary");
        metrics::inc_mock_responses();
        return AssistOutcome::mock(text);
    };

    metrics::inc_upstream_calls();
    let started = Instant::now();

    match client.summarize(text).await {
        Ok(value) => {
            metrics::record_upstream_latency(started);
            AssistOutcome::from_upstream(value)
        }
        Err(err) => {
            warn!(
                error = %err,
                kind = err.kind(),
                "Upstream summarization failed, serving degraded summary"
            );
            metrics::inc_upstream_failures(err.kind());
            metrics::inc_degraded_responses();
            AssistOutcome::degraded(text, &err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::mock::MockSummarizer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn query_parameter_wins_over_body() {
        let text = resolve_text(Some("from query"), b"from body");
        assert_eq!(text, "from query");
    }

    #[test]
    fn empty_query_parameter_falls_through_to_body() {
        let text = resolve_text(Some(""), b"from body");
        assert_eq!(text, "from body");
    }

    #[test]
    fn missing_query_parameter_uses_body() {
        let text = resolve_text(None, "vitals stable overnight".as_bytes());
        assert_eq!(text, "vitals stable overnight");
    }

    #[test]
    fn empty_request_uses_default_note() {
        assert_eq!(resolve_text(None, b""), DEFAULT_NOTE);
        assert_eq!(resolve_text(Some(""), b""), DEFAULT_NOTE);
    }

    #[test]
    fn invalid_utf8_body_is_decoded_lossily() {
        let text = resolve_text(None, &[0x66, 0x6f, 0xff, 0x6f]);
        assert_eq!(text, "fo\u{fffd}o");
    }

    #[test]
    fn whitespace_text_is_kept_verbatim() {
        // Emptiness is the only check; nothing is trimmed.
        assert_eq!(resolve_text(Some("  "), b"body"), "  ");
    }

    #[tokio::test]
    async fn no_client_serves_the_mock_shape() {
        let outcome = assist::<MockSummarizer>(None, "chest pain, resolved").await;
        assert_eq!(
            outcome,
            AssistOutcome::Mock {
                mock: true,
                summary: "Summary: chest pain, resolved...".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn upstream_summary_is_returned_directly() {
        let mock = MockSummarizer::responding(json!({"summary": "X"}));
        let outcome = assist(Some(&mock), "long note").await;

        assert_eq!(outcome, AssistOutcome::Upstream(json!("X")));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn upstream_without_summary_key_is_returned_whole() {
        let mock = MockSummarizer::responding(json!({"foo": "bar"}));
        let outcome = assist(Some(&mock), "long note").await;

        assert_eq!(outcome, AssistOutcome::Upstream(json!({"foo": "bar"})));
    }

    #[tokio::test]
    async fn upstream_failure_degrades_with_message() {
        let text = "C".repeat(200);
        let mock = MockSummarizer::failing(500, "boom");

        let outcome = assist(Some(&mock), &text).await;

        match outcome {
            AssistOutcome::Degraded {
                error,
                mock: is_mock,
                summary,
            } => {
                assert!(error.contains("500"));
                assert!(error.contains("boom"));
                assert!(is_mock);
                assert_eq!(summary, format!("{}...", "C".repeat(120)));
            }
            other => panic!("expected degraded outcome, got {:?}", other),
        }
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn identical_inputs_yield_identical_outcomes() {
        let mock = MockSummarizer::responding(json!({"summary": "stable"}));

        let first = assist(Some(&mock), "same note").await;
        let second = assist(Some(&mock), "same note").await;

        assert_eq!(first, second);
        assert_eq!(mock.call_count(), 2);
    }
}
