//! Mock summarizer for unit testing.
//!
//! A scripted stand-in for the upstream client that records how many calls
//! it received, so tests can assert both the outcome and whether an
//! outbound call happened at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::client::Summarize;
use crate::error::UpstreamError;

/// Scripted behavior for the mock.
#[derive(Debug, Clone)]
enum MockOutcome {
    /// Answer every call with this value.
    Respond(Value),
    /// Fail every call with an HTTP-status error.
    Fail {
        /// Scripted status code.
        status: u16,
        /// Scripted response body.
        body: String,
    },
}

/// Mock summarizer with call counting.
///
/// Clones share the call counter, so a clone can be handed to the code under
/// test while the original keeps observing.
#[derive(Debug, Clone)]
pub struct MockSummarizer {
    /// Scripted outcome.
    outcome: MockOutcome,
    /// Calls received so far.
    calls: Arc<AtomicUsize>,
}

impl MockSummarizer {
    /// Mock that answers every call with the given JSON value.
    pub fn responding(value: Value) -> Self {
        Self {
            outcome: MockOutcome::Respond(value),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that fails every call with a status error carrying `body`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail {
                status,
                body: body.into(),
            },
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of summarize calls received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Summarize for MockSummarizer {
    async fn summarize(&self, _text: &str) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Respond(value) => Ok(value.clone()),
            MockOutcome::Fail { status, body } => Err(UpstreamError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
