//! HTTP API handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analytics;
use crate::config::Config;
use crate::metrics;
use crate::summarizer::{assist, resolve_text, SummarizerClient};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<Config>,
    /// Upstream summarizer, present only when fully configured.
    pub summarizer: Option<Arc<SummarizerClient>>,
}

impl AppState {
    /// Create app state from configuration.
    pub fn new(config: Config) -> Self {
        let summarizer = SummarizerClient::from_config(&config).map(Arc::new);
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }
}

/// Query parameters accepted by the assist endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AssistParams {
    /// Note text; a non-empty value overrides the request body.
    pub text: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Assist handler - summarizes clinical note text, always returns 200.
///
/// Input precedence: `text` query parameter, then request body, then a
/// built-in default note. Upstream failures are answered with a degraded
/// mock payload rather than an error status. Invalid percent-escapes in
/// the query decode lossily and still count as query text; the extractor
/// is optional so a query string it rejects outright (such as a repeated
/// `text` key) falls through to the body instead of failing the request.
pub async fn assist_clinical_notes(
    State(state): State<AppState>,
    params: Option<Query<AssistParams>>,
    body: Bytes,
) -> impl IntoResponse {
    metrics::inc_assist_requests();

    let params = params.map(|Query(p)| p).unwrap_or_default();
    let text = resolve_text(params.text.as_deref(), &body);
    let outcome = assist(state.summarizer.as_deref(), &text).await;

    Json(outcome)
}

/// Analytics handler - serves the synthetic ward snapshot.
pub async fn ward_analytics(State(state): State<AppState>) -> impl IntoResponse {
    Json(analytics::snapshot(state.config.demo_secret.as_deref()))
}
