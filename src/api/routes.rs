//! HTTP API route definitions.

use axum::{
    routing::{any, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{assist_clinical_notes, health, ward_analytics, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Clinical notes assist endpoint; accepts any method since clients
        // send both GET with a query parameter and POST with a body
        .route("/api/assist-clinical-notes", any(assist_clinical_notes))
        // Synthetic analytics endpoint
        .route("/api/analytics", get(ward_analytics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create the metrics router backed by the installed Prometheus recorder.
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route(
        "/metrics",
        get(move || std::future::ready(handle.render())),
    )
}
