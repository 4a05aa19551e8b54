//! Prometheus metrics for the assist service.
//!
//! Counters cover the three response shapes of the assist endpoint plus the
//! outbound call volume; one histogram tracks upstream latency. All helpers
//! are no-ops until the recorder is installed, so unit tests can exercise
//! handlers without setting one up.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::AppError;

// === Metric Name Constants ===

/// Assist requests counter metric name.
pub const METRIC_ASSIST_REQUESTS: &str = "assist_requests_total";
/// Upstream summarization calls counter metric name.
pub const METRIC_UPSTREAM_CALLS: &str = "upstream_calls_total";
/// Upstream summarization failures counter metric name.
pub const METRIC_UPSTREAM_FAILURES: &str = "upstream_failures_total";
/// Mock (unconfigured upstream) responses counter metric name.
pub const METRIC_MOCK_RESPONSES: &str = "mock_responses_total";
/// Degraded (upstream failure fallback) responses counter metric name.
pub const METRIC_DEGRADED_RESPONSES: &str = "degraded_responses_total";
/// Upstream call latency metric name.
pub const METRIC_UPSTREAM_LATENCY: &str = "upstream_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
///
/// Call once at startup; the returned handle renders the exposition text for
/// the `/metrics` endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Metrics(e.to_string()))?;

    describe_counter!(
        METRIC_ASSIST_REQUESTS,
        "Total number of assist-clinical-notes requests"
    );
    describe_counter!(
        METRIC_UPSTREAM_CALLS,
        "Total number of outbound summarization calls"
    );
    describe_counter!(
        METRIC_UPSTREAM_FAILURES,
        "Total number of failed outbound summarization calls"
    );
    describe_counter!(
        METRIC_MOCK_RESPONSES,
        "Total number of mock responses served because no upstream is configured"
    );
    describe_counter!(
        METRIC_DEGRADED_RESPONSES,
        "Total number of degraded responses served after an upstream failure"
    );
    describe_histogram!(
        METRIC_UPSTREAM_LATENCY,
        "Outbound summarization call latency in milliseconds"
    );

    debug!("Metrics initialized");

    Ok(handle)
}

/// Increment the assist requests counter.
pub fn inc_assist_requests() {
    counter!(METRIC_ASSIST_REQUESTS).increment(1);
}

/// Increment the upstream calls counter.
pub fn inc_upstream_calls() {
    counter!(METRIC_UPSTREAM_CALLS).increment(1);
}

/// Increment the upstream failures counter, labelled by failure kind.
pub fn inc_upstream_failures(kind: &'static str) {
    counter!(METRIC_UPSTREAM_FAILURES, "kind" => kind).increment(1);
}

/// Increment the mock responses counter.
pub fn inc_mock_responses() {
    counter!(METRIC_MOCK_RESPONSES).increment(1);
}

/// Increment the degraded responses counter.
pub fn inc_degraded_responses() {
    counter!(METRIC_DEGRADED_RESPONSES).increment(1);
}

/// Record upstream call latency.
pub fn record_upstream_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_UPSTREAM_LATENCY).record(latency_ms);
}
