//! HTTP client for the upstream summarization endpoint.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::{Config, UpstreamConfig};
use crate::error::UpstreamError;

/// Outbound summarization seam.
///
/// The assist policy works against this trait, so tests can script upstream
/// outcomes without running a server.
pub trait Summarize {
    /// Submit text for summarization and return the decoded JSON response.
    fn summarize(&self, text: &str) -> impl Future<Output = Result<Value, UpstreamError>> + Send;
}

/// Request body sent to the summarization endpoint.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    /// Text to summarize.
    input: &'a str,
}

/// Client for the summarization endpoint.
///
/// Issues a single `POST {endpoint}` per call with the `api-key` header and
/// a JSON body of `{"input": <text>}`. The timeout is baked into the inner
/// `reqwest::Client` at construction.
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    /// HTTP client with the request timeout configured.
    http: reqwest::Client,
    /// Endpoint URL to POST to.
    endpoint: String,
    /// Value for the `api-key` header.
    key: String,
}

impl SummarizerClient {
    /// Create a client for the given upstream settings.
    pub fn new(upstream: UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(upstream.timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            endpoint: upstream.endpoint,
            key: upstream.key,
        }
    }

    /// Create a client from configuration, if upstream summarization is
    /// enabled there.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.upstream().map(Self::new)
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Summarize for SummarizerClient {
    #[instrument(skip(self, text), fields(endpoint = %self.endpoint))]
    async fn summarize(&self, text: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.key)
            .json(&SummarizeRequest { input: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

        debug!("Upstream summarization call succeeded");

        Ok(value)
    }
}
