//! Application configuration loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream Summarization ===
    /// Summarization endpoint URL (`AI_ENDPOINT`). Absent or empty disables
    /// upstream calls.
    #[serde(default)]
    pub ai_endpoint: Option<String>,

    /// API key for the summarization endpoint (`AI_KEY`). Absent or empty
    /// disables upstream calls.
    #[serde(default)]
    pub ai_key: Option<String>,

    /// Timeout for the outbound summarization call, in seconds.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    // === Analytics ===
    /// Secret surfaced (redacted) in the analytics payload (`DEMO_SECRET`).
    #[serde(default)]
    pub demo_secret: Option<String>,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

/// Upstream summarization settings, available only when both the endpoint
/// and the key are configured.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Endpoint URL to POST text to.
    pub endpoint: String,
    /// Value for the `api-key` request header.
    pub key: String,
    /// Request timeout.
    pub timeout: Duration,
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    ///
    /// A present-but-malformed endpoint URL is deliberately not rejected
    /// here: the request path degrades to the error-fallback payload, which
    /// keeps the service answering 200 instead of refusing to start.
    pub fn validate(&self) -> Result<(), String> {
        if self.upstream_timeout_secs == 0 {
            return Err("UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Upstream settings, if summarization is enabled.
    ///
    /// Both `AI_ENDPOINT` and `AI_KEY` must be set and non-empty; anything
    /// less means every request is answered with the mock summary.
    pub fn upstream(&self) -> Option<UpstreamConfig> {
        let endpoint = self.ai_endpoint.as_deref().filter(|s| !s.is_empty())?;
        let key = self.ai_key.as_deref().filter(|s| !s.is_empty())?;
        Some(UpstreamConfig {
            endpoint: endpoint.to_string(),
            key: key.to_string(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        })
    }

    /// Whether upstream summarization is configured.
    pub fn upstream_enabled(&self) -> bool {
        self.upstream().is_some()
    }
}
