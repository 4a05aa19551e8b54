//! Synthetic ward analytics snapshot.
//!
//! The figures are fixed demo data; only the timestamp and the redacted
//! secret vary between responses. Nothing here reads patient records.

use serde::Serialize;
use time::OffsetDateTime;

use crate::utils::truncate_chars;

/// Stands in for the secret when `DEMO_SECRET` is unset. Redacted like any
/// real value, so the response shape never changes.
pub const SECRET_PLACEHOLDER: &str = "(no secret)";

/// How many leading characters of the secret survive redaction.
const SECRET_VISIBLE_CHARS: usize = 6;

/// One analytics response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub service: &'static str,
    /// Snapshot time in UTC, RFC 3339 with a `Z` offset.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub metrics: WardMetrics,
    /// Leading characters of the demo secret, remainder masked.
    pub kv_demo_secret: String,
    pub note: &'static str,
}

/// Fixed ward figures served with every snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct WardMetrics {
    pub admissions_today: u32,
    pub avg_er_wait_mins: u32,
    pub discharges: u32,
}

impl Default for WardMetrics {
    fn default() -> Self {
        Self {
            admissions_today: 42,
            avg_er_wait_mins: 18,
            discharges: 37,
        }
    }
}

/// Build a snapshot stamped with the current time.
pub fn snapshot(demo_secret: Option<&str>) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        service: "ehr-analytics-demo",
        timestamp: OffsetDateTime::now_utc(),
        metrics: WardMetrics::default(),
        kv_demo_secret: redact_secret(demo_secret),
        note: "Synthetic data for interview demo",
    }
}

/// Mask a secret down to its first few characters plus `***`.
///
/// The placeholder goes through the same masking as a real value, so the
/// field never echoes a full secret regardless of configuration.
fn redact_secret(secret: Option<&str>) -> String {
    let secret = secret.unwrap_or(SECRET_PLACEHOLDER);
    format!("{}***", truncate_chars(secret, SECRET_VISIBLE_CHARS))
}
