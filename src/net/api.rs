//! REST API helpers for the PredictWell backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per user action, no retries. Every failure comes back as an
//! `ApiError` whose `inline_message` is shown in the page's output area.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const HEALTH_PATH: &str = "/api/health";
pub const RISK_SCORE_PATH: &str = "/api/risk-score";
pub const UPLOAD_CSV_PATH: &str = "/api/upload-csv";
/// Multipart field name carrying the uploaded CSV.
pub const CSV_FIELD: &str = "file";

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown inline in the output area for this failure.
    pub fn inline_message(&self) -> String {
        format!("Error: {self}")
    }
}

/// Where the backend lives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin prefix such as `https://api.example.org`. Empty means same origin.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute or origin-relative URL for an API `path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Body of `POST /api/risk-score`.
///
/// Fields left out of a form submission default to zero/empty/false, and
/// counts are plain numbers so `72.0` from a number input is accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskInput {
    pub age: f64,
    pub sex: String,
    pub heart_rate: f64,
    pub blood_pressure_sys: f64,
    pub respiration_rate: f64,
    pub oxygen_saturation: f64,
    pub gait_speed: f64,
    pub step_variability: f64,
    pub hrv: f64,
    pub sleep_hours: f64,
    pub recent_fall: bool,
    pub mobility_aid: bool,
    pub cognitive_score: f64,
    pub balance_test: f64,
    pub medication_count: f64,
}

/// Payload of `GET /api/health`, displayed verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(pub Value);

impl HealthStatus {
    /// `status` field, when the backend reports one.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn display(&self) -> String {
        display_json(&self.0)
    }
}

/// Response of `POST /api/risk-score`. Fields beyond `risk_score` are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    pub risk_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RiskResponse {
    pub fn band(&self) -> RiskBand {
        RiskBand::classify(self.risk_score)
    }
}

/// Display band for a risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// `< 6` is Low, `6..=15` is Moderate, anything else is High.
    pub fn classify(score: f64) -> Self {
        if score < 6.0 {
            Self::Low
        } else if score <= 15.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pretty JSON for verbatim display of a response payload.
pub fn display_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One-line summary shown above the raw risk response.
pub fn risk_summary(response: &RiskResponse) -> String {
    format!("Risk score: {} ({})", response.risk_score, response.band())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the backend status from `GET /api/health`.
///
/// # Errors
///
/// Returns an `ApiError` on network failure, non-2xx status, or bad JSON.
pub async fn fetch_health(config: &ApiConfig) -> Result<HealthStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Score a check-in via `POST /api/risk-score`.
///
/// # Errors
///
/// Returns an `ApiError` on network failure, non-2xx status, or bad JSON.
pub async fn submit_risk_score(config: &ApiConfig, input: &RiskInput) -> Result<RiskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(RISK_SCORE_PATH))
            .json(input)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, input);
        Err(ApiError::Unavailable)
    }
}

/// Upload a CSV file via multipart `POST /api/upload-csv`.
///
/// # Errors
///
/// Returns an `ApiError` on network failure, non-2xx status, or bad JSON.
#[cfg(feature = "hydrate")]
pub async fn upload_csv(config: &ApiConfig, file: &web_sys::File) -> Result<Value, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_blob_and_filename(CSV_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    let resp = gloo_net::http::Request::post(&config.endpoint(UPLOAD_CSV_PATH))
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}
