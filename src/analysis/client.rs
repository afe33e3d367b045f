//! Outbound call to the symptom analysis service.
//!
//! One POST per analysis, JSON in and JSON out. No retries; the only
//! timeout is whatever the reqwest client was built with.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{AnalyzeRequest, RawResponse};

/// Errors that can occur while talking to the analysis service.
#[derive(Debug)]
pub enum AnalysisError {
    /// Network-level failure (timeout, DNS, connection refused).
    Transport(String),
    /// Service answered with a non-2xx status.
    Status { status: u16, body: String },
    /// Body was not JSON, or lacked the `results` array.
    Parse(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Transport(msg) => write!(f, "transport error: {msg}"),
            AnalysisError::Status { status, body } => {
                write!(f, "analysis service error (HTTP {status}): {body}")
            }
            AnalysisError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Fixed enrichment flags sent alongside every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestFlags {
    pub enrich_with_llm: bool,
    pub top_conditions: u8,
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self {
            enrich_with_llm: true,
            top_conditions: 5,
        }
    }
}

#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Human-readable endpoint, for the title bar and logs.
    fn endpoint(&self) -> &str;

    /// Submit `text` for analysis and return the raw (un-normalized) response.
    async fn analyze(&self, text: &str) -> Result<RawResponse, AnalysisError>;
}

/// reqwest-backed client for the hosted analysis service.
pub struct HttpAnalysisClient {
    endpoint: String,
    flags: RequestFlags,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: String, flags: RequestFlags, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client ({e}), falling back to defaults");
            reqwest::Client::new()
        });

        Self {
            endpoint,
            flags,
            client,
        }
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn analyze(&self, text: &str) -> Result<RawResponse, AnalysisError> {
        let body = AnalyzeRequest {
            text: text.to_string(),
            enrich_with_llm: self.flags.enrich_with_llm,
            top_conditions: self.flags.top_conditions,
        };

        info!(
            "Analysis request: endpoint={}, text_len={}, enrich={}, top={}",
            self.endpoint,
            text.len(),
            body.enrich_with_llm,
            body.top_conditions
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        debug!("Analysis response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Analysis service error: {} - {}", status, err_body);
            return Err(AnalysisError::Status {
                status,
                body: err_body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let raw: RawResponse =
            serde_json::from_slice(&bytes).map_err(|e| AnalysisError::Parse(e.to_string()))?;

        info!("Analysis response parsed: {} result(s)", raw.result_count());
        Ok(raw)
    }
}
