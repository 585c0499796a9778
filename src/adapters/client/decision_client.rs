//! HTTP client for the decide endpoint.
//!
//! Speaks the same contract the presentation layer uses: one `POST
//! /api/decide` per submission, reading only the `answer` field.

use std::time::Duration;

use reqwest::{Client, Response};
use thiserror::Error;

use crate::adapters::http::decide::{DecideRequest, DecideResponse};
use crate::domain::decision::{DecisionView, Question, Verdict};
use crate::domain::foundation::ValidationError;

/// Errors surfaced by [`DecisionClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("cannot submit: {0}")]
    View(#[from] ValidationError),
}

/// Configuration for the decision client.
#[derive(Debug, Clone)]
pub struct DecisionClientConfig {
    /// Base URL of the service (default: http://127.0.0.1:8080).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DecisionClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for DecisionClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8080")
    }
}

/// Client for `POST /api/decide`.
#[derive(Debug, Clone)]
pub struct DecisionClient {
    config: DecisionClientConfig,
    client: Client,
}

impl DecisionClient {
    pub fn new(config: DecisionClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn decide_url(&self) -> String {
        format!("{}/api/decide", self.config.base_url.trim_end_matches('/'))
    }

    /// Asks the service to decide `question`.
    pub async fn decide(&self, question: &Question) -> Result<Verdict, ClientError> {
        let response = self
            .client
            .post(self.decide_url())
            .json(&DecideRequest {
                question: question.clone(),
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ClientError::Network(format!("Connection failed: {}", e))
                } else {
                    ClientError::Network(e.to_string())
                }
            })?;

        let response = Self::handle_response_status(response).await?;

        let body: DecideResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse response: {}", e)))?;

        Ok(body.answer)
    }

    /// Submits the view's question and settles the view with the outcome.
    ///
    /// A failed request settles the view with no verdict and returns the
    /// error; a view that cannot submit is left untouched.
    pub async fn ask(&self, view: &mut DecisionView) -> Result<Verdict, ClientError> {
        let question = view.submit()?;
        let result = self.decide(&question).await;

        view.settle(result.as_ref().ok().copied())?;
        if let Err(e) = &result {
            tracing::warn!("Decision request failed: {}", e);
        }
        result
    }

    async fn handle_response_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
