//! HTTP handlers for the decide endpoint.
//!
//! These handlers connect Axum routes to the application layer command handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{MakeDecisionCommand, MakeDecisionHandler};

use super::dto::{DecideRequest, DecideResponse, ErrorResponse};

const INVALID_BODY_MESSAGE: &str =
    "Request body must be a JSON object with a string 'question' field";

const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body exceeds the configured size limit";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Decide API error that implements IntoResponse.
#[derive(Debug)]
pub enum DecideApiError {
    BadRequest(String),
    PayloadTooLarge(String),
}

impl DecideApiError {
    /// Maps an oversized body to 413 and every other body rejection
    /// (bad JSON, wrong shape, wrong content type) to 400.
    fn from_rejection(rejection: &JsonRejection, verbose: bool) -> Self {
        if let JsonRejection::BytesRejection(_) = rejection {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                return DecideApiError::PayloadTooLarge(PAYLOAD_TOO_LARGE_MESSAGE.to_string());
            }
        }
        if verbose {
            DecideApiError::BadRequest(format!(
                "{}: {}",
                INVALID_BODY_MESSAGE,
                rejection.body_text()
            ))
        } else {
            DecideApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
        }
    }
}

impl IntoResponse for DecideApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DecideApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DecideApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::payload_too_large(msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the decide endpoint.
#[derive(Clone)]
pub struct DecideAppState {
    pub handler: MakeDecisionHandler,
    /// Include parser detail in error messages.
    pub verbose_errors: bool,
}

impl DecideAppState {
    pub fn new(handler: MakeDecisionHandler) -> Self {
        Self {
            handler,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decide
///
/// Answers the submitted question with `{"answer":"YES"}` or `{"answer":"NO"}`.
pub async fn decide(
    State(state): State<DecideAppState>,
    payload: Result<Json<DecideRequest>, JsonRejection>,
) -> Result<Json<DecideResponse>, DecideApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(
            status = %rejection.status(),
            "Rejected decide request: {}",
            rejection.body_text()
        );
        DecideApiError::from_rejection(&rejection, state.verbose_errors)
    })?;

    let question_len = request.question.as_str().len();
    let answer = state.handler.handle(MakeDecisionCommand {
        question: request.question,
    });

    tracing::debug!(question_len, %answer, "Decided question");

    Ok(Json(DecideResponse { answer }))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: axum::http::Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
}
