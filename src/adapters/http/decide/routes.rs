//! Route configuration for the decide endpoint.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{decide, health, DecideAppState};

/// Creates the decision router.
///
/// Routes:
/// - `POST /api/decide` - Answer a yes/no question
/// - `GET /health` - Liveness probe
pub fn decide_router() -> Router<DecideAppState> {
    Router::new()
        .route("/api/decide", post(decide))
        .route("/health", get(health))
}
