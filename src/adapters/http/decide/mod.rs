//! Decide HTTP adapter module.
//!
//! Provides the `POST /api/decide` endpoint and the health probe.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{DecideRequest, DecideResponse, ErrorResponse};
pub use handlers::{DecideApiError, DecideAppState};
pub use routes::decide_router;
