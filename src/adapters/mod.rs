//! Adapters - Implementations of ports and transport boundaries.
//!
//! - `strategy` - Decision strategies implementing `DecisionStrategy`
//! - `http` - Axum server exposing the decide endpoint
//! - `client` - HTTP client for the decide endpoint

pub mod client;
pub mod http;
pub mod strategy;
