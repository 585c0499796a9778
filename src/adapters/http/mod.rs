//! HTTP adapters - REST API implementations.

pub mod decide;
pub mod server;

// Re-export key types for convenience
pub use decide::{decide_router, DecideAppState};
pub use server::{build_router, DecisionServer, ServerError};
