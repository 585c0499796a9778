//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{MakeDecisionCommand, MakeDecisionHandler, MakeDecisionResult};
