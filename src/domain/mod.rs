//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, state machine trait, errors)
//! - `decision` - Questions, verdicts and the question-form lifecycle

pub mod decision;
pub mod foundation;
