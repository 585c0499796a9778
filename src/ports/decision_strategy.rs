//! Decision strategy port.
//!
//! The decision rule lives behind this trait so the HTTP endpoint never
//! knows which rule is active. Implementations exist for a uniform/weighted
//! random draw and for a deterministic hash of the question text.
//!
//! # Contract
//!
//! Implementations must:
//! - Accept any question, including the empty string
//! - Always return a verdict (the rule cannot fail)
//! - Perform no I/O, logging or storage
//! - Be safe to call from many request tasks at once

use crate::domain::decision::{Question, Verdict};

/// Maps a question to a verdict.
pub trait DecisionStrategy: Send + Sync {
    /// Decide the question.
    fn decide(&self, question: &Question) -> Verdict;

    /// Short identifier used in startup logs.
    fn name(&self) -> &'static str;
}
