//! Decision strategy adapters.
//!
//! Implementations of the `DecisionStrategy` port.
//!
//! ## Available Adapters
//!
//! - `RandomStrategy` - Independent draw per call, fair or weighted, optionally seeded
//! - `QuestionHashStrategy` - Deterministic answer from a SHA-256 of the question

mod question_hash;
mod random;

pub use question_hash::QuestionHashStrategy;
pub use random::RandomStrategy;
