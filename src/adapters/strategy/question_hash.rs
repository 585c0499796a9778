//! Deterministic decision strategy keyed off the question text.

use sha2::{Digest, Sha256};

use crate::domain::decision::{Question, Verdict};
use crate::ports::DecisionStrategy;

/// Answers from the SHA-256 digest of the question's UTF-8 bytes.
///
/// Even first digest byte -> `YES`, odd -> `NO`. The same question always
/// gets the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionHashStrategy;

impl QuestionHashStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionStrategy for QuestionHashStrategy {
    fn decide(&self, question: &Question) -> Verdict {
        let digest = Sha256::digest(question.as_bytes());
        Verdict::from_bool(digest[0] % 2 == 0)
    }

    fn name(&self) -> &'static str {
        "question_hash"
    }
}
