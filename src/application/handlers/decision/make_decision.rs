//! MakeDecisionHandler - Command handler turning a question into a verdict.

use std::sync::Arc;

use crate::domain::decision::{Question, Verdict};
use crate::ports::DecisionStrategy;

/// Command to decide a single question.
#[derive(Debug, Clone)]
pub struct MakeDecisionCommand {
    pub question: Question,
}

/// Result of a decision.
pub type MakeDecisionResult = Verdict;

/// Handler for deciding questions.
///
/// Delegates to whichever strategy was injected; the handler itself holds
/// no per-request state and cannot fail.
#[derive(Clone)]
pub struct MakeDecisionHandler {
    strategy: Arc<dyn DecisionStrategy>,
}

impl MakeDecisionHandler {
    pub fn new(strategy: Arc<dyn DecisionStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn handle(&self, cmd: MakeDecisionCommand) -> MakeDecisionResult {
        self.strategy.decide(&cmd.question)
    }
}
