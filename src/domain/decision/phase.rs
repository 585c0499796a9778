//! DecisionPhase - request lifecycle of a single decision view.

use std::fmt;

use super::Verdict;
use crate::domain::foundation::StateMachine;

/// Where a view is in its request lifecycle.
///
/// "Waiting for an answer" and "showing an answer" are separate variants,
/// so a view can never be loading while it displays a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecisionPhase {
    #[default]
    Idle,
    Pending,
    /// `verdict` is `None` when the request failed.
    Settled { verdict: Option<Verdict> },
}

impl DecisionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, DecisionPhase::Pending)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            DecisionPhase::Settled { verdict } => *verdict,
            _ => None,
        }
    }
}

impl StateMachine for DecisionPhase {
    // Valid transitions:
    // - Idle | Settled -> Pending (submit)
    // - Pending -> Settled (response or failure)
    // - Idle | Settled -> Idle (reset)
    fn can_transition_to(&self, target: &Self) -> bool {
        use DecisionPhase::*;
        matches!(
            (self, target),
            (Idle | Settled { .. }, Pending) | (Pending, Settled { .. }) | (Idle | Settled { .. }, Idle)
        )
    }
}

impl fmt::Display for DecisionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionPhase::Idle => "Idle",
            DecisionPhase::Pending => "Pending",
            DecisionPhase::Settled { .. } => "Settled",
        };
        write!(f, "{}", s)
    }
}
