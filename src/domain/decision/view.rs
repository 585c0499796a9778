//! DecisionView - per-view state of a question form.
//!
//! Holds the editable question text and the request phase for one view.
//! Transport is not handled here; callers submit, perform the request, and
//! report the outcome back through [`DecisionView::settle`].

use std::fmt;

use super::{DecisionPhase, Question, Verdict};
use crate::domain::foundation::{StateMachine, ValidationError};

/// State of one question form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionView {
    question: String,
    phase: DecisionPhase,
}

impl DecisionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn phase(&self) -> DecisionPhase {
        self.phase
    }

    /// Replaces the question text. Refused while a request is pending.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        if self.phase.is_pending() {
            return Err(ValidationError::invalid_transition(self.phase, "Editing"));
        }
        self.question = text.into();
        Ok(())
    }

    /// True when the question is non-blank and no request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.phase.is_pending() && !self.question.trim().is_empty()
    }

    /// Moves to `Pending` and returns the question to send.
    ///
    /// The text is sent as typed; only the emptiness check trims it.
    pub fn submit(&mut self) -> Result<Question, ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        self.phase = self.phase.transition_to(DecisionPhase::Pending)?;
        Ok(Question::new(self.question.clone()))
    }

    /// Records the outcome of the in-flight request.
    ///
    /// `None` means the request failed; the view settles with no verdict.
    pub fn settle(&mut self, verdict: Option<Verdict>) -> Result<(), ValidationError> {
        self.phase = self
            .phase
            .transition_to(DecisionPhase::Settled { verdict })?;
        Ok(())
    }

    /// Clears the question and any verdict. Refused while pending.
    pub fn reset(&mut self) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(DecisionPhase::Idle)?;
        self.question.clear();
        Ok(())
    }

    /// What the answer area shows for the current phase.
    pub fn display(&self) -> ViewDisplay {
        match self.phase {
            DecisionPhase::Pending => ViewDisplay::Deciding,
            DecisionPhase::Settled {
                verdict: Some(verdict),
            } => ViewDisplay::Verdict(verdict),
            _ => ViewDisplay::Prompt,
        }
    }
}

/// Content of the answer area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDisplay {
    Deciding,
    Verdict(Verdict),
    Prompt,
}

impl fmt::Display for ViewDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewDisplay::Deciding => write!(f, "Deciding..."),
            ViewDisplay::Verdict(verdict) => write!(f, "{} {}", verdict, verdict.emoji()),
            ViewDisplay::Prompt => write!(f, "Ask a question"),
        }
    }
}
