//! State machine trait for phase enums.
//!
//! Gives lifecycle enums one way to validate and perform transitions.

use std::fmt::Display;

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define which transitions are legal and get a validated
/// `transition_to` for free.
pub trait StateMachine: Sized + Copy + PartialEq + Display {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }
}
