//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, traits and error types shared by the
//! decision domain.

mod errors;
mod percentage;
mod state_machine;

pub use errors::ValidationError;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
