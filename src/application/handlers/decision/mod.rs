//! Decision command handlers.

mod make_decision;

pub use make_decision::{MakeDecisionCommand, MakeDecisionHandler, MakeDecisionResult};
