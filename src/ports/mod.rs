//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionStrategy` - The pluggable rule that turns a question into a verdict

mod decision_strategy;

pub use decision_strategy::DecisionStrategy;
