//! Decision module - questions, verdicts and the per-view request lifecycle.

mod phase;
mod question;
mod verdict;
mod view;

pub use phase::DecisionPhase;
pub use question::Question;
pub use verdict::Verdict;
pub use view::{DecisionView, ViewDisplay};
