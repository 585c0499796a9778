//! Random decision strategy.

use std::sync::{Mutex, PoisonError};

use crate::domain::decision::{Question, Verdict};
use crate::domain::foundation::Percentage;
use crate::ports::DecisionStrategy;

/// Draws a fresh verdict on every call, ignoring the question text.
///
/// `yes_share` sets the probability of `YES`; the default is a fair 50/50.
#[derive(Debug)]
pub struct RandomStrategy {
    yes_share: Percentage,
    source: RandomSource,
}

#[derive(Debug)]
enum RandomSource {
    /// fastrand's per-thread generator, seeded from the OS.
    ThreadLocal,
    /// A single generator with a fixed seed, shared behind a lock.
    Seeded(Mutex<fastrand::Rng>),
}

impl RandomStrategy {
    pub fn new(yes_share: Percentage) -> Self {
        Self {
            yes_share,
            source: RandomSource::ThreadLocal,
        }
    }

    /// Fair coin.
    pub fn fair() -> Self {
        Self::new(Percentage::HALF)
    }

    /// Reproducible sequence of verdicts for a given seed.
    pub fn seeded(yes_share: Percentage, seed: u64) -> Self {
        Self {
            yes_share,
            source: RandomSource::Seeded(Mutex::new(fastrand::Rng::with_seed(seed))),
        }
    }

    pub fn yes_share(&self) -> Percentage {
        self.yes_share
    }

    fn roll(&self) -> u8 {
        match &self.source {
            RandomSource::ThreadLocal => fastrand::u8(0..100),
            RandomSource::Seeded(rng) => rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .u8(0..100),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::fair()
    }
}

impl DecisionStrategy for RandomStrategy {
    fn decide(&self, _question: &Question) -> Verdict {
        Verdict::from_bool(self.yes_share.covers(self.roll()))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
