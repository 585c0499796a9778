//! Decision engine configuration

use serde::Deserialize;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::strategy::{QuestionHashStrategy, RandomStrategy};
use crate::domain::foundation::Percentage;
use crate::ports::DecisionStrategy;

/// Which decision rule answers questions
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Independent draw per request
    #[default]
    Random,
    /// Deterministic answer from the question text
    QuestionHash,
}

/// Decision engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Chance of a YES answer for the random strategy
    #[serde(default = "default_yes_percent")]
    pub yes_percent: u8,

    /// Fixed seed for the random strategy (reproducible answers)
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Percentage::try_new(self.yes_percent)
            .map_err(|_| ValidationError::InvalidYesPercent(self.yes_percent))?;
        if self.seed.is_some() && self.strategy != StrategyKind::Random {
            return Err(ValidationError::SeedWithoutRandomStrategy);
        }
        Ok(())
    }

    /// Build the configured strategy
    pub fn build_strategy(&self) -> Result<Arc<dyn DecisionStrategy>, ValidationError> {
        self.validate()?;
        let strategy: Arc<dyn DecisionStrategy> = match self.strategy {
            StrategyKind::Random => {
                let share = Percentage::try_new(self.yes_percent)
                    .map_err(|_| ValidationError::InvalidYesPercent(self.yes_percent))?;
                match self.seed {
                    Some(seed) => Arc::new(RandomStrategy::seeded(share, seed)),
                    None => Arc::new(RandomStrategy::new(share)),
                }
            }
            StrategyKind::QuestionHash => Arc::new(QuestionHashStrategy::new()),
        };
        Ok(strategy)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            yes_percent: default_yes_percent(),
            seed: None,
        }
    }
}

fn default_yes_percent() -> u8 {
    50
}
