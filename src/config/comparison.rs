//! Comparison configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::decision::DEFAULT_SOFT_PENALTY;

/// Comparison configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    /// Penalty given to newly added constraints
    #[serde(default = "default_soft_penalty")]
    pub default_soft_penalty: f64,

    /// How new record ids are produced
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

/// Source of record identifiers
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Random,
    /// Counter-based, for reproducible output
    Sequential,
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Also rejects NaN
        if !(self.default_soft_penalty <= 0.0) {
            return Err(ValidationError::PositiveDefaultPenalty(
                self.default_soft_penalty,
            ));
        }
        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            default_soft_penalty: default_soft_penalty(),
            id_strategy: IdStrategy::default(),
        }
    }
}

fn default_soft_penalty() -> f64 {
    DEFAULT_SOFT_PENALTY
}
