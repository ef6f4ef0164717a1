//! Configuration surface supplied by the external UI collaborator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RuleError;

/// Default probability that a cell starts alive in a fresh run.
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.25;

fn default_fill_probability() -> f64 {
    DEFAULT_FILL_PROBABILITY
}

/// Survival and birth rule strings as entered in the UI, parsed at run
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStrings {
    /// Neighbor counts that keep a live cell alive, e.g. "23"
    pub survival: String,
    /// Neighbor counts that bring a dead cell to life, e.g. "3"
    pub birth: String,
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lattice side length.
    pub grid_size: usize,
    /// Maximum number of retained generation layers.
    pub max_generations: usize,
    /// Tick interval in milliseconds. Pacing belongs to the scheduling
    /// collaborator; the engine never reads this.
    pub frame_delay: u64,
    /// Probability that a cell starts alive in a fresh run.
    #[serde(default = "default_fill_probability")]
    pub fill_probability: f64,
    /// Survival/birth rule strings.
    pub rules: RuleStrings,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 65,
            max_generations: 32,
            frame_delay: 200,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            rules: RuleStrings {
                survival: "23".to_owned(),
                birth: "3".to_owned(),
            },
        }
    }
}

impl SimulationConfig {
    /// Validate the configuration, failing fast before any run state is
    /// built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::InvalidMaxGenerations);
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(ConfigError::InvalidFillProbability(self.fill_probability));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    InvalidGridSize,
    #[error("max generations must be positive")]
    InvalidMaxGenerations,
    #[error("fill probability {0} is outside [0, 1]")]
    InvalidFillProbability(f64),
    #[error("invalid rule string: {0}")]
    InvalidRule(#[from] RuleError),
}
