mod config;
mod simulation;

pub use config::{ConfigError, DEFAULT_FILL_PROBABILITY, RuleStrings, SimulationConfig};
pub use simulation::Simulation;
