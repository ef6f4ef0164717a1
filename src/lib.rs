// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Run orchestration and configuration
pub mod application;

// Re-exports for convenience
pub use application::{ConfigError, RuleStrings, Simulation, SimulationConfig};
pub use domain::{Cell, Grid, History, NeighborCounts, OutOfRange, RuleError, RuleSet, extract_live_cells};
