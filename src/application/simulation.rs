use std::sync::Arc;

use log::{debug, info};
use rand::Rng;

use super::{ConfigError, SimulationConfig};
use crate::domain::{Grid, History, RuleSet};

/// Grids at or above this side length are stepped with the parallel kernel
const PARALLEL_THRESHOLD: usize = 128;

/// Simulation is one run of the automaton: a rule set, the current grid,
/// and the bounded history of past generations.
/// This is the application layer that coordinates domain logic.
///
/// A run only advances through `step`; randomness enters exactly once, at
/// the initial fill. Restart is wholesale replacement, never an in-place
/// reset, so grids already handed to readers stay untouched.
pub struct Simulation {
    config: SimulationConfig,
    rules: RuleSet,
    current: Arc<Grid>,
    history: History,
    generation: u64,
}

impl Simulation {
    /// Create a fresh run from `config`, filling the initial grid from
    /// the supplied random source.
    ///
    /// Validation and rule parsing happen before any state is built, so a
    /// bad configuration never produces a half-initialized run.
    pub fn new<R: Rng + ?Sized>(
        config: SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = RuleSet::parse(&config.rules.survival, &config.rules.birth)?;
        let current = Arc::new(Grid::random(
            config.grid_size,
            config.fill_probability,
            rng,
        ));
        let history = History::new(config.max_generations);
        info!(
            "new run: {size}x{size} grid, rule {rules}, {cap} layer cap",
            size = config.grid_size,
            cap = config.max_generations,
        );

        Ok(Self {
            config,
            rules,
            current,
            history,
            generation: 0,
        })
    }

    /// Advance the run by one generation.
    ///
    /// The entire next grid is computed against an immutable snapshot of
    /// the current one, appended to the history (evicting the oldest
    /// layer once the cap is reached), and installed as current. An
    /// extinct grid steps to another extinct grid; stopping on extinction
    /// is the scheduler's decision, not the engine's.
    pub fn step(mut self) -> Self {
        let next = if self.config.grid_size >= PARALLEL_THRESHOLD {
            self.current.step_parallel(self.rules)
        } else {
            self.current.step(self.rules)
        };
        let next = Arc::new(next);

        self.generation += 1;
        self.history.push(self.generation, Arc::clone(&next));
        self.current = next;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.current.population()
        );

        self
    }

    /// Discard this run and construct a new one from `config` with a
    /// fresh random fill.
    pub fn restart<R: Rng + ?Sized>(
        self,
        config: SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        info!("restart requested at generation {}", self.generation);
        Self::new(config, rng)
    }

    /// The most recently produced grid
    pub fn current(&self) -> &Arc<Grid> {
        &self.current
    }

    /// Number of generations produced so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Retained generation layers, oldest first
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The active rule set
    pub const fn rules(&self) -> RuleSet {
        self.rules
    }

    /// The configuration this run was built from
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// True when no cell in the current grid is alive
    pub fn is_extinct(&self) -> bool {
        self.current.population() == 0
    }
}
