mod cell;
mod grid;
mod history;
mod layer;
mod rules;

pub use cell::Cell;
pub use grid::{Grid, OutOfRange};
pub use history::History;
pub use layer::extract_live_cells;
pub use rules::{NeighborCounts, RuleError, RuleSet};
