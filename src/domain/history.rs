use std::collections::VecDeque;
use std::sync::Arc;

use super::Grid;

/// History is the bounded chronological record of generations that the
/// renderer stacks into layers.
///
/// It behaves as a fixed-capacity ring: once `capacity` layers are held,
/// pushing a new one evicts the oldest, so the retained window slides
/// forward through time instead of growing without bound. Stored grids
/// are shared read-only, so a snapshot handed to a reader stays valid
/// after any number of later pushes.
#[derive(Clone, Debug)]
pub struct History {
    layers: VecDeque<(u64, Arc<Grid>)>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` layers
    pub fn new(capacity: usize) -> Self {
        Self {
            layers: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the grid produced for `generation`, evicting the oldest
    /// layer when the history is at capacity
    pub fn push(&mut self, generation: u64, grid: Arc<Grid>) {
        if self.layers.len() >= self.capacity {
            self.layers.pop_front();
        }
        self.layers.push_back((generation, grid));
    }

    /// Number of retained layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if no generation has been retained yet
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Maximum number of retained layers
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grid stored at layer `index`, where 0 is the oldest retained layer
    pub fn get(&self, index: usize) -> Option<&Arc<Grid>> {
        self.layers.get(index).map(|(_, grid)| grid)
    }

    /// Generation number of the oldest retained layer
    pub fn oldest_generation(&self) -> Option<u64> {
        self.layers.front().map(|(generation, _)| *generation)
    }

    /// Iterate layers oldest-first, tagged with their generation numbers
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Arc<Grid>)> {
        self.layers.iter().map(|(generation, grid)| (*generation, grid))
    }
}
