use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use super::{Cell, RuleSet};

/// Error returned for a coordinate read outside the lattice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cell ({x}, {y}) is outside the {size}x{size} lattice")]
pub struct OutOfRange {
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

/// Grid is one generation of the square 2D cell lattice.
/// Stepping produces a whole new grid from an immutable snapshot, so no
/// cell ever reads a partially updated neighborhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid with each cell independently alive with probability
    /// `fill_probability`, drawn from the supplied random source.
    ///
    /// Callers own the generator, so seeded runs reproduce exactly.
    pub fn random<R: Rng + ?Sized>(size: usize, fill_probability: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| Cell::from_alive(rng.random_bool(fill_probability)))
            .collect();
        Self { size, cells }
    }

    /// Lattice side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.get_index(x, y)])
    }

    /// Bounds-checked liveness read
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, OutOfRange> {
        self.get(x, y).map(Cell::is_alive).ok_or(OutOfRange {
            x,
            y,
            size: self.size,
        })
    }

    /// Set cell at position (for seeding a grid before a run starts)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors in the Moore neighborhood with a clamped
    /// boundary: cells beyond the lattice edge count as dead, never
    /// wrapped. Safe to call on edge and corner coordinates.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional step - returns the next generation (serial)
    pub fn step(&self, rules: RuleSet) -> Self {
        let cells = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.get(x, y).unwrap();
                let neighbors = self.count_live_neighbors(x, y);
                rules.next_state(current, neighbors)
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Parallel step using rayon for large grids
    /// Much faster for grids > 100x100
    pub fn step_parallel(&self, rules: RuleSet) -> Self {
        let cells: Vec<Cell> = (0..self.size)
            .into_par_iter()
            .flat_map(|y| (0..self.size).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.get(x, y).unwrap();
                let neighbors = self.count_live_neighbors(x, y);
                rules.next_state(current, neighbors)
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with_live(size: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(x, y) in live {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_is_alive_out_of_range() {
        let grid = Grid::new(3);
        assert_eq!(grid.is_alive(1, 1), Ok(false));
        assert_eq!(
            grid.is_alive(3, 0),
            Err(OutOfRange { x: 3, y: 0, size: 3 })
        );
        assert_eq!(
            grid.is_alive(0, 7),
            Err(OutOfRange { x: 0, y: 7, size: 3 })
        );
    }

    #[test]
    fn test_neighbor_count_interior() {
        // All 8 neighbors of the center alive
        let grid = grid_with_live(
            3,
            &[
                (0, 0), (1, 0), (2, 0),
                (0, 1),         (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        );
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbor_count_clamped_corner() {
        // Everything alive: a corner still only sees its 3 in-bounds neighbors
        let mut grid = Grid::new(3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(2, 2), 3);
    }

    #[test]
    fn test_neighbor_count_clamped_edge() {
        // An edge (non-corner) cell sees at most 5 neighbors
        let mut grid = Grid::new(3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_neighbor_count_does_not_wrap() {
        // A live cell on the right edge is not a neighbor of the left edge
        let grid = grid_with_live(3, &[(2, 1)]);
        assert_eq!(grid.count_live_neighbors(0, 1), 0);
    }

    #[test]
    fn test_step_all_dead_fixpoint_unless_birth_on_zero() {
        let dead = Grid::new(4);

        let conway = RuleSet::conway();
        assert_eq!(dead.step(conway).population(), 0);

        // With 0 in the birth set, every dead cell of a dead grid is born
        let zero_birth = RuleSet::parse("23", "0").unwrap();
        assert_eq!(dead.step(zero_birth).population(), 16);
    }

    #[test]
    fn test_blinker_oscillates_on_bounded_board() {
        // Middle row alive on a 3x3 bounded board
        let horizontal = grid_with_live(3, &[(0, 1), (1, 1), (2, 1)]);
        let vertical = grid_with_live(3, &[(1, 0), (1, 1), (1, 2)]);

        let stepped = horizontal.step(RuleSet::conway());
        assert_eq!(stepped, vertical);
        assert_eq!(stepped.step(RuleSet::conway()), horizontal);
    }

    #[test]
    fn test_step_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(33, 0.25, &mut rng);
        let rules = RuleSet::highlife();

        assert_eq!(grid.step(rules), grid.step_parallel(rules));
    }

    #[test]
    fn test_random_fill_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        assert_eq!(Grid::random(16, 0.3, &mut a), Grid::random(16, 0.3, &mut b));
    }

    #[test]
    fn test_random_fill_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(8, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::random(8, 1.0, &mut rng).population(), 64);
    }
}
