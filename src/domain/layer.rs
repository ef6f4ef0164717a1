//! Live-cell extraction for the rendering collaborator.
//!
//! A renderer places one instanced point per returned coordinate pair,
//! at a depth given by the layer's position in the history.

use super::Grid;

/// Collect the coordinates of every live cell in row-major scan order.
///
/// Pure function over an immutable grid; safe to call concurrently on
/// different history entries.
pub fn extract_live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_cells()
        .filter(|&(_, _, cell)| cell.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_single_live_origin_cell() {
        let mut grid = Grid::new(4);
        grid.set(0, 0, Cell::Alive);

        assert_eq!(extract_live_cells(&grid), vec![(0, 0)]);
    }

    #[test]
    fn test_empty_grid_extracts_nothing() {
        assert!(extract_live_cells(&Grid::new(3)).is_empty());
    }

    #[test]
    fn test_row_major_scan_order() {
        let mut grid = Grid::new(3);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 1, Cell::Alive);
        grid.set(0, 2, Cell::Alive);

        assert_eq!(
            extract_live_cells(&grid),
            vec![(2, 0), (0, 1), (1, 1), (0, 2)]
        );
    }
}
