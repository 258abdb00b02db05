//! Cell index arithmetic for a fixed-size, row-major grid.
//!
//! Cells are addressed by a single index in `0..width * height`. The row of a
//! cell is `index / width` and its column is `index % width`.

use super::direction::Direction;

/// Row-major index of a grid cell
pub type Cell = usize;

/// Dimensions of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    pub fn row(&self, cell: Cell) -> usize {
        cell / self.width
    }

    pub fn col(&self, cell: Cell) -> usize {
        cell % self.width
    }

    /// Builds a cell index from a (row, col) pair
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        row * self.width + col
    }

    /// Cell reached by moving one step from `cell`, or `None` if the move
    /// would cross a row boundary or leave the grid.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }

        match direction {
            Direction::Right => (self.col(cell) + 1 < self.width).then(|| cell + 1),
            Direction::Left => (self.col(cell) > 0).then(|| cell - 1),
            Direction::Up => (self.row(cell) > 0).then(|| cell - self.width),
            Direction::Down => (self.row(cell) + 1 < self.height).then(|| cell + self.width),
        }
    }

    /// Direction of the single step that leads from `from` to `to`, if the
    /// two cells are adjacent.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(from, direction) == Some(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col() {
        let grid = Grid::new(15, 15);
        assert_eq!(grid.cell_count(), 225);
        assert_eq!(grid.row(171), 11);
        assert_eq!(grid.col(171), 6);
        assert_eq!(grid.cell_at(11, 6), 171);
    }

    #[test]
    fn test_horizontal_neighbors_stay_in_row() {
        let grid = Grid::new(15, 15);
        assert_eq!(grid.neighbor(171, Direction::Right), Some(172));
        assert_eq!(grid.neighbor(171, Direction::Left), Some(170));

        // Column 0 has no left neighbour, last column has no right one
        assert_eq!(grid.neighbor(165, Direction::Left), None);
        assert_eq!(grid.neighbor(0, Direction::Left), None);
        assert_eq!(grid.neighbor(14, Direction::Right), None);
        assert_eq!(grid.neighbor(224, Direction::Right), None);
    }

    #[test]
    fn test_vertical_neighbors_stay_in_range() {
        let grid = Grid::new(15, 15);
        assert_eq!(grid.neighbor(171, Direction::Up), Some(156));
        assert_eq!(grid.neighbor(171, Direction::Down), Some(186));

        assert_eq!(grid.neighbor(7, Direction::Up), None);
        assert_eq!(grid.neighbor(217, Direction::Down), None);
    }

    #[test]
    fn test_non_square_grid() {
        let grid = Grid::new(4, 2);
        assert_eq!(grid.neighbor(3, Direction::Down), Some(7));
        assert_eq!(grid.neighbor(7, Direction::Down), None);
        assert_eq!(grid.neighbor(3, Direction::Right), None);
        assert_eq!(grid.neighbor(4, Direction::Up), Some(0));
    }

    #[test]
    fn test_direction_between() {
        let grid = Grid::new(15, 15);
        assert_eq!(grid.direction_between(170, 171), Some(Direction::Right));
        assert_eq!(grid.direction_between(171, 170), Some(Direction::Left));
        assert_eq!(grid.direction_between(156, 171), Some(Direction::Down));
        assert_eq!(grid.direction_between(171, 156), Some(Direction::Up));
    }

    #[test]
    fn test_direction_between_rejects_wrapped_cells() {
        let grid = Grid::new(15, 15);
        // 14 and 15 differ by one but sit on different rows
        assert_eq!(grid.direction_between(14, 15), None);
        assert_eq!(grid.direction_between(10, 40), None);
        assert_eq!(grid.direction_between(10, 10), None);
    }
}
