use rand::Rng;

use super::Cell;
use crate::error::LifeError;

/// Grid is a fixed-size, row-major matrix of cells.
/// Both dimensions are compile-time constants, so every (row, col) in
/// `[0, R) x [0, C)` always holds exactly one cell and no heap is used.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[Cell; C]; R],
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// Create a new grid with all cells initially dead
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Dead; C]; R],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (R, C)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at position. Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Is the cell at (row, col) alive? Out-of-range cells count as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Borrow the rows in order
    pub const fn rows(&self) -> &[[Cell; C]; R] {
        &self.cells
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (row, col, cell))
        })
    }

    /// Count live cells
    pub fn population(&self) -> usize {
        self.iter_cells().filter(|(_, _, cell)| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells = [[Cell::Dead; C]; R];
    }

    /// Copy a smaller (or equal) grid into the top-left corner of this one.
    /// Cells outside the copied region keep their values. A seed larger
    /// than this grid in either dimension is rejected and nothing is written.
    pub fn overlay<const SR: usize, const SC: usize>(
        &mut self,
        seed: &Grid<SR, SC>,
    ) -> Result<(), LifeError> {
        if SR > R || SC > C {
            return Err(LifeError::ShapeMismatch {
                seed_rows: SR,
                seed_cols: SC,
                rows: R,
                cols: C,
            });
        }

        for (target, source) in self.cells.iter_mut().zip(seed.rows()) {
            target[..SC].copy_from_slice(source);
        }
        Ok(())
    }

    /// Randomize grid, each cell alive with probability `density`
    pub fn randomize<G: Rng>(&mut self, rng: &mut G, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }
}

impl<const R: usize, const C: usize> From<[[bool; C]; R]> for Grid<R, C> {
    fn from(layout: [[bool; C]; R]) -> Self {
        Self {
            cells: layout.map(|row| row.map(Cell::from_alive)),
        }
    }
}
