use super::{Cell, Grid};
use crate::error::LifeError;

/// Represents a pattern that can be placed on the grid.
/// The extent is derived from the cells, so the fields stay private.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    description: &'static str,
    rows: usize,
    cols: usize,
    cells: Vec<(usize, usize)>, // (row, col) of alive cells, relative to the top-left
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Bounding box as (rows, cols)
    pub fn extent(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Alive cells as (row, col) offsets from the top-left
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Place pattern on grid with its top-left corner at (row, col).
    /// Fails without touching the grid if any part would fall off it.
    pub fn place_on<const R: usize, const C: usize>(
        &self,
        grid: &mut Grid<R, C>,
        row: usize,
        col: usize,
    ) -> Result<(), LifeError> {
        let fits = |start: usize, len: usize, limit: usize| {
            start.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(row, self.rows, R) || !fits(col, self.cols, C) {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name,
                row,
                col,
                rows: R,
                cols: C,
            });
        }

        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
        Ok(())
    }

    /// Render the pattern into its own grid, anchored at the top-left
    pub fn to_grid<const R: usize, const C: usize>(&self) -> Result<Grid<R, C>, LifeError> {
        let mut grid = Grid::new();
        self.place_on(&mut grid, 0, 0)?;
        Ok(grid)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Beehive - still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 3),
                (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            beehive(),
            r_pentomino(),
        ]
    }
}
