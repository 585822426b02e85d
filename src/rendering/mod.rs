use std::fmt;
use std::io::Write;

use crate::domain::{Cell, Grid};
use crate::error::LifeError;

/// Textual token used for each cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    /// `1` for alive, `0` for dead
    #[default]
    Digits,
    /// `true` for alive, `false` for dead
    Words,
}

impl Marker {
    pub const fn token(self, cell: Cell) -> &'static str {
        match (self, cell) {
            (Marker::Digits, Cell::Alive) => "1",
            (Marker::Digits, Cell::Dead) => "0",
            (Marker::Words, Cell::Alive) => "true",
            (Marker::Words, Cell::Dead) => "false",
        }
    }
}

/// A grid paired with the marker it is printed with.
/// Every token is followed by a space, one row per line.
pub struct Rendered<'a, const R: usize, const C: usize> {
    pub grid: &'a Grid<R, C>,
    pub marker: Marker,
}

impl<const R: usize, const C: usize> fmt::Display for Rendered<'_, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for &cell in row {
                write!(f, "{} ", self.marker.token(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Digit form of the grid, as printed by the console driver
impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered { grid: self, marker: Marker::Digits }.fmt(f)
    }
}

/// Write one generation followed by a blank line
pub fn render_grid<const R: usize, const C: usize, W: Write>(
    grid: &Grid<R, C>,
    marker: Marker,
    out: &mut W,
) -> Result<(), LifeError> {
    writeln!(out, "{}", Rendered { grid, marker })?;
    Ok(())
}
