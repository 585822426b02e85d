//! The stepping engine.
//!
//! `Life` owns two grids: the published `current` generation and a working
//! `next` buffer. `update` derives every cell of `next` from `current` alone
//! and then swaps the two, so callers only ever observe whole generations.

use std::mem;

use super::{Cell, ConwayRule, Grid, Rule};
use crate::error::LifeError;

/// (row, col) offsets of the eight neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Game of Life engine on a finite `R x C` grid.
/// Cells beyond the border are treated as dead; the grid does not wrap.
#[derive(Clone, Debug)]
pub struct Life<const R: usize, const C: usize, T = ConwayRule> {
    current: Grid<R, C>,
    next: Grid<R, C>,
    rule: T,
}

impl<const R: usize, const C: usize> Life<R, C> {
    /// Create an engine with all cells dead, using Conway's rule
    pub fn new() -> Self {
        Self::with_rule(ConwayRule)
    }
}

impl<const R: usize, const C: usize> Default for Life<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize, T: Rule> Life<R, C, T> {
    pub fn with_rule(rule: T) -> Self {
        Self {
            current: Grid::new(),
            next: Grid::new(),
            rule,
        }
    }

    pub fn rule(&self) -> &T {
        &self.rule
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &Grid<R, C> {
        &self.current
    }

    /// Direct write access to the current generation.
    /// The engine does not protect its own invariants against external mutation;
    /// whatever is written here is what the next `update` evolves.
    pub fn grid_mut(&mut self) -> &mut Grid<R, C> {
        &mut self.current
    }

    /// Replace every cell of the current generation
    pub fn set_grid(&mut self, grid: Grid<R, C>) {
        self.current = grid;
    }

    /// Copy a seed into the top-left corner of the current generation.
    /// Cells the seed does not cover keep their values; a seed larger than
    /// the engine is rejected with `LifeError::ShapeMismatch`.
    pub fn set_grid_from<const SR: usize, const SC: usize>(
        &mut self,
        seed: &Grid<SR, SC>,
    ) -> Result<(), LifeError> {
        self.current.overlay(seed)?;
        log::trace!(
            "seeded {}x{} region, population now {}",
            SR,
            SC,
            self.current.population()
        );
        Ok(())
    }

    /// Count live neighbors, skipping offsets that fall outside the grid
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
            .filter(|&(r, c)| self.current.is_alive(r, c))
            .count() as u8
    }

    /// Advance one generation
    pub fn update(&mut self) {
        for row in 0..R {
            for col in 0..C {
                let cell = self.current.get(row, col).unwrap_or(Cell::Dead);
                let neighbors = self.live_neighbors(row, col);
                self.next.set(row, col, self.rule.evolve(cell, neighbors));
            }
        }

        mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance `n` generations
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.update();
        }
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }
}
