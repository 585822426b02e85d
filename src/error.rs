use std::io;

/// Errors raised while seeding or rendering a simulation.
/// Stepping the automaton itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("seed grid is {seed_rows}x{seed_cols} but the target grid is only {rows}x{cols}")]
    ShapeMismatch {
        seed_rows: usize,
        seed_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("pattern {name} does not fit at ({row}, {col}) on a {rows}x{cols} grid")]
    PatternOutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("failed to write generation: {0}")]
    Io(#[from] io::Error),
}
