mod cell;
mod grid;
mod life;
mod rules;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use life::Life;
pub use rules::{Rule, ConwayRule};
pub use patterns::{Pattern, presets};
