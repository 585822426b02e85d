// Domain layer - Core business logic
pub mod domain;

// Application layer - Seeding and driving a run
pub mod application;

// Infrastructure layer - Text rendering
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, ConwayRule, Grid, Life, Pattern, Rule, presets};
pub use application::{RunConfig, RunSummary, Simulation, StopCondition};
pub use error::LifeError;
pub use rendering::{Marker, Rendered};
