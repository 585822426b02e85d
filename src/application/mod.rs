mod simulation;

pub use simulation::{RunConfig, RunSummary, Simulation, StopCondition};
