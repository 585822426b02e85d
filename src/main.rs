use std::io;

use console_life::{Life, LifeError, RunConfig, RunSummary, Simulation, presets};

const ROWS: usize = 10;
const COLS: usize = 10;

fn run() -> Result<RunSummary, LifeError> {
    let mut simulation: Simulation<ROWS, COLS> = Simulation::new(Life::new(), RunConfig::default());

    // Glider in a 4x3 layout, top-left aligned; the rest of the grid starts dead
    simulation.seed::<4, 3>(&presets::glider())?;

    let stdout = io::stdout();
    simulation.run(&mut stdout.lock())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("simulation stopped: {err}");
    }
}
