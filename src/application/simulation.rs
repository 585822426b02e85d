use std::io::Write;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::domain::{ConwayRule, Grid, Life, Pattern, Rule};
use crate::error::LifeError;
use crate::rendering::{self, Marker};

/// When a run may end before its generation budget is spent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StopCondition {
    /// Always run the full generation count
    #[default]
    Never,
    /// Stop once a generation has no live cells
    Extinct,
    /// Stop once a generation is identical to the one before it
    Stable,
}

impl StopCondition {
    fn should_stop<const R: usize, const C: usize>(self, previous: &Grid<R, C>, current: &Grid<R, C>) -> bool {
        match self {
            StopCondition::Never => false,
            StopCondition::Extinct => current.is_empty(),
            StopCondition::Stable => previous == current,
        }
    }
}

/// Driver settings. The console binary always runs with the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of updates after the seeded generation
    pub generations: u64,
    /// Pause after each rendered update
    pub delay: Duration,
    pub marker: Marker,
    pub stop: StopCondition,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            delay: Duration::from_millis(50),
            marker: Marker::Digits,
            stop: StopCondition::Never,
        }
    }
}

/// Outcome of a finished run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Last generation rendered (0 is the seed)
    pub generations: u64,
    pub population: usize,
    pub stopped_early: bool,
}

/// Simulation drives an engine: seeds it, steps it and renders each generation.
/// The generation counter lives here, not in the engine.
pub struct Simulation<const R: usize, const C: usize, T = ConwayRule> {
    life: Life<R, C, T>,
    config: RunConfig,
    generation: u64,
}

impl<const R: usize, const C: usize, T: Rule> Simulation<R, C, T> {
    pub fn new(life: Life<R, C, T>, config: RunConfig) -> Self {
        Self {
            life,
            config,
            generation: 0,
        }
    }

    pub fn life(&self) -> &Life<R, C, T> {
        &self.life
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build `pattern` in an `SR x SC` seed grid and install it at the
    /// top-left of the engine. Resets the generation counter.
    pub fn seed<const SR: usize, const SC: usize>(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        let seed: Grid<SR, SC> = pattern.to_grid()?;
        self.life.set_grid_from(&seed)?;
        self.generation = 0;
        debug!("seeded {} ({})", pattern.name(), pattern.description());
        Ok(())
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.life.update();
        self.generation += 1;
    }

    /// Render the current generation
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), LifeError> {
        rendering::render_grid(self.life.grid(), self.config.marker, out)?;
        out.flush()?;
        Ok(())
    }

    /// Render the seed, then update and render until the generation budget
    /// is spent or the stop condition fires.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, LifeError> {
        info!(
            "running {}x{} grid with {} ({}) for {} generations ({:?} apart)",
            R,
            C,
            self.life.rule().name(),
            self.life.rule().description(),
            self.config.generations,
            self.config.delay
        );

        self.render(out)?;

        let mut stopped_early = false;
        for _ in 0..self.config.generations {
            let previous = *self.life.grid();
            self.tick();
            self.render(out)?;
            debug!("generation {}: population {}", self.generation, self.life.population());

            if self.config.stop.should_stop(&previous, self.life.grid()) {
                warn!("stopping at generation {} ({:?})", self.generation, self.config.stop);
                stopped_early = true;
                break;
            }

            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }

        let summary = RunSummary {
            generations: self.generation,
            population: self.life.population(),
            stopped_early,
        };
        info!("finished: {:?}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, presets};

    fn quick(generations: u64, stop: StopCondition) -> RunConfig {
        RunConfig {
            generations,
            delay: Duration::ZERO,
            stop,
            ..RunConfig::default()
        }
    }

    fn blocks(output: &[u8]) -> Vec<String> {
        let text = String::from_utf8(output.to_vec()).unwrap();
        text.split_terminator("\n\n").map(str::to_owned).collect()
    }

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.generations, 100);
        assert_eq!(config.delay, Duration::from_millis(50));
        assert_eq!(config.marker, Marker::Digits);
        assert_eq!(config.stop, StopCondition::Never);
    }

    #[test]
    fn test_full_run_renders_every_generation() {
        let mut sim: Simulation<10, 10> = Simulation::new(Life::new(), quick(100, StopCondition::Never));
        sim.seed::<4, 3>(&presets::glider()).unwrap();

        let mut out = Vec::new();
        let summary = sim.run(&mut out).unwrap();

        assert_eq!(summary.generations, 100);
        assert!(!summary.stopped_early);
        let blocks = blocks(&out);
        assert_eq!(blocks.len(), 101);
        assert!(blocks.iter().all(|b| b.lines().count() == 10));
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 101 * 11);
    }

    #[test]
    fn test_first_block_is_seed() {
        let mut sim: Simulation<10, 10> = Simulation::new(Life::new(), quick(1, StopCondition::Never));
        sim.seed::<4, 3>(&presets::glider()).unwrap();

        let mut out = Vec::new();
        sim.run(&mut out).unwrap();

        let first = &blocks(&out)[0];
        let rows: Vec<_> = first.lines().collect();
        assert_eq!(rows[0], "0 1 0 0 0 0 0 0 0 0 ");
        assert_eq!(rows[1], "0 0 1 0 0 0 0 0 0 0 ");
        assert_eq!(rows[2], "1 1 1 0 0 0 0 0 0 0 ");
        assert_eq!(rows[3], "0 ".repeat(10));
    }

    #[test]
    fn test_glider_settles_in_corner() {
        // The glider runs into the bottom-right corner and becomes a block
        let mut sim: Simulation<10, 10> = Simulation::new(Life::new(), quick(100, StopCondition::Never));
        sim.seed::<4, 3>(&presets::glider()).unwrap();
        sim.run(&mut std::io::sink()).unwrap();

        let grid = sim.life().grid();
        for (r, c) in [(8, 8), (8, 9), (9, 8), (9, 9)] {
            assert_eq!(grid.get(r, c), Some(Cell::Alive));
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_seed_too_large_fails() {
        let mut sim: Simulation<3, 3> = Simulation::new(Life::new(), quick(1, StopCondition::Never));
        let err = sim.seed::<4, 3>(&presets::glider()).unwrap_err();
        assert!(matches!(err, LifeError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_pattern_too_large_for_seed_grid_fails() {
        let mut sim: Simulation<10, 10> = Simulation::new(Life::new(), quick(1, StopCondition::Never));
        let err = sim.seed::<2, 2>(&presets::glider()).unwrap_err();
        assert!(matches!(err, LifeError::PatternOutOfBounds { .. }));
    }

    #[test]
    fn test_stop_when_extinct() {
        let mut sim: Simulation<5, 5> = Simulation::new(Life::new(), quick(50, StopCondition::Extinct));
        let lonely = Pattern::new("Pair", "Dies at once", vec![(0, 0), (0, 1)]);
        sim.seed::<1, 2>(&lonely).unwrap();

        let mut out = Vec::new();
        let summary = sim.run(&mut out).unwrap();

        assert_eq!(summary.generations, 1);
        assert_eq!(summary.population, 0);
        assert!(summary.stopped_early);
        assert_eq!(blocks(&out).len(), 2);
    }

    #[test]
    fn test_stop_when_stable() {
        let mut sim: Simulation<6, 6> = Simulation::new(Life::new(), quick(50, StopCondition::Stable));
        sim.seed::<2, 2>(&presets::block()).unwrap();

        let summary = sim.run(&mut std::io::sink()).unwrap();
        assert_eq!(summary.generations, 1);
        assert_eq!(summary.population, 4);
        assert!(summary.stopped_early);
    }

    #[test]
    fn test_oscillator_is_not_stable() {
        let mut sim: Simulation<6, 6> = Simulation::new(Life::new(), quick(6, StopCondition::Stable));
        // Second row, so the vertical phase stays on the grid
        let blinker = Pattern::new("Blinker", "Oscillator (period 2)", vec![(1, 0), (1, 1), (1, 2)]);
        sim.seed::<3, 3>(&blinker).unwrap();

        let summary = sim.run(&mut std::io::sink()).unwrap();
        assert_eq!(summary.generations, 6);
        assert!(!summary.stopped_early);
    }

    #[test]
    fn test_tick_counts_generations() {
        let mut sim: Simulation<4, 4> = Simulation::new(Life::new(), RunConfig::default());
        sim.tick();
        sim.tick();
        assert_eq!(sim.generation(), 2);
    }
}
