//! Performance benchmark for the stepping engine on random soups

use std::time::Instant;

use console_life::{Grid, Life};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 0x5EED;
const DENSITY: f64 = 0.3;

/// Average milliseconds per generation on an `R x C` soup
fn benchmark<const R: usize, const C: usize>(iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut soup: Grid<R, C> = Grid::new();
    soup.randomize(&mut rng, DENSITY);

    let mut life: Life<R, C> = Life::new();
    life.set_grid(soup);

    let start = Instant::now();
    life.step_n(iterations as usize);
    let elapsed = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    log::debug!("{}x{}: final population {}", R, C, life.population());
    elapsed
}

fn report(size: &str, cells: usize, ms: f64) {
    println!(
        "{:>10} {:>12.3} {:>14.1}",
        size,
        ms,
        cells as f64 / (ms / 1000.0) / 1_000_000.0
    );
}

fn main() {
    env_logger::init();

    println!("=== Game of Life Engine Benchmark ===\n");

    let iterations = 200;

    println!("{:>10} {:>12} {:>14}", "Size", "ms/gen", "M cells/sec");
    println!("{:-<38}", "");

    report("10x10", 10 * 10, benchmark::<10, 10>(iterations));
    report("64x64", 64 * 64, benchmark::<64, 64>(iterations));
    report("256x256", 256 * 256, benchmark::<256, 256>(iterations));
    report("512x512", 512 * 512, benchmark::<512, 512>(iterations / 4));
}
