// A* search on a randomly blocked grid
//
// Usage: random_grid [width] [height] [density] [seed]

use std::env;
use std::process;

use itertools::iproduct;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_astar::utils::{render_grid, render_solution};
use grid_astar::{AStarError, AStarResult, GridCoord, PathFinder, SearchOutcome};

fn arg_or<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> AStarResult<T> {
    match args.get(index) {
        Some(value) => value
            .parse()
            .map_err(|_| AStarError::InvalidInput(format!("cannot parse argument {:?}", value))),
        None => Ok(default),
    }
}

fn run() -> AStarResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let width: i32 = arg_or(&args, 0, 20)?;
    let height: i32 = arg_or(&args, 1, 12)?;
    let density: f64 = arg_or(&args, 2, 0.25)?;
    let seed: u64 = arg_or(&args, 3, 7)?;

    if !(0.0..=1.0).contains(&density) {
        return Err(AStarError::InvalidInput(format!(
            "density {} must lie in [0, 1]",
            density
        )));
    }

    let start = GridCoord::origin();
    let goal = GridCoord::new(width - 1, height - 1);
    let mut rng = StdRng::seed_from_u64(seed);
    let blocked: Vec<GridCoord> = iproduct!(0..width, 0..height)
        .map(GridCoord::from)
        .filter(|&c| c != start && c != goal && rng.gen_bool(density))
        .collect();
    info!("{}x{} grid, {} blocked cells, seed {}", width, height, blocked.len(), seed);

    let mut finder = PathFinder::new(width, height, start, goal, &blocked)?;
    print!("{}", render_grid(&finder));

    match finder.process() {
        SearchOutcome::Found => info!("closed {} cells", finder.closed_order().len()),
        SearchOutcome::NotFound => info!("goal unreachable"),
    }
    print!("{}", render_solution(&mut finder));

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
