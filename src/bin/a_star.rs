// A* grid search demo
//
// Usage: a_star [config.toml] [--plot] [--show]

use std::env;
use std::process;

use log::{error, info};

use grid_astar::utils::{quick_plot, render_grid, render_scores, render_solution};
use grid_astar::{AStarConfig, AStarResult, GridCoord, PathFinder};

fn run() -> AStarResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let plot = args.iter().any(|a| a == "--plot");
    let show = args.iter().any(|a| a == "--show");
    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => {
            info!("loading config from {}", path);
            AStarConfig::from_file(path)?
        }
        None => AStarConfig::default(),
    };

    let blocked: Vec<GridCoord> = [(0, 4), (2, 2), (3, 1), (3, 3), (2, 1), (2, 3)]
        .iter()
        .map(|&c| GridCoord::from(c))
        .collect();

    let mut finder = PathFinder::with_config(
        5,
        5,
        GridCoord::new(0, 0),
        GridCoord::new(3, 2),
        &blocked,
        config,
    )?;

    print!("{}", render_grid(&finder));
    let outcome = finder.process();
    info!("search finished: {:?}", outcome);
    print!("{}", render_scores(&finder));
    print!("{}", render_solution(&mut finder));

    if let Some(path) = finder.path() {
        println!("Path cost: {}", path.cost(finder.config()));
        if plot || show {
            let vis = quick_plot(&finder, &format!("A* Grid Search ({} cells)", path.len()));
            if plot {
                let output_path = "img/path_planning/a_star_grid.png";
                vis.save_png(output_path, 800, 600)?;
                println!("Plot saved to: {}", output_path);
            }
            if show {
                vis.show()?;
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
