//! Utility modules for grid_astar

pub mod grid_map;
pub mod render;
pub mod visualization;

pub use grid_map::*;
pub use render::{render_grid, render_scores, render_solution};
pub use visualization::{colors, quick_plot, PathStyle, PointStyle, Visualizer};
