//! grid_astar - A* shortest-path search on blocked grids
//!
//! This crate provides an 8-connected grid search engine with fixed
//! orthogonal and diagonal move costs, a Manhattan heuristic, and text and
//! gnuplot rendering of its results.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{AStarConfig, FrontierPolicy, GridCoord, GridPath, MoveKind};
pub use common::{GridPathPlanner, Visualizable};
pub use common::{AStarError, AStarResult};
pub use path_planning::{AStarPlanner, PathFinder, SearchOutcome};
