// Path Planning algorithms module

pub mod grid;
pub mod frontier;
pub mod a_star;
pub mod planner;

pub use grid::*;
pub use frontier::*;
pub use a_star::*;
pub use planner::*;
