//! Common types, traits, configuration and error definitions for grid_astar
//!
//! This module provides the building blocks shared by the search engine,
//! the reusable planner and the rendering utilities.

pub mod types;
pub mod traits;
pub mod error;
pub mod config;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use config::*;
