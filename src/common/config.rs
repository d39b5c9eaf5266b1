//! Search configuration.
//!
//! Every field has a default, so a TOML file only needs to name the values
//! it changes:
//!
//! ```toml
//! orthogonal_cost = 10
//! diagonal_cost = 14
//! frontier = "lazy_deletion"
//! allow_corner_cutting = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::{AStarError, AStarResult};

/// Cost of a horizontal or vertical step
pub const ORTHOGONAL_COST: u32 = 10;
/// Cost of a diagonal step
pub const DIAGONAL_COST: u32 = 14;

/// How the open set handles a cell whose cost improves after it was queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierPolicy {
    /// Push the improved cell again; outdated entries are skipped when popped
    LazyDeletion,
    /// Keep the single entry with the priority it was queued with
    Faithful,
}

impl Default for FrontierPolicy {
    fn default() -> Self {
        FrontierPolicy::LazyDeletion
    }
}

/// Configuration for the A* search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarConfig {
    /// Cost of a horizontal or vertical step
    pub orthogonal_cost: u32,
    /// Cost of a diagonal step
    pub diagonal_cost: u32,
    /// Open set behavior on cost improvement
    pub frontier: FrontierPolicy,
    /// Allow diagonal steps past a blocked orthogonal neighbor
    pub allow_corner_cutting: bool,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            orthogonal_cost: ORTHOGONAL_COST,
            diagonal_cost: DIAGONAL_COST,
            frontier: FrontierPolicy::default(),
            allow_corner_cutting: true,
        }
    }
}

impl AStarConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> AStarResult<Self> {
        let config: AStarConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AStarResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> AStarResult<()> {
        if self.orthogonal_cost == 0 || self.diagonal_cost == 0 {
            return Err(AStarError::InvalidConfig(format!(
                "move costs must be positive (orthogonal={}, diagonal={})",
                self.orthogonal_cost, self.diagonal_cost
            )));
        }
        Ok(())
    }
}
