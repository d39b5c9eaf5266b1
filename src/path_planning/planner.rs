//! Reusable A* planner over a fixed occupancy map
//!
//! A [`PathFinder`] is spent after one query. `AStarPlanner` keeps the map
//! and configuration and builds a fresh search for each `plan` call.

use log::debug;

use crate::common::{AStarConfig, AStarError, AStarResult, GridCoord, GridPath, GridPathPlanner};
use crate::path_planning::a_star::{PathFinder, SearchOutcome};
use crate::utils::OccupancyMap;

pub struct AStarPlanner {
    map: OccupancyMap,
    config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(map: OccupancyMap, config: AStarConfig) -> AStarResult<Self> {
        config.validate()?;
        Ok(AStarPlanner { map, config })
    }

    /// Create from ASCII rows with default config (`#` blocked, `.` open)
    pub fn from_rows(rows: &[&str]) -> AStarResult<Self> {
        Self::new(OccupancyMap::from_rows(rows)?, AStarConfig::default())
    }

    pub fn map(&self) -> &OccupancyMap {
        &self.map
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Build the search for one query without running it
    pub fn path_finder(&self, start: GridCoord, goal: GridCoord) -> AStarResult<PathFinder> {
        let (width, height) = self.map.shape();
        PathFinder::with_config(
            width as i32,
            height as i32,
            start,
            goal,
            &self.map.blocked_cells(),
            self.config.clone(),
        )
    }
}

impl GridPathPlanner for AStarPlanner {
    fn plan(&self, start: GridCoord, goal: GridCoord) -> AStarResult<GridPath> {
        let mut finder = self.path_finder(start, goal)?;
        match finder.process() {
            SearchOutcome::Found => finder.path().ok_or(AStarError::NoPath),
            SearchOutcome::NotFound => {
                debug!("[AStarPlanner] no path from {} to {}", start, goal);
                Err(AStarError::NoPath)
            }
        }
    }
}
