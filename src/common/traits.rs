//! Common traits defining interfaces for grid search

use crate::common::error::AStarResult;
use crate::common::types::*;

/// Trait for grid-based path planning algorithms
pub trait GridPathPlanner {
    /// Plan a path on a grid from start to goal
    fn plan(&self, start: GridCoord, goal: GridCoord) -> AStarResult<GridPath>;
}

/// Trait for visualizable algorithms
pub trait Visualizable {
    /// Draw current state to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::AStarError;

    struct StraightLinePlanner;

    impl GridPathPlanner for StraightLinePlanner {
        fn plan(&self, start: GridCoord, goal: GridCoord) -> AStarResult<GridPath> {
            if start.i != goal.i {
                return Err(AStarError::NoPath);
            }
            let step = if goal.j >= start.j { 1 } else { -1 };
            let mut path = GridPath::new();
            let mut j = start.j;
            path.push(start);
            while j != goal.j {
                j += step;
                path.push(GridCoord::new(start.i, j));
            }
            Ok(path)
        }
    }

    #[test]
    fn test_grid_path_planner_trait() {
        let planner: &dyn GridPathPlanner = &StraightLinePlanner;
        let path = planner.plan(GridCoord::new(1, 0), GridCoord::new(1, 3)).unwrap();
        assert_eq!(path.len(), 4);
        assert!(planner.plan(GridCoord::new(0, 0), GridCoord::new(1, 1)).is_err());
    }
}
