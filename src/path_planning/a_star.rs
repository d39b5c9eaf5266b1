//! A* search over a grid of open and blocked cells
//!
//! The engine moves in 8 directions: orthogonal steps cost 10 and diagonal
//! steps cost 14 by default, and the Manhattan distance to the goal is the
//! heuristic.
//!
//! A cell's `final_cost` holds its heuristic plus the tentative cost
//! through its parent, and the tentative cost of a neighbor is built from
//! the expanding cell's `final_cost`. Heuristic terms therefore accumulate
//! along a path. Scores and tie-breaks depend on this convention.
//!
//! Costs are `u64` and every addition is checked. Construction rejects a
//! grid whose worst-case path cost does not fit.

use log::{debug, trace, warn};
use std::convert::TryFrom;
use nalgebra::DMatrix;

use crate::common::{
    AStarConfig, AStarError, AStarResult, GridCoord, GridPath, Visualizable,
};
use crate::path_planning::frontier::Frontier;
use crate::path_planning::grid::Grid;
use crate::utils::{colors, PathStyle, PointStyle, Visualizer};

/// Terminal state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal cell was taken from the open set
    Found,
    /// The open set ran empty first
    NotFound,
}

/// A* search engine owning its grid, open set and closed set.
///
/// A `PathFinder` answers a single start/goal query. Build a new one for
/// every query.
#[derive(Debug, Clone)]
pub struct PathFinder {
    grid: Grid,
    frontier: Frontier,
    closed: Vec<bool>,
    closed_order: Vec<usize>,
    start_index: usize,
    goal_index: usize,
    config: AStarConfig,
    outcome: Option<SearchOutcome>,
}

impl PathFinder {
    /// Create a search with the default move costs
    pub fn new(
        width: i32,
        height: i32,
        start: GridCoord,
        goal: GridCoord,
        blocked: &[GridCoord],
    ) -> AStarResult<Self> {
        Self::with_config(width, height, start, goal, blocked, AStarConfig::default())
    }

    pub fn with_config(
        width: i32,
        height: i32,
        start: GridCoord,
        goal: GridCoord,
        blocked: &[GridCoord],
        config: AStarConfig,
    ) -> AStarResult<Self> {
        config.validate()?;
        let mut grid = Grid::new(width, height, start, goal, blocked)?;
        let bound = worst_case_cost(grid.open_cell_count(), grid.width(), grid.height(), &config);
        if bound.is_none() {
            return Err(AStarError::InvalidInput(format!(
                "path costs on a {}x{} grid could exceed the u64 range",
                width, height
            )));
        }

        let start_index = Self::endpoint_index(&grid, start)?;
        let goal_index = Self::endpoint_index(&grid, goal)?;

        if let Some(cell) = grid.cell_at_mut(start_index) {
            cell.final_cost = 0;
        }

        let capacity = grid.slots().len();
        debug!(
            "[AStar] grid {}x{} start={} goal={} blocked={}",
            width,
            height,
            start,
            goal,
            capacity - grid.open_cell_count()
        );

        Ok(PathFinder {
            grid,
            frontier: Frontier::new(capacity, config.frontier),
            closed: vec![false; capacity],
            closed_order: Vec::new(),
            start_index,
            goal_index,
            config,
            outcome: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Outcome of `process()`, `None` until it has run
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Block one more cell. Only allowed before the search runs.
    pub fn block_cell(&mut self, coord: GridCoord) -> AStarResult<()> {
        if self.outcome.is_some() {
            return Err(AStarError::InvalidInput(format!(
                "cannot block {} after the search has run",
                coord
            )));
        }
        self.grid.block(coord)
    }

    pub fn is_closed(&self, coord: GridCoord) -> bool {
        self.grid
            .index_of(coord)
            .map_or(false, |index| self.closed[index])
    }

    pub fn is_open(&self, coord: GridCoord) -> bool {
        self.grid
            .index_of(coord)
            .map_or(false, |index| self.frontier.contains(index))
    }

    /// Cells in the order they were closed
    pub fn closed_order(&self) -> Vec<GridCoord> {
        self.closed_order
            .iter()
            .map(|&index| self.grid.coord_of(index))
            .collect()
    }

    pub fn final_cost(&self, coord: GridCoord) -> Option<u64> {
        self.grid.cell(coord).map(|cell| cell.final_cost)
    }

    /// Final cost of every position, `None` for blocked ones.
    /// Rows run along `i`, columns along `j`.
    pub fn final_costs(&self) -> DMatrix<Option<u64>> {
        DMatrix::from_fn(self.grid.width(), self.grid.height(), |i, j| {
            self.final_cost(GridCoord::new(i as i32, j as i32))
        })
    }

    /// Apply the cost update rule to `neighbor` as reached from `current`.
    ///
    /// Out-of-bounds, blocked and closed neighbors are left alone. A
    /// neighbor not yet queued always takes the new cost and is queued; a
    /// queued one only takes it when it is strictly lower.
    pub fn update_cost_if_needed(
        &mut self,
        current: GridCoord,
        neighbor: GridCoord,
        tentative_cost: u64,
    ) {
        let current_index = match self.grid.index_of(current) {
            Some(index) if self.grid.cell_at(index).is_some() => index,
            _ => return,
        };
        if let Some(neighbor_index) = self.grid.index_of(neighbor) {
            self.relax(current_index, neighbor_index, tentative_cost);
        }
    }

    /// Run the search until the goal is closed or the open set is empty.
    ///
    /// Calling it again returns the recorded outcome.
    pub fn process(&mut self) -> SearchOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        self.frontier.push(self.start_index, 0);

        let outcome = loop {
            let current = match self.frontier.pop() {
                Some(index) => index,
                None => break SearchOutcome::NotFound,
            };

            self.closed[current] = true;
            self.closed_order.push(current);

            if current == self.goal_index {
                break SearchOutcome::Found;
            }

            let current_cost = match self.grid.cell_at(current) {
                Some(cell) => cell.final_cost,
                None => continue,
            };
            trace!(
                "[AStar] expand {} final_cost={} open={}",
                self.grid.coord_of(current),
                current_cost,
                self.frontier.len()
            );

            for (neighbor, kind) in self
                .grid
                .neighbors(current, self.config.allow_corner_cutting)
            {
                match current_cost.checked_add(kind.cost(&self.config)) {
                    Some(tentative) => self.relax(current, neighbor, tentative),
                    None => warn!(
                        "[AStar] cost overflow stepping from {}, neighbor skipped",
                        self.grid.coord_of(current)
                    ),
                }
            }
        };

        debug!(
            "[AStar] {:?} after closing {} of {} cells",
            outcome,
            self.closed_order.len(),
            self.grid.open_cell_count()
        );
        self.outcome = Some(outcome);
        outcome
    }

    /// Path from start to goal, marking every cell on it.
    ///
    /// `None` unless the goal has been closed by `process()`.
    pub fn path(&mut self) -> Option<GridPath> {
        let path = self.trace_path()?;
        for &coord in &path.cells {
            if let Some(cell) = self
                .grid
                .index_of(coord)
                .and_then(|index| self.grid.cell_at_mut(index))
            {
                cell.on_path = true;
            }
        }
        Some(path)
    }

    /// Follow parent links from the goal without marking anything
    pub fn trace_path(&self) -> Option<GridPath> {
        if !self.closed[self.goal_index] {
            return None;
        }

        let mut cells = Vec::new();
        let mut current = Some(self.goal_index);
        while let Some(index) = current {
            let cell = self.grid.cell_at(index)?;
            cells.push(cell.coord);
            current = cell.parent;
        }

        cells.reverse();
        Some(GridPath::from_cells(cells))
    }

    fn relax(&mut self, current: usize, neighbor: usize, tentative_cost: u64) {
        if self.closed[neighbor] {
            return;
        }
        let is_open = self.frontier.contains(neighbor);
        let cell = match self.grid.cell_at_mut(neighbor) {
            Some(cell) => cell,
            None => return,
        };

        let tentative_final = match cell.heuristic_cost.checked_add(tentative_cost) {
            Some(cost) => cost,
            None => {
                warn!("[AStar] cost overflow reaching {}, update skipped", cell.coord);
                return;
            }
        };
        if !is_open || tentative_final < cell.final_cost {
            cell.final_cost = tentative_final;
            cell.parent = Some(current);
            if is_open {
                self.frontier.decrease(neighbor, tentative_final);
            }
        }

        if !is_open {
            self.frontier.push(neighbor, cell.final_cost);
        }
    }

    fn endpoint_index(grid: &Grid, coord: GridCoord) -> AStarResult<usize> {
        grid.index_of(coord).ok_or_else(|| {
            AStarError::InvalidInput(format!("{} is outside the grid", coord))
        })
    }
}

/// Upper bound on any final cost: a path visits each open cell at most once
/// and every step adds one heuristic term and one move cost
fn worst_case_cost(
    open_cells: usize,
    width: usize,
    height: usize,
    config: &AStarConfig,
) -> Option<u64> {
    let max_move = config.orthogonal_cost.max(config.diagonal_cost);
    let step = width as u128 + height as u128 + u128::from(max_move);
    u64::try_from(open_cells as u128 * step).ok()
}

impl Visualizable for PathFinder {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_grid_bounds(self.grid.width(), self.grid.height());
        vis.plot_blocked(&self.grid.blocked_coords());
        vis.plot_cells(
            &self.closed_order(),
            &PointStyle::new(colors::CLOSED, "Closed").with_size(0.5),
        );
        if let Some(path) = self.trace_path() {
            vis.plot_path(&path, &PathStyle::default());
        }
        vis.plot_start(self.grid.start());
        vis.plot_goal(self.grid.goal());
    }
}
