//! Common types used throughout grid_astar

use std::fmt;

use crate::common::config::AStarConfig;

/// Integer position on the search grid.
///
/// `i` runs along the grid width, `j` along its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub i: i32,
    pub j: i32,
}

impl GridCoord {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    pub fn origin() -> Self {
        Self { i: 0, j: 0 }
    }

    /// Manhattan distance, the heuristic used by the search
    pub fn manhattan(&self, other: &GridCoord) -> u64 {
        let di = (i64::from(self.i) - i64::from(other.i)).unsigned_abs();
        let dj = (i64::from(self.j) - i64::from(other.j)).unsigned_abs();
        di + dj
    }

    pub fn offset(&self, di: i32, dj: i32) -> GridCoord {
        GridCoord::new(self.i + di, self.j + dj)
    }

    /// Kind of single step between two cells, `None` if they are not neighbors
    pub fn step_to(&self, other: &GridCoord) -> Option<MoveKind> {
        let di = (self.i - other.i).abs();
        let dj = (self.j - other.j).abs();
        match (di, dj) {
            (1, 0) | (0, 1) => Some(MoveKind::Orthogonal),
            (1, 1) => Some(MoveKind::Diagonal),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from(tuple: (i32, i32)) -> Self {
        Self { i: tuple.0, j: tuple.1 }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.i, self.j)
    }
}

/// One of the two step kinds of the 8-connected grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Orthogonal,
    Diagonal,
}

impl MoveKind {
    pub fn cost(&self, config: &AStarConfig) -> u64 {
        match self {
            MoveKind::Orthogonal => u64::from(config.orthogonal_cost),
            MoveKind::Diagonal => u64::from(config.diagonal_cost),
        }
    }
}

/// Path represented as a sequence of grid cells, start first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<GridCoord>,
}

impl GridPath {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<GridCoord>) -> Self {
        Self { cells }
    }

    pub fn push(&mut self, coord: GridCoord) {
        self.cells.push(coord);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<GridCoord> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<GridCoord> {
        self.cells.last().copied()
    }

    pub fn i_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.i as f64).collect()
    }

    pub fn j_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.j as f64).collect()
    }

    pub fn contains(&self, coord: &GridCoord) -> bool {
        self.cells.contains(coord)
    }

    /// Sum of the move costs along the path.
    ///
    /// Consecutive cells that are not grid neighbors contribute nothing;
    /// paths produced by the search never contain such pairs.
    pub fn cost(&self, config: &AStarConfig) -> u64 {
        self.cells
            .windows(2)
            .filter_map(|w| w[0].step_to(&w[1]))
            .map(|step| step.cost(config))
            .sum()
    }
}

impl Default for GridPath {
    fn default() -> Self {
        Self::new()
    }
}
