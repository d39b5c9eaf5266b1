// Occupancy map definition
// Rows run along the grid's i axis, columns along j. Non-zero entries are blocked.

use std::ops::Deref;

use itertools::iproduct;
use nalgebra as na;

use crate::common::{AStarError, AStarResult, GridCoord};

#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyMap {
    grid: na::DMatrix<i32>,
}

impl OccupancyMap {
    /// Wrap `original_matrix`, repeating every entry into a `scale` x `scale` block
    pub fn new(original_matrix: na::DMatrix<i32>, scale: usize) -> AStarResult<Self> {
        if scale < 1 {
            return Err(AStarError::InvalidInput("scale must be >= 1".to_string()));
        }
        if original_matrix.is_empty() {
            return Err(AStarError::InvalidInput("occupancy map is empty".to_string()));
        }
        let grid = original_matrix.kronecker(&na::DMatrix::<i32>::repeat(scale, scale, 1));
        Ok(Self { grid })
    }

    /// Parse rows of `#` (blocked) and `.` (open)
    pub fn from_rows(rows: &[&str]) -> AStarResult<Self> {
        let height = rows.first().map_or(0, |row| row.chars().count());
        if rows.iter().any(|row| row.chars().count() != height) {
            return Err(AStarError::InvalidInput(
                "occupancy rows must all have the same length".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(rows.len() * height);
        for row in rows {
            for c in row.chars() {
                match c {
                    '#' => values.push(1),
                    '.' => values.push(0),
                    other => {
                        return Err(AStarError::InvalidInput(format!(
                            "unexpected occupancy character {:?}",
                            other
                        )))
                    }
                }
            }
        }

        Self::new(na::DMatrix::from_row_slice(rows.len(), height, &values), 1)
    }

    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        if coord.i < 0 || coord.j < 0 {
            return false;
        }
        self.grid
            .get((coord.i as usize, coord.j as usize))
            .map_or(false, |&v| v != 0)
    }

    pub fn blocked_cells(&self) -> Vec<GridCoord> {
        let (width, height) = self.grid.shape();
        iproduct!(0..width, 0..height)
            .filter(|&(i, j)| self.grid[(i, j)] != 0)
            .map(|(i, j)| GridCoord::new(i as i32, j as i32))
            .collect()
    }
}

impl Deref for OccupancyMap {
    type Target = na::DMatrix<i32>;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}
