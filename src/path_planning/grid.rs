//! Grid and cell model for the A* search
//!
//! Every grid position holds a [`Slot`]: either an open [`Cell`] carrying
//! the search state, or [`Slot::Blocked`]. Blocked positions take no part
//! in the traversal at all.

use itertools::iproduct;

use crate::common::{AStarError, AStarResult, GridCoord, MoveKind};

/// Neighbor offsets in expansion order: the row above, the current row,
/// then the row below.
const NEIGHBOR_OFFSETS: [(i32, i32, MoveKind); 8] = [
    (-1, 0, MoveKind::Orthogonal),
    (-1, -1, MoveKind::Diagonal),
    (-1, 1, MoveKind::Diagonal),
    (0, -1, MoveKind::Orthogonal),
    (0, 1, MoveKind::Orthogonal),
    (1, 0, MoveKind::Orthogonal),
    (1, -1, MoveKind::Diagonal),
    (1, 1, MoveKind::Diagonal),
];

/// Search state of one traversable position
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub coord: GridCoord,
    /// Manhattan distance to the goal, fixed at construction
    pub heuristic_cost: u64,
    /// Heuristic plus accumulated cost of the best known path
    pub final_cost: u64,
    /// Storage index of the predecessor on the best known path
    pub parent: Option<usize>,
    /// Set by path reconstruction only
    pub on_path: bool,
}

impl Cell {
    fn new(coord: GridCoord, goal: GridCoord) -> Self {
        Cell {
            coord,
            heuristic_cost: coord.manhattan(&goal),
            final_cost: 0,
            parent: None,
            on_path: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Open(Cell),
    Blocked,
}

impl Slot {
    pub fn cell(&self) -> Option<&Cell> {
        match self {
            Slot::Open(cell) => Some(cell),
            Slot::Blocked => None,
        }
    }

    pub fn cell_mut(&mut self) -> Option<&mut Cell> {
        match self {
            Slot::Open(cell) => Some(cell),
            Slot::Blocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Slot::Blocked)
    }
}

/// Fixed-size field of slots, stored row by row along `i`
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    start: GridCoord,
    goal: GridCoord,
    slots: Vec<Slot>,
}

impl Grid {
    /// Build a grid with heuristics assigned to every position, then apply
    /// the blocked coordinates.
    pub fn new(
        width: i32,
        height: i32,
        start: GridCoord,
        goal: GridCoord,
        blocked: &[GridCoord],
    ) -> AStarResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(AStarError::InvalidInput(format!(
                "grid must not be empty (width={}, height={})",
                width, height
            )));
        }

        let slots = iproduct!(0..width, 0..height)
            .map(|(i, j)| Slot::Open(Cell::new(GridCoord::new(i, j), goal)))
            .collect();

        let mut grid = Grid {
            width: width as usize,
            height: height as usize,
            start,
            goal,
            slots,
        };

        grid.check_in_bounds(start, "start")?;
        grid.check_in_bounds(goal, "goal")?;

        for &coord in blocked {
            grid.block(coord)?;
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridCoord {
        self.start
    }

    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.i >= 0
            && coord.j >= 0
            && (coord.i as usize) < self.width
            && (coord.j as usize) < self.height
    }

    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.i as usize * self.height + coord.j as usize)
        } else {
            None
        }
    }

    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index / self.height) as i32, (index % self.height) as i32)
    }

    pub fn slot(&self, coord: GridCoord) -> Option<&Slot> {
        self.index_of(coord).map(|index| &self.slots[index])
    }

    /// Open cell at `coord`; `None` when blocked or out of bounds
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell> {
        self.slot(coord).and_then(Slot::cell)
    }

    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.slots.get(index).and_then(Slot::cell)
    }

    pub fn cell_at_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.slots.get_mut(index).and_then(Slot::cell_mut)
    }

    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        self.slot(coord).map_or(false, Slot::is_blocked)
    }

    /// Remove the cell at `coord` from the grid.
    ///
    /// Start and goal can never be blocked. Blocking a position twice is a
    /// no-op.
    pub fn block(&mut self, coord: GridCoord) -> AStarResult<()> {
        let index = self.check_in_bounds(coord, "blocked cell")?;
        if coord == self.start || coord == self.goal {
            return Err(AStarError::InvalidInput(format!(
                "cannot block {} which is the start or the goal",
                coord
            )));
        }
        self.slots[index] = Slot::Blocked;
        Ok(())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.slots.iter().filter_map(Slot::cell)
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells().count()
    }

    pub fn blocked_coords(&self) -> Vec<GridCoord> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_blocked())
            .map(|(index, _)| self.coord_of(index))
            .collect()
    }

    /// In-bounds neighbors of the cell at `index`, with the kind of step
    /// leading to each.
    ///
    /// Blocked neighbors are still reported; the cost update skips them.
    /// With `allow_corner_cutting` off, a diagonal is dropped when either
    /// orthogonal cell it passes is blocked.
    pub fn neighbors(&self, index: usize, allow_corner_cutting: bool) -> Vec<(usize, MoveKind)> {
        let coord = self.coord_of(index);
        let mut neighbors = Vec::with_capacity(NEIGHBOR_OFFSETS.len());

        for &(di, dj, kind) in NEIGHBOR_OFFSETS.iter() {
            let next = coord.offset(di, dj);
            let next_index = match self.index_of(next) {
                Some(next_index) => next_index,
                None => continue,
            };

            if kind == MoveKind::Diagonal
                && !allow_corner_cutting
                && (self.is_blocked(coord.offset(di, 0)) || self.is_blocked(coord.offset(0, dj)))
            {
                continue;
            }

            neighbors.push((next_index, kind));
        }

        neighbors
    }

    fn check_in_bounds(&self, coord: GridCoord, what: &str) -> AStarResult<usize> {
        self.index_of(coord).ok_or_else(|| {
            AStarError::InvalidInput(format!(
                "{} {} is outside the {}x{} grid",
                what, coord, self.width, self.height
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(list: &[(i32, i32)]) -> Vec<GridCoord> {
        list.iter().map(|&c| GridCoord::from(c)).collect()
    }

    #[test]
    fn test_heuristics_assigned() {
        let grid = Grid::new(5, 5, GridCoord::new(0, 0), GridCoord::new(3, 2), &[]).unwrap();
        assert_eq!(grid.cell(GridCoord::new(0, 0)).unwrap().heuristic_cost, 5);
        assert_eq!(grid.cell(GridCoord::new(3, 2)).unwrap().heuristic_cost, 0);
        assert_eq!(grid.cell(GridCoord::new(4, 4)).unwrap().heuristic_cost, 3);
        assert!(grid.cells().all(|c| c.final_cost == 0 && c.parent.is_none()));
    }

    #[test]
    fn test_blocked_cells_absent() {
        let blocked = coords(&[(0, 4), (2, 2), (2, 2)]);
        let grid = Grid::new(5, 5, GridCoord::new(0, 0), GridCoord::new(3, 2), &blocked).unwrap();
        assert!(grid.cell(GridCoord::new(2, 2)).is_none());
        assert!(grid.is_blocked(GridCoord::new(0, 4)));
        assert!(!grid.is_blocked(GridCoord::new(1, 1)));
        assert_eq!(grid.open_cell_count(), 23);
        assert_eq!(grid.blocked_coords(), coords(&[(0, 4), (2, 2)]));
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = Grid::new(4, 3, GridCoord::new(0, 0), GridCoord::new(3, 2), &[]).unwrap();
        let c = GridCoord::new(2, 1);
        let index = grid.index_of(c).unwrap();
        assert_eq!(index, 7);
        assert_eq!(grid.coord_of(index), c);
        assert_eq!(grid.index_of(GridCoord::new(4, 0)), None);
        assert_eq!(grid.index_of(GridCoord::new(0, -1)), None);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let s = GridCoord::origin();
        assert!(matches!(Grid::new(0, 5, s, s, &[]), Err(AStarError::InvalidInput(_))));
        assert!(matches!(Grid::new(5, -1, s, s, &[]), Err(AStarError::InvalidInput(_))));
    }

    #[test]
    fn test_out_of_bounds_endpoints_rejected() {
        let inside = GridCoord::new(1, 1);
        let outside = GridCoord::new(5, 0);
        assert!(matches!(Grid::new(5, 5, outside, inside, &[]), Err(AStarError::InvalidInput(_))));
        assert!(matches!(Grid::new(5, 5, inside, outside, &[]), Err(AStarError::InvalidInput(_))));
        assert!(matches!(
            Grid::new(5, 5, inside, GridCoord::new(0, 0), &coords(&[(7, 7)])),
            Err(AStarError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_blocked_endpoints_rejected() {
        let s = GridCoord::new(0, 0);
        let g = GridCoord::new(2, 2);
        assert!(matches!(Grid::new(3, 3, s, g, &[s]), Err(AStarError::InvalidInput(_))));
        assert!(matches!(Grid::new(3, 3, s, g, &[g]), Err(AStarError::InvalidInput(_))));
    }

    #[test]
    fn test_neighbors_in_corner() {
        let grid = Grid::new(3, 3, GridCoord::new(0, 0), GridCoord::new(2, 2), &[]).unwrap();
        let index = grid.index_of(GridCoord::new(0, 0)).unwrap();
        let found: Vec<GridCoord> = grid
            .neighbors(index, true)
            .into_iter()
            .map(|(n, _)| grid.coord_of(n))
            .collect();
        assert_eq!(found, coords(&[(0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn test_neighbors_expansion_order() {
        let grid = Grid::new(3, 3, GridCoord::new(0, 0), GridCoord::new(2, 2), &[]).unwrap();
        let index = grid.index_of(GridCoord::new(1, 1)).unwrap();
        let found: Vec<(GridCoord, MoveKind)> = grid
            .neighbors(index, true)
            .into_iter()
            .map(|(n, kind)| (grid.coord_of(n), kind))
            .collect();
        assert_eq!(found.len(), 8);
        assert_eq!(found[0], (GridCoord::new(0, 1), MoveKind::Orthogonal));
        assert_eq!(found[1], (GridCoord::new(0, 0), MoveKind::Diagonal));
        assert_eq!(found[7], (GridCoord::new(2, 2), MoveKind::Diagonal));
    }

    #[test]
    fn test_corner_cutting() {
        let blocked = coords(&[(1, 0)]);
        let grid = Grid::new(2, 2, GridCoord::new(0, 0), GridCoord::new(1, 1), &blocked).unwrap();
        let index = grid.index_of(GridCoord::new(0, 0)).unwrap();
        let diagonal = grid.index_of(GridCoord::new(1, 1)).unwrap();

        let cutting = grid.neighbors(index, true);
        assert!(cutting.contains(&(diagonal, MoveKind::Diagonal)));

        let strict = grid.neighbors(index, false);
        assert!(!strict.iter().any(|&(n, _)| n == diagonal));
    }
}
