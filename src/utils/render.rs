//! Text rendering of a search: the raw grid, per-cell scores and the
//! solution overlay.
//!
//! Every cell takes four columns. `SO` marks the start, `DE` the goal and
//! `BL` a blocked position.

use std::fmt::Write;

use crate::common::GridCoord;
use crate::path_planning::{PathFinder, Slot};

fn render_rows<F>(finder: &PathFinder, mut cell_text: F) -> String
where
    F: FnMut(GridCoord, &Slot) -> String,
{
    let grid = finder.grid();
    let mut out = String::new();
    for i in 0..grid.width() {
        for j in 0..grid.height() {
            let coord = GridCoord::new(i as i32, j as i32);
            if let Some(slot) = grid.slot(coord) {
                out.push_str(&cell_text(coord, slot));
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

fn endpoint_marker(finder: &PathFinder, coord: GridCoord) -> Option<&'static str> {
    if coord == finder.grid().start() {
        Some("SO  ")
    } else if coord == finder.grid().goal() {
        Some("DE  ")
    } else {
        None
    }
}

/// Start, goal and blocked markers; open cells print as `0`
pub fn render_grid(finder: &PathFinder) -> String {
    let mut out = String::from("Grid:\n");
    out.push_str(&render_rows(finder, |coord, slot| {
        if let Some(marker) = endpoint_marker(finder, coord) {
            return marker.to_string();
        }
        match slot {
            Slot::Open(_) => format!("{:<3} ", 0),
            Slot::Blocked => "BL  ".to_string(),
        }
    }));
    out
}

/// Final cost of every open cell
pub fn render_scores(finder: &PathFinder) -> String {
    let mut out = String::from("Scores for cells:\n");
    out.push_str(&render_rows(finder, |_, slot| match slot {
        Slot::Open(cell) => format!("{:<3} ", cell.final_cost),
        Slot::Blocked => "BL  ".to_string(),
    }));
    out
}

/// Path listing from goal back to start followed by the grid with path
/// cells drawn as `X`. Reconstructs the path, which marks its cells.
pub fn render_solution(finder: &mut PathFinder) -> String {
    let path = match finder.path() {
        Some(path) => path,
        None => return "No possible path\n".to_string(),
    };

    let mut out = String::from("Path :\n");
    for (n, coord) in path.cells.iter().rev().enumerate() {
        let prefix = if n == 0 { "" } else { " -> " };
        let _ = writeln!(out, "{}{}", prefix, coord);
    }
    out.push('\n');

    let finder = &*finder;
    out.push_str(&render_rows(finder, |coord, slot| {
        if let Some(marker) = endpoint_marker(finder, coord) {
            return marker.to_string();
        }
        match slot {
            Slot::Open(cell) => format!("{:<3} ", if cell.on_path { "X" } else { "0" }),
            Slot::Blocked => "BL  ".to_string(),
        }
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> PathFinder {
        let blocked: Vec<GridCoord> = [(0, 4), (2, 2), (3, 1), (3, 3), (2, 1), (2, 3)]
            .iter()
            .map(|&c| GridCoord::from(c))
            .collect();
        PathFinder::new(5, 5, GridCoord::new(0, 0), GridCoord::new(3, 2), &blocked).unwrap()
    }

    #[test]
    fn test_render_grid() {
        let text = render_grid(&scenario());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Grid:");
        assert_eq!(lines[1], "SO  0   0   0   BL  ");
        assert_eq!(lines[3], "0   BL  BL  BL  0   ");
        assert_eq!(lines[4], "0   BL  DE  BL  0   ");
    }

    #[test]
    fn test_render_scores() {
        let mut finder = scenario();
        finder.process();
        let text = render_scores(&finder);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Scores for cells:");
        assert_eq!(lines[1], "0   14  27  41  BL  ");
        assert_eq!(lines[4], "39  BL  69  BL  71  ");
        assert_eq!(lines[5], "52  55  66  78  0   ");
    }

    #[test]
    fn test_render_solution() {
        let mut finder = scenario();
        finder.process();
        let text = render_solution(&mut finder);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Path :");
        assert_eq!(lines[1], "[3, 2]");
        assert_eq!(lines[2], " -> [4, 1]");
        assert_eq!(lines[6], " -> [0, 0]");
        assert_eq!(lines[8], "SO  0   0   0   BL  ");
        assert_eq!(lines[9], "X   0   0   0   0   ");
        assert_eq!(lines[12], "0   X   0   0   0   ");
    }

    #[test]
    fn test_render_no_path() {
        let blocked = vec![GridCoord::new(1, 0)];
        let mut finder =
            PathFinder::new(3, 1, GridCoord::new(0, 0), GridCoord::new(2, 0), &blocked).unwrap();
        finder.process();
        assert_eq!(render_solution(&mut finder), "No possible path\n");
    }
}
