//! Visualization utilities for grid_astar
//!
//! Draws grids, blocked cells and paths with gnuplot. The i axis is
//! plotted horizontally and the j axis vertically.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{AStarError, AStarResult, GridCoord, GridPath, Visualizable};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const BLOCKED: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const CLOSED: &str = GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Path")
    }
}

/// Style for cell markers
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// One series drawn on the shared axes
#[derive(Debug, Clone)]
enum Layer {
    Lines { i: Vec<f64>, j: Vec<f64>, style: PathStyle },
    Points { i: Vec<f64>, j: Vec<f64>, style: PointStyle },
}

/// Collects layers and draws them onto a single set of axes when the
/// figure is shown or saved
pub struct Visualizer {
    layers: Vec<Layer>,
    title: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            title: String::new(),
            x_range: None,
            y_range: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Fit the axes to a `width` x `height` grid
    pub fn plot_grid_bounds(&mut self, width: usize, height: usize) -> &mut Self {
        self.x_range = Some((-0.5, width as f64 - 0.5));
        self.y_range = Some((-0.5, height as f64 - 0.5));
        self
    }

    pub fn plot_path(&mut self, path: &GridPath, style: &PathStyle) -> &mut Self {
        self.layers.push(Layer::Lines {
            i: path.i_coords(),
            j: path.j_coords(),
            style: style.clone(),
        });
        self
    }

    pub fn plot_cells(&mut self, cells: &[GridCoord], style: &PointStyle) -> &mut Self {
        self.layers.push(Layer::Points {
            i: cells.iter().map(|c| c.i as f64).collect(),
            j: cells.iter().map(|c| c.j as f64).collect(),
            style: style.clone(),
        });
        self
    }

    pub fn plot_blocked(&mut self, cells: &[GridCoord]) -> &mut Self {
        let style = PointStyle::new(colors::BLOCKED, "Blocked")
            .with_symbol('S')
            .with_size(2.0);
        self.plot_cells(cells, &style)
    }

    pub fn plot_start(&mut self, coord: GridCoord) -> &mut Self {
        self.plot_cells(&[coord], &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    pub fn plot_goal(&mut self, coord: GridCoord) -> &mut Self {
        self.plot_cells(&[coord], &PointStyle::new(colors::GOAL, "Goal").with_size(1.5))
    }

    /// Open the plot in an interactive gnuplot window
    pub fn show(&self) -> AStarResult<()> {
        self.build_figure()
            .show()
            .map(|_| ())
            .map_err(|e| AStarError::VisualizationError(e.to_string()))
    }

    pub fn save_png(&self, path: &str, width: u32, height: u32) -> AStarResult<()> {
        self.build_figure()
            .save_to_png(path, width, height)
            .map_err(|e| AStarError::VisualizationError(e.to_string()))
    }

    fn build_figure(&self) -> Figure {
        let mut figure = Figure::new();
        let axes = figure.axes2d();

        for layer in &self.layers {
            match layer {
                Layer::Lines { i, j, style } => {
                    axes.lines(
                        i,
                        j,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            LineWidth(style.line_width),
                        ],
                    );
                }
                Layer::Points { i, j, style } => {
                    axes.points(
                        i,
                        j,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            PointSymbol(style.symbol),
                            PointSize(style.size),
                        ],
                    );
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("i", &[]);
        axes.set_y_label("j", &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        figure
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Visualizer with `item` drawn and the given title set
pub fn quick_plot<V: Visualizable>(item: &V, title: &str) -> Visualizer {
    let mut vis = Visualizer::new();
    vis.set_title(title);
    item.visualize(&mut vis);
    vis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::PathFinder;

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_grid_bounds() {
        let mut vis = Visualizer::new();
        vis.plot_grid_bounds(5, 3);
        assert_eq!(vis.x_range, Some((-0.5, 4.5)));
        assert_eq!(vis.y_range, Some((-0.5, 2.5)));
    }

    #[test]
    fn test_quick_plot_sets_bounds() {
        let mut finder =
            PathFinder::new(4, 6, GridCoord::new(0, 0), GridCoord::new(3, 5), &[]).unwrap();
        finder.process();
        let vis = quick_plot(&finder, "A*");
        assert_eq!(vis.title, "A*");
        assert_eq!(vis.x_range, Some((-0.5, 3.5)));
        assert_eq!(vis.y_range, Some((-0.5, 5.5)));
    }

    #[test]
    fn test_layers_share_one_axes() {
        let blocked = vec![GridCoord::new(1, 1)];
        let mut finder =
            PathFinder::new(3, 3, GridCoord::new(0, 0), GridCoord::new(2, 2), &blocked).unwrap();
        finder.process();
        let vis = quick_plot(&finder, "A*");

        // blocked, closed, path, start, goal
        assert_eq!(vis.layers.len(), 5);
        match &vis.layers[2] {
            Layer::Lines { i, j, style } => {
                assert_eq!(i.first(), Some(&0.0));
                assert_eq!(j.last(), Some(&2.0));
                assert_eq!(style.color, colors::PATH);
            }
            other => panic!("expected the path layer, got {:?}", other),
        }

        // every layer goes onto the figure's only axes; building twice is stable
        let _ = vis.build_figure();
        let _ = vis.build_figure();
        assert_eq!(vis.layers.len(), 5);
    }
}
