//! Plotting for environments, trees and trajectories
//!
//! Thin wrapper over gnuplot: the planner core hands its link
//! collection and query results to this module for rendering, nothing
//! flows back.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{PlannerError, PlannerResult, Point2D, Pose2D};
use crate::geometry::Obstacle;
use crate::primitives::MotionPrimitive;
use crate::query;
use crate::tree::Tree;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const BLUE: &str = "#0000FF";
    pub const GREEN: &str = "#00FF00";
    pub const YELLOW: &str = "#BBAA00";
    pub const ORANGE: &str = "#FFA500";
    pub const SILVER: &str = "#C0C0C0";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = BLUE;
    pub const GOAL: &str = GREEN;
    pub const BRANCH: &str = YELLOW;
    pub const GOAL_PATH: &str = BLUE;
    pub const ROBOT: &str = SILVER;
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn set_x_label(&mut self, label: &str) -> &mut Self {
        self.x_label = label.to_string();
        self
    }

    pub fn set_y_label(&mut self, label: &str) -> &mut Self {
        self.y_label = label.to_string();
        self
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    fn lines(&mut self, x: &[f64], y: &[f64], color: &str, width: f64) {
        self.figure
            .axes2d()
            .lines(x, y, &[Caption(""), Color(color), LineWidth(width)]);
    }

    /// Plot one obstacle chain as a wall outline.
    pub fn plot_obstacle(&mut self, obstacle: &Obstacle) -> &mut Self {
        let mut x: Vec<f64> = obstacle.vertices().iter().map(|p| p.x).collect();
        let mut y: Vec<f64> = obstacle.vertices().iter().map(|p| p.y).collect();
        if obstacle.is_closed() {
            x.push(x[0]);
            y.push(y[0]);
        }
        self.lines(&x, &y, colors::OBSTACLE, 2.0);
        self
    }

    /// Plot the obstacle set plus start and goal markers.
    pub fn plot_environment(
        &mut self,
        obstacles: &[Obstacle],
        start: Point2D,
        goal: Point2D,
    ) -> &mut Self {
        for obstacle in obstacles {
            self.plot_obstacle(obstacle);
        }
        self.figure.axes2d().points(
            &[start.x],
            &[start.y],
            &[Caption("Start"), Color(colors::START), PointSymbol('O'), PointSize(1.5)],
        );
        self.figure.axes2d().points(
            &[goal.x],
            &[goal.y],
            &[Caption("Goal"), Color(colors::GOAL), PointSymbol('*'), PointSize(2.0)],
        );
        self
    }

    /// Plot every explored branch of the tree.
    pub fn plot_tree(&mut self, tree: &Tree) -> &mut Self {
        for link in tree.links() {
            if let Some(line) = &link.geometry {
                self.lines(&line.x_coords(), &line.y_coords(), colors::BRANCH, 1.0);
            }
        }
        self
    }

    /// Highlight the chain from the root to the link nearest the goal.
    pub fn plot_goal_chain(&mut self, tree: &Tree, goal: Point2D) -> &mut Self {
        let mut cursor = Some(query::nearest_to_goal(tree, goal));
        while let Some(index) = cursor {
            let link = tree.link(index);
            if let Some(line) = &link.geometry {
                self.lines(&line.x_coords(), &line.y_coords(), colors::GOAL_PATH, 2.0);
            }
            cursor = link.parent;
        }
        self
    }

    /// Fan a primitive library out from the origin pose.
    pub fn plot_primitives(&mut self, library: &[MotionPrimitive]) -> &mut Self {
        let origin = Pose2D::origin();
        for (i, template) in library.iter().enumerate() {
            let instance = template.transform(&origin);
            let mut x = vec![origin.x];
            let mut y = vec![origin.y];
            x.extend(instance.poses.iter().map(|p| p.x));
            y.extend(instance.poses.iter().map(|p| p.y));
            let color = if i % 2 == 0 { colors::ORANGE } else { colors::BLUE };
            self.lines(&x, &y, color, 1.5);
        }
        self
    }

    /// Draw the robot as a circle with a heading ray.
    pub fn plot_robot(&mut self, pose: &Pose2D, radius: f64) -> &mut Self {
        let samples = 32;
        let mut x = Vec::with_capacity(samples + 1);
        let mut y = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let t = 2.0 * std::f64::consts::PI * i as f64 / samples as f64;
            x.push(pose.x + radius * t.cos());
            y.push(pose.y + radius * t.sin());
        }
        self.lines(&x, &y, colors::ROBOT, 2.0);
        self.lines(
            &[pose.x, pose.x + radius * pose.yaw.cos()],
            &[pose.y, pose.y + radius * pose.yaw.sin()],
            colors::BLACK,
            2.0,
        );
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> PlannerResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlannerResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();
        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);
        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let mut vis = Visualizer::new();
        vis.set_title("plan").set_x_range(-10.0, 10.0);
        assert_eq!(vis.title, "plan");
        assert_eq!(vis.x_range, Some((-10.0, 10.0)));
        assert!(vis.y_range.is_none());
    }
}
