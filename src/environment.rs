//! Obstacle-set construction
//!
//! Environments are wall lists: consecutive points of a loop become
//! wall-segment obstacles with a small margin, then the whole set is
//! inflated by the robot radius so the planner can treat the robot as a
//! point.

use std::fs;
use std::path::Path;

use crate::common::{PlannerError, PlannerResult, Point2D};
use crate::geometry::Obstacle;

/// Wall segments between consecutive points, wrapping last to first.
pub fn walls_from_points(points: &[Point2D], buffer: f64) -> Vec<Obstacle> {
    let n = points.len();
    (0..n)
        .map(|i| Obstacle::segment(points[i], points[(i + 1) % n], buffer))
        .collect()
}

/// Load an environment from a whitespace-separated `x y` point list.
/// Blank lines and `#` comments are skipped.
pub fn load_env_from_file<P: AsRef<Path>>(path: P, buffer: f64) -> PlannerResult<Vec<Obstacle>> {
    let text = fs::read_to_string(path)?;
    let mut points = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cols = line.split_whitespace();
        let x = parse_coord(cols.next(), line)?;
        let y = parse_coord(cols.next(), line)?;
        points.push(Point2D::new(x, y));
    }
    if points.len() < 2 {
        return Err(PlannerError::InvalidParameter(
            "environment file holds fewer than two points".to_string(),
        ));
    }
    Ok(walls_from_points(&points, buffer))
}

fn parse_coord(token: Option<&str>, line: &str) -> PlannerResult<f64> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| PlannerError::InvalidParameter(format!("bad environment line: {}", line)))
}

/// Grow every obstacle by the robot radius.
pub fn inflate_env(obstacles: &[Obstacle], r: f64) -> Vec<Obstacle> {
    obstacles.iter().map(|o| o.inflate(r)).collect()
}

/// Bundled demo maze: a square outer boundary with a dividing wall
/// rising from the bottom edge, so the direct route between the default
/// start (-8, -8) and goal (8, -8) is blocked.
pub fn maze_small(buffer: f64) -> Vec<Obstacle> {
    let corners = [
        Point2D::new(-9.0, -9.0),
        Point2D::new(9.0, -9.0),
        Point2D::new(9.0, 9.0),
        Point2D::new(-9.0, 9.0),
    ];
    let mut walls = walls_from_points(&corners, buffer);
    walls.push(Obstacle::segment(
        Point2D::new(0.0, -9.0),
        Point2D::new(0.0, 3.0),
        buffer,
    ));
    walls
}
