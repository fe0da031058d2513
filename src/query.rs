//! Post-growth tree queries
//!
//! Once the growth loop finishes the tree is read-only; these functions
//! answer whether the goal was approached, at what cost, and through
//! which pose sequence.

use crate::common::{Point2D, Pose2D};
use crate::geometry::Obstacle;
use crate::tree::Tree;

/// Default maximum endpoint-to-goal distance for a goal connection
pub const DEFAULT_STEP_THRESHOLD: f64 = 2.0;

/// Index of the link nearest the goal, earliest-inserted on exact ties.
pub fn nearest_to_goal(tree: &Tree, goal: Point2D) -> usize {
    tree.nearest(goal)
}

/// Accumulated cost of the path to the goal, or `None` when no link
/// ends within `step_threshold` of it.
///
/// The cost is read off a transient goal-connector link: goal position,
/// zero local cost, parented to the nearest link. The connector is
/// never inserted into the tree and its final hop is not collision
/// checked; see [`goal_path_length_strict`] for the checked variant.
pub fn goal_path_length(tree: &Tree, goal: Point2D, step_threshold: f64) -> Option<f64> {
    let nearest = nearest_to_goal(tree, goal);
    if tree.link(nearest).distance_to_point(goal) > step_threshold {
        return None;
    }
    let connector = tree.child_link(nearest, vec![Pose2D::new(goal.x, goal.y, 0.0)], 0.0);
    Some(connector.cost)
}

/// Like [`goal_path_length`], but the connector's straight hop to the
/// goal must also clear the obstacle set.
pub fn goal_path_length_strict(
    tree: &Tree,
    goal: Point2D,
    step_threshold: f64,
    obstacles: &[Obstacle],
) -> Option<f64> {
    let nearest = nearest_to_goal(tree, goal);
    if tree.link(nearest).distance_to_point(goal) > step_threshold {
        return None;
    }
    let connector = tree.child_link(nearest, vec![Pose2D::new(goal.x, goal.y, 0.0)], 0.0);
    if connector.collides_with(obstacles) {
        return None;
    }
    Some(connector.cost)
}

/// World-frame poses from the root to the link nearest the goal, in
/// chronological order.
///
/// The goal connector is not part of the output: the sequence ends at
/// the nearest link's final pose, not at the goal position itself.
/// Callers that need the literal goal point must append it.
pub fn extract_poses(tree: &Tree, goal: Point2D) -> Vec<Pose2D> {
    let mut poses = Vec::new();
    let mut cursor = Some(nearest_to_goal(tree, goal));
    while let Some(index) = cursor {
        let link = tree.link(index);
        poses.extend(link.poses.iter().rev().copied());
        cursor = link.parent;
    }
    poses.reverse();
    poses
}
