//! primitive_rrt - RRT planning over precomputed motion primitives
//!
//! Grows a tree of kinematically feasible, collision-free trajectories
//! from a start pose toward a goal region in a 2D workspace, restricting
//! every extension to a fixed library of motion primitives.

// Core modules
pub mod common;
pub mod geometry;
pub mod primitives;
pub mod tree;

// Planner modules
pub mod planner;
pub mod query;
pub mod steer;

// Environment and rendering collaborators
pub mod environment;
pub mod visualization;

// Re-export common types for convenience
pub use common::{mod_2pi, Point2D, Pose2D};
pub use common::{PlannerError, PlannerResult};
pub use geometry::{Obstacle, Polyline};
pub use planner::{RrtConfig, RrtPlanner};
pub use primitives::{
    diff_drive_primitives, dubins_car_primitives, perpendicular_primitives, MotionPrimitive,
};
pub use tree::{Link, Tree};
