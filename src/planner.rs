//! Motion-primitive RRT growth loop
//!
//! Grows a tree of feasible trajectories by repeatedly sampling a point
//! in the configured region, steering the nearest link toward it with
//! the primitive library and keeping the extension when it clears the
//! obstacle set. The loop always runs for the configured iteration
//! count; reaching the goal does not stop growth.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{PlannerError, PlannerResult, Point2D, Pose2D};
use crate::geometry::Obstacle;
use crate::primitives::MotionPrimitive;
use crate::query;
use crate::steer::steer_towards;
use crate::tree::Tree;

/// Configuration for the RRT planner
#[derive(Debug, Clone)]
pub struct RrtConfig {
    /// Start pose of the robot
    pub start: Pose2D,
    /// Goal position
    pub goal: Point2D,
    /// Sampling region bounds along x (min, max)
    pub region_x: (f64, f64),
    /// Sampling region bounds along y (min, max)
    pub region_y: (f64, f64),
    /// Fixed number of growth iterations
    pub iterations: usize,
    /// Seed for the sampling sequence
    pub seed: u64,
    /// Maximum endpoint-to-goal distance that still counts as reaching it
    pub step_threshold: f64,
    /// Collision-check the final hop to the goal when reporting cost
    pub strict_goal: bool,
}

impl Default for RrtConfig {
    fn default() -> Self {
        Self {
            start: Pose2D::origin(),
            goal: Point2D::origin(),
            region_x: (-10.0, 10.0),
            region_y: (-10.0, 10.0),
            iterations: 1000,
            seed: 42,
            step_threshold: query::DEFAULT_STEP_THRESHOLD,
            strict_goal: false,
        }
    }
}

impl RrtConfig {
    /// Reject misconfiguration once, before planning starts.
    pub fn validate(&self, library: &[MotionPrimitive]) -> PlannerResult<()> {
        if library.is_empty() {
            return Err(PlannerError::InvalidParameter(
                "motion primitive library is empty".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(PlannerError::InvalidParameter(
                "iteration count must be positive".to_string(),
            ));
        }
        if self.region_x.0 >= self.region_x.1 || self.region_y.0 >= self.region_y.1 {
            return Err(PlannerError::InvalidParameter(
                "sampling region bounds are inverted".to_string(),
            ));
        }
        Ok(())
    }
}

/// RRT planner over a fixed motion primitive library
pub struct RrtPlanner {
    config: RrtConfig,
    library: Vec<MotionPrimitive>,
    obstacles: Vec<Obstacle>,
}

impl RrtPlanner {
    /// Create a planner; the obstacle set is expected to be inflated by
    /// the robot radius already.
    pub fn new(
        config: RrtConfig,
        library: Vec<MotionPrimitive>,
        obstacles: Vec<Obstacle>,
    ) -> PlannerResult<Self> {
        config.validate(&library)?;
        Ok(Self {
            config,
            library,
            obstacles,
        })
    }

    pub fn config(&self) -> &RrtConfig {
        &self.config
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Grow the tree for the configured number of iterations.
    ///
    /// The sampling sequence is owned by this run: the same seed and
    /// configuration reproduce the identical tree.
    pub fn plan(&self) -> Tree {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut tree = Tree::new(self.config.start);

        for _ in 0..self.config.iterations {
            let px = rng.gen_range(self.config.region_x.0..=self.config.region_x.1);
            let py = rng.gen_range(self.config.region_y.0..=self.config.region_y.1);
            let point = Point2D::new(px, py);

            let nearest = tree.nearest(point);
            let (candidate, _) = steer_towards(&tree, nearest, point, &self.library);

            // a colliding extension is dropped; the next sample is the retry
            if candidate.collides_with(&self.obstacles) {
                continue;
            }
            tree.push(candidate);
        }
        tree
    }

    /// Accumulated cost to the goal, honoring the `strict_goal` setting.
    pub fn goal_path_length(&self, tree: &Tree) -> Option<f64> {
        if self.config.strict_goal {
            query::goal_path_length_strict(
                tree,
                self.config.goal,
                self.config.step_threshold,
                &self.obstacles,
            )
        } else {
            query::goal_path_length(tree, self.config.goal, self.config.step_threshold)
        }
    }

    /// Chronological pose sequence from the root to the goal approach.
    pub fn extract_poses(&self, tree: &Tree) -> Vec<Pose2D> {
        query::extract_poses(tree, self.config.goal)
    }
}
