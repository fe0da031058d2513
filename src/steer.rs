//! Greedy steering over a motion primitive library
//!
//! Extension never aims exactly at the sampled point; it picks the
//! library primitive whose endpoint lands closest to it.

use ordered_float::OrderedFloat;

use crate::common::Point2D;
use crate::primitives::MotionPrimitive;
use crate::tree::{Link, Tree};

/// Extend `from` toward `target`: transform every template by the source
/// link's final world-frame pose and keep the candidate whose endpoint
/// is nearest the target. Exact ties go to the first template in library
/// order, so the result is deterministic.
///
/// The library must be non-empty; planner configuration validates this
/// once before any steering happens.
pub fn steer_towards(
    tree: &Tree,
    from: usize,
    target: Point2D,
    library: &[MotionPrimitive],
) -> (Link, Point2D) {
    let base = *tree.link(from).poses.last().unwrap();

    let candidates: Vec<MotionPrimitive> = library.iter().map(|p| p.transform(&base)).collect();
    let best = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| OrderedFloat(c.end_pose().distance_to_point(target)))
        .map(|(i, _)| i)
        .unwrap();

    let winner = candidates.into_iter().nth(best).unwrap();
    let endpoint = winner.end_pose().position();
    let link = tree.child_link(from, winner.poses, winner.cost);
    (link, endpoint)
}
