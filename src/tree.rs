//! Append-only arena of tree links
//!
//! Each link records one applied motion primitive: its world-frame pose
//! sequence, the parent it extends (an index into the same arena) and
//! the accumulated cost from the root. Links are never mutated or
//! removed once inserted.

use crate::common::{Point2D, Pose2D};
use crate::geometry::{Obstacle, Polyline};

/// One applied motion primitive in the tree
#[derive(Debug, Clone)]
pub struct Link {
    /// World-frame poses, start to end; never empty
    pub poses: Vec<Pose2D>,
    pub local_cost: f64,
    /// Arena index of the parent; `None` only for the root
    pub parent: Option<usize>,
    /// Position of the last pose
    pub endpoint: Point2D,
    /// Root cost is zero; otherwise parent cost plus `local_cost`
    pub cost: f64,
    /// Traversed line from the parent's endpoint through `poses`;
    /// `None` for the root, which represents no motion
    pub geometry: Option<Polyline>,
}

impl Link {
    pub(crate) fn new(mut poses: Vec<Pose2D>, local_cost: f64, parent: Option<(usize, &Link)>) -> Self {
        // a singleton is duplicated so line geometry always has two points
        if poses.len() == 1 {
            let only = poses[0];
            poses.push(only);
        }
        let endpoint = poses.last().unwrap().position();
        match parent {
            None => Link {
                poses,
                local_cost,
                parent: None,
                endpoint,
                cost: 0.0,
                geometry: None,
            },
            Some((index, parent_link)) => {
                let mut points = vec![parent_link.endpoint];
                points.extend(poses.iter().map(|p| p.position()));
                Link {
                    cost: parent_link.cost + local_cost,
                    geometry: Some(Polyline::new(points)),
                    poses,
                    local_cost,
                    parent: Some(index),
                    endpoint,
                }
            }
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        self.endpoint.distance(&point)
    }

    /// True iff the traversed geometry touches any obstacle.
    /// The root traverses nothing and never collides.
    pub fn collides_with(&self, obstacles: &[Obstacle]) -> bool {
        match &self.geometry {
            None => false,
            Some(line) => obstacles.iter().any(|o| o.intersects(line)),
        }
    }
}

/// Growing collection of accepted links, root first
#[derive(Debug, Clone)]
pub struct Tree {
    links: Vec<Link>,
}

impl Tree {
    /// Create a tree holding only the root link at `start`.
    pub fn new(start: Pose2D) -> Self {
        Tree {
            links: vec![Link::new(vec![start], 0.0, None)],
        }
    }

    /// Build (without inserting) a link parented at `parent`.
    pub fn child_link(&self, parent: usize, poses: Vec<Pose2D>, local_cost: f64) -> Link {
        Link::new(poses, local_cost, Some((parent, &self.links[parent])))
    }

    pub fn push(&mut self, link: Link) -> usize {
        self.links.push(link);
        self.links.len() - 1
    }

    pub fn link(&self, index: usize) -> &Link {
        &self.links[index]
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Index of the link whose endpoint is nearest to `point`.
    /// Strict `<` keeps the earliest-inserted link on exact ties.
    pub fn nearest(&self, point: Point2D) -> usize {
        let mut min_dist = f64::INFINITY;
        let mut min_ind = 0;
        for (i, link) in self.links.iter().enumerate() {
            let dist = link.distance_to_point(point);
            if dist < min_dist {
                min_dist = dist;
                min_ind = i;
            }
        }
        min_ind
    }
}
