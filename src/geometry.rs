//! Polyline and obstacle-region geometry
//!
//! Obstacles are modeled as a vertex chain plus a margin: the region is
//! every point within `margin` of the chain (a capsule around each
//! segment), plus the enclosed interior for closed rings. Robot-radius
//! inflation is a margin increase, so a point-robot polyline test
//! suffices for collision checking.

use itertools::Itertools;

use crate::common::Point2D;

/// Polyline with at least two vertices
#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<Point2D>,
}

impl Polyline {
    pub fn new(points: Vec<Point2D>) -> Self {
        debug_assert!(points.len() >= 2, "polyline needs at least two points");
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

fn point_segment_distance(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b.to_vector() - a.to_vector();
    let ap = p.to_vector() - a.to_vector();
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / len2).max(0.0).min(1.0);
    (ap - ab * t).norm()
}

fn cross(o: Point2D, a: Point2D, b: Point2D) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn segments_cross(p1: Point2D, p2: Point2D, q1: Point2D, q2: Point2D) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Minimum distance between two segments; zero when they cross.
/// Collinear overlap falls out of the endpoint-distance minimum.
fn segment_segment_distance(p1: Point2D, p2: Point2D, q1: Point2D, q2: Point2D) -> f64 {
    if segments_cross(p1, p2, q1, q2) {
        return 0.0;
    }
    point_segment_distance(p1, q1, q2)
        .min(point_segment_distance(p2, q1, q2))
        .min(point_segment_distance(q1, p1, p2))
        .min(point_segment_distance(q2, p1, p2))
}

/// Immutable 2D obstacle region
#[derive(Debug, Clone)]
pub struct Obstacle {
    chain: Vec<Point2D>,
    margin: f64,
    closed: bool,
}

impl Obstacle {
    /// Wall segment: a capsule of radius `margin` around `a`-`b`
    pub fn segment(a: Point2D, b: Point2D, margin: f64) -> Self {
        Self {
            chain: vec![a, b],
            margin,
            closed: false,
        }
    }

    /// Open chain of wall segments sharing one margin
    pub fn chain(points: Vec<Point2D>, margin: f64) -> Self {
        debug_assert!(points.len() >= 2, "obstacle chain needs at least two points");
        Self {
            chain: points,
            margin,
            closed: false,
        }
    }

    /// Closed ring whose interior belongs to the region
    pub fn ring(vertices: Vec<Point2D>, margin: f64) -> Self {
        debug_assert!(vertices.len() >= 3, "obstacle ring needs at least three points");
        Self {
            chain: vertices,
            margin,
            closed: true,
        }
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.chain
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Same region grown by `r` on every side
    pub fn inflate(&self, r: f64) -> Obstacle {
        Obstacle {
            chain: self.chain.clone(),
            margin: self.margin + r,
            closed: self.closed,
        }
    }

    fn chain_segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let wrap = if self.closed && self.chain.len() > 2 {
            Some((self.chain[self.chain.len() - 1], self.chain[0]))
        } else {
            None
        };
        self.chain.iter().copied().tuple_windows().chain(wrap)
    }

    /// Even-odd test against the ring boundary; always false for open chains.
    pub fn contains(&self, p: Point2D) -> bool {
        if !self.closed {
            return false;
        }
        let mut inside = false;
        let n = self.chain.len();
        let mut j = n - 1;
        for i in 0..n {
            let (pi, pj) = (self.chain[i], self.chain[j]);
            if (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True iff the polyline touches the region: any of its segments
    /// passes within `margin` of the chain, or a vertex lies inside a
    /// closed ring.
    pub fn intersects(&self, line: &Polyline) -> bool {
        for (p, q) in line.segments() {
            for (a, b) in self.chain_segments() {
                if segment_segment_distance(p, q, a, b) <= self.margin {
                    return true;
                }
            }
        }
        self.closed && line.points.iter().any(|&p| self.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_point_segment_distance() {
        let d = point_segment_distance(pt(0.0, 1.0), pt(-1.0, 0.0), pt(1.0, 0.0));
        assert!((d - 1.0).abs() < 1e-10);
        // beyond an endpoint the distance is to the endpoint
        let d = point_segment_distance(pt(4.0, 3.0), pt(-1.0, 0.0), pt(1.0, 0.0));
        assert!((d - (9.0f64 + 9.0).sqrt()).abs() < 1e-10);
        // degenerate segment
        let d = point_segment_distance(pt(3.0, 4.0), pt(0.0, 0.0), pt(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segments_cross() {
        assert!(segments_cross(pt(-1.0, 0.0), pt(1.0, 0.0), pt(0.0, -1.0), pt(0.0, 1.0)));
        assert!(!segments_cross(pt(-1.0, 0.0), pt(1.0, 0.0), pt(2.0, -1.0), pt(2.0, 1.0)));
        let d = segment_segment_distance(pt(-1.0, 0.0), pt(1.0, 0.0), pt(0.0, -1.0), pt(0.0, 1.0));
        assert!(d.abs() < 1e-10);
    }

    #[test]
    fn test_wall_intersects_crossing_polyline() {
        let wall = Obstacle::segment(pt(0.0, -1.0), pt(0.0, 1.0), 0.1);
        let crossing = Polyline::new(vec![pt(-1.0, 0.0), pt(1.0, 0.0)]);
        let distant = Polyline::new(vec![pt(-1.0, 5.0), pt(1.0, 5.0)]);
        assert!(wall.intersects(&crossing));
        assert!(!wall.intersects(&distant));
    }

    #[test]
    fn test_margin_is_part_of_the_region() {
        let wall = Obstacle::segment(pt(0.0, -1.0), pt(0.0, 1.0), 0.1);
        let near = Polyline::new(vec![pt(0.05, -1.0), pt(0.05, 1.0)]);
        let clear = Polyline::new(vec![pt(0.5, -1.0), pt(0.5, 1.0)]);
        assert!(wall.intersects(&near));
        assert!(!wall.intersects(&clear));
    }

    #[test]
    fn test_ring_contains_interior() {
        let square = Obstacle::ring(
            vec![pt(-1.0, -1.0), pt(1.0, -1.0), pt(1.0, 1.0), pt(-1.0, 1.0)],
            0.1,
        );
        assert!(square.contains(pt(0.0, 0.0)));
        assert!(!square.contains(pt(2.0, 0.0)));
        // a polyline buried inside the ring intersects even without
        // touching the boundary
        let inner = Polyline::new(vec![pt(-0.4, 0.0), pt(0.4, 0.0)]);
        assert!(square.intersects(&inner));
    }

    #[test]
    fn test_open_chain_has_no_interior() {
        let chain = Obstacle::chain(
            vec![pt(-1.0, -1.0), pt(1.0, -1.0), pt(1.0, 1.0), pt(-1.0, 1.0)],
            0.1,
        );
        assert!(!chain.contains(pt(0.0, 0.0)));
        // the gap between the chain ends is passable
        let through_gap = Polyline::new(vec![pt(-1.5, 0.0), pt(-0.5, 0.0)]);
        assert!(!chain.intersects(&through_gap));
    }

    #[test]
    fn test_inflate_adds_to_margin() {
        let wall = Obstacle::segment(pt(0.0, 0.0), pt(1.0, 0.0), 0.1);
        let fat = wall.inflate(0.5);
        assert!((fat.margin() - 0.6).abs() < 1e-10);
        assert!((wall.margin() - 0.1).abs() < 1e-10);
        let line = Polyline::new(vec![pt(0.5, 0.4), pt(0.5, 2.0)]);
        assert!(!wall.intersects(&line));
        assert!(fat.intersects(&line));
    }
}
