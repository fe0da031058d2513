//! Motion primitive templates and generator families
//!
//! A primitive is a short kinematically feasible trajectory expressed as
//! relative poses in the frame of its own start (the start itself is
//! implicit and not stored), together with a traversal cost. Templates
//! are generated once per robot model and transformed into world-frame
//! instances during steering.

use std::f64::consts::PI;

use crate::common::Pose2D;

/// Relative pose sequence plus traversal cost
#[derive(Debug, Clone)]
pub struct MotionPrimitive {
    pub poses: Vec<Pose2D>,
    pub cost: f64,
}

impl MotionPrimitive {
    pub fn new(poses: Vec<Pose2D>, cost: f64) -> Self {
        debug_assert!(!poses.is_empty(), "primitive needs at least one pose");
        Self { poses, cost }
    }

    /// World-frame instance of this template rooted at `base`.
    /// The template itself is untouched and reusable.
    pub fn transform(&self, base: &Pose2D) -> MotionPrimitive {
        MotionPrimitive {
            poses: self.poses.iter().map(|p| base.compose(p)).collect(),
            cost: self.cost,
        }
    }

    pub fn end_pose(&self) -> Pose2D {
        *self.poses.last().unwrap()
    }
}

/// Primitives for a curvature-constrained car: a left arc, a straight
/// run, and a right arc, each of arc length `curvature * max_theta`.
///
/// Arc samples follow the circular parametrization
/// `x = r sin(theta), y = r (1 - cos(theta))` with `r = curvature`,
/// mirrored for the right turn.
pub fn dubins_car_primitives(max_theta: f64, curvature: f64, steps: usize) -> Vec<MotionPrimitive> {
    let r = curvature;
    let dtheta = max_theta / steps as f64;
    let cost = r * max_theta;

    let left = (1..=steps)
        .map(|d| {
            let th = d as f64 * dtheta;
            Pose2D::new(r * th.sin(), r * (1.0 - th.cos()), th)
        })
        .collect();
    let straight = (1..=steps)
        .map(|d| Pose2D::new(r * d as f64 * dtheta, 0.0, 0.0))
        .collect();
    let right = (1..=steps)
        .map(|d| {
            let th = d as f64 * dtheta;
            Pose2D::new(r * th.sin(), r * (th.cos() - 1.0), -th)
        })
        .collect();

    vec![
        MotionPrimitive::new(left, cost),
        MotionPrimitive::new(straight, cost),
        MotionPrimitive::new(right, cost),
    ]
}

/// Primitives for a differential-drive robot: rotate in place to a
/// heading offset, then drive straight for `primitive_length`.
///
/// Offsets are `2 * num_primitives + 1` headings spaced linearly over
/// `[-max_theta / 2, max_theta / 2]`; cost is
/// `primitive_length + |offset| / pi`. A pure straight primitive of
/// cost `primitive_length` is appended last.
pub fn diff_drive_primitives(
    max_theta: f64,
    primitive_length: f64,
    num_primitives: usize,
    steps: usize,
) -> Vec<MotionPrimitive> {
    let n = num_primitives as f64;
    let offsets: Vec<f64> = (0..=2 * num_primitives)
        .map(|i| (i as f64 / n - 1.0) * max_theta / 2.0)
        .collect();

    let mut library: Vec<MotionPrimitive> = offsets
        .iter()
        .map(|&offset| turn_then_drive(offset, primitive_length, steps))
        .collect();
    library.push(straight_primitive(primitive_length, steps));
    library
}

/// Differential-drive construction restricted to axis-aligned heading
/// offsets (0, 90, 180 and -90 degrees).
pub fn perpendicular_primitives(primitive_length: f64, steps: usize) -> Vec<MotionPrimitive> {
    let offsets = [0.0, PI / 2.0, PI, -PI / 2.0];

    let mut library: Vec<MotionPrimitive> = offsets
        .iter()
        .map(|&offset| turn_then_drive(offset, primitive_length, steps))
        .collect();
    library.push(straight_primitive(primitive_length, steps));
    library
}

fn turn_then_drive(offset: f64, length: f64, steps: usize) -> MotionPrimitive {
    let mut poses: Vec<Pose2D> = Vec::new();
    if offset != 0.0 {
        for d in 1..=steps {
            poses.push(Pose2D::new(0.0, 0.0, offset * d as f64 / steps as f64));
        }
    }
    let step = Pose2D::new(length / steps as f64, 0.0, 0.0);
    for _ in 0..steps {
        let base = poses.last().copied().unwrap_or_else(Pose2D::origin);
        poses.push(base.compose(&step));
    }
    MotionPrimitive::new(poses, length + offset.abs() / PI)
}

fn straight_primitive(length: f64, steps: usize) -> MotionPrimitive {
    let poses = (1..=steps)
        .map(|d| Pose2D::new(length * d as f64 / steps as f64, 0.0, 0.0))
        .collect();
    MotionPrimitive::new(poses, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::mod_2pi;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_dubins_family_shape() {
        let max_theta = PI / 4.0;
        let r = 1.0;
        let lib = dubins_car_primitives(max_theta, r, 10);
        assert_eq!(lib.len(), 3);
        for p in &lib {
            assert_eq!(p.poses.len(), 10);
            assert!((p.cost - r * max_theta).abs() < EPS);
        }

        let left_end = lib[0].end_pose();
        assert!((left_end.x - r * max_theta.sin()).abs() < EPS);
        assert!((left_end.y - r * (1.0 - max_theta.cos())).abs() < EPS);
        assert!((left_end.yaw - max_theta).abs() < EPS);

        let straight_end = lib[1].end_pose();
        assert!((straight_end.x - r * max_theta).abs() < EPS);
        assert!(straight_end.y.abs() < EPS);
        assert!(straight_end.yaw.abs() < EPS);

        let right_end = lib[2].end_pose();
        assert!((right_end.y + left_end.y).abs() < EPS);
        assert!((right_end.yaw + max_theta).abs() < EPS);
    }

    #[test]
    fn test_transform_by_identity_preserves_templates() {
        let lib = dubins_car_primitives(PI / 3.0, 0.5, 8);
        for template in &lib {
            let instance = template.transform(&Pose2D::origin());
            assert!((instance.cost - template.cost).abs() < EPS);
            for (a, b) in instance.poses.iter().zip(template.poses.iter()) {
                assert!((a.x - b.x).abs() < EPS);
                assert!((a.y - b.y).abs() < EPS);
                // headings agree as angles; composition normalizes into [0, 2*pi)
                assert!((mod_2pi(a.yaw) - mod_2pi(b.yaw)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_transform_composes_with_base() {
        let lib = dubins_car_primitives(PI / 4.0, 1.0, 10);
        let base = Pose2D::new(2.0, -1.0, PI / 2.0);
        let instance = lib[1].transform(&base);
        let expected = base.compose(&lib[1].end_pose());
        let end = instance.end_pose();
        assert!((end.x - expected.x).abs() < EPS);
        assert!((end.y - expected.y).abs() < EPS);
        assert!((end.yaw - expected.yaw).abs() < EPS);
    }

    #[test]
    fn test_diff_drive_family_shape() {
        let max_theta = PI / 3.0;
        let length = 0.75;
        let lib = diff_drive_primitives(max_theta, length, 3, 10);
        // 2N + 1 offsets plus the appended straight
        assert_eq!(lib.len(), 8);

        // every turn-then-drive endpoint sits `length` from the start
        for p in &lib {
            let end = p.end_pose();
            assert!((end.position().distance(&crate::common::Point2D::origin()) - length).abs() < EPS);
        }

        // extreme offsets cost the most, the appended straight the least
        let max_cost = length + (max_theta / 2.0) / PI;
        assert!((lib[0].cost - max_cost).abs() < EPS);
        assert!((lib[6].cost - max_cost).abs() < EPS);
        assert!((lib[7].cost - length).abs() < EPS);
        // the middle offset is zero, so its cost matches the straight
        assert!((lib[3].cost - length).abs() < EPS);
    }

    #[test]
    fn test_diff_drive_offset_headings() {
        let max_theta = PI / 2.0;
        let lib = diff_drive_primitives(max_theta, 1.0, 2, 10);
        // offsets: -mt/2, -mt/4, 0, mt/4, mt/2
        let expected = [-max_theta / 2.0, -max_theta / 4.0, 0.0, max_theta / 4.0, max_theta / 2.0];
        for (p, &offset) in lib.iter().zip(expected.iter()) {
            let end = p.end_pose();
            assert!((mod_2pi(end.yaw) - mod_2pi(offset)).abs() < EPS);
            assert!((end.x - offset.cos()).abs() < EPS);
            assert!((end.y - offset.sin()).abs() < EPS);
        }
    }

    #[test]
    fn test_perpendicular_family_endpoints() {
        let length = 1.0;
        let lib = perpendicular_primitives(length, 10);
        assert_eq!(lib.len(), 5);
        let expected = [
            (length, 0.0),
            (0.0, length),
            (-length, 0.0),
            (0.0, -length),
            (length, 0.0),
        ];
        for (p, &(ex, ey)) in lib.iter().zip(expected.iter()) {
            let end = p.end_pose();
            assert!((end.x - ex).abs() < EPS, "endpoint x {} vs {}", end.x, ex);
            assert!((end.y - ey).abs() < EPS, "endpoint y {} vs {}", end.y, ey);
        }
    }

    #[test]
    fn test_rotation_precedes_drive() {
        let lib = diff_drive_primitives(PI, 1.0, 1, 10);
        // first primitive turns to -pi/2 before moving
        let first = &lib[0];
        assert_eq!(first.poses.len(), 20);
        for pose in &first.poses[..10] {
            assert!(pose.x.abs() < EPS);
            assert!(pose.y.abs() < EPS);
        }
        assert!(first.poses[10].position().distance(&crate::common::Point2D::origin()) > 0.0);
    }
}
