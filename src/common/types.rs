//! Common geometric types for primitive_rrt

use nalgebra::{Vector2, Vector3};

/// Normalize an angle into [0, 2*pi)
pub fn mod_2pi(angle: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let a = angle % two_pi;
    if a < 0.0 {
        a + two_pi
    } else {
        a
    }
}

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// 2D pose (position + heading), used both as an absolute world-frame
/// state and as a relative offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            yaw: 0.0,
        }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Apply the relative pose `rel` on top of this pose.
    ///
    /// If a robot sits at `self` and executes a motion ending at `rel`
    /// (expressed in the robot's own frame), it ends up at
    /// `self.compose(&rel)` in the world frame. Not commutative:
    /// `a.compose(&b)` and `b.compose(&a)` differ in general.
    pub fn compose(&self, rel: &Pose2D) -> Pose2D {
        Pose2D {
            x: self.x + self.yaw.cos() * rel.x - self.yaw.sin() * rel.y,
            y: self.y + self.yaw.cos() * rel.y + self.yaw.sin() * rel.x,
            yaw: mod_2pi(self.yaw + rel.yaw),
        }
    }

    /// Scale the position by `k`, leaving the heading untouched.
    pub fn scale(&self, k: f64) -> Pose2D {
        Pose2D {
            x: self.x * k,
            y: self.y * k,
            yaw: self.yaw,
        }
    }

    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        (self.position().to_vector() - point.to_vector()).norm()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.yaw)
    }
}

impl From<Vector3<f64>> for Pose2D {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x: v[0],
            y: v[1],
            yaw: v[2],
        }
    }
}
