//! Circle curve.

use std::fmt;

use paracurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circle of the given radius centered at the origin in the XY plane.
///
/// `t = 0` lies on the positive X axis; the curve runs counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Curve for Circle {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle with r = {:.6}", self.radius)
    }
}
