//! Ellipse curve.

use std::fmt;

use paracurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// An axis-aligned ellipse centered at the origin in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self { radius_x, radius_y }
    }
}

impl Curve for Ellipse {
    /// Radius of the circumscribing circle, `max(radius_x, radius_y)`.
    fn radius(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(self.radius_x * t.cos(), self.radius_y * t.sin(), 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius_x * t.sin(), self.radius_y * t.cos(), 0.0)
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ellipse with rx = {:.6}, ry = {:.6}",
            self.radius_x, self.radius_y
        )
    }
}
