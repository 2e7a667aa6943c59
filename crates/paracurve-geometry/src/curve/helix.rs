//! Helix curve.

use std::f64::consts::TAU;
use std::fmt;

use paracurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circular helix around the Z axis.
///
/// `step` is the rise along Z per full turn, so the height at parameter `t`
/// is `step * t / 2π`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    pub radius: f64,
    pub step: f64,
}

impl Helix {
    pub fn new(radius: f64, step: f64) -> Self {
        Self { radius, step }
    }

    /// Rise along Z per unit of parameter.
    pub fn pitch_rate(&self) -> f64 {
        self.step / TAU
    }
}

impl Curve for Helix {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.radius * t.cos(),
            self.radius * t.sin(),
            self.pitch_rate() * t,
        )
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.pitch_rate(),
        )
    }
}

impl fmt::Display for Helix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Helix with r = {:.6}, s = {:.6}", self.radius, self.step)
    }
}
