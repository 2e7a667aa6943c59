//! Curve trait and implementations.

mod circle;
mod ellipse;
mod helix;
mod shape;

use std::fmt;

use paracurve_math::{Point3, Vector3};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;
pub use shape::{Shape, ShapeKind};

/// Trait for parametric curves in 3D space.
///
/// `Display` renders a short human-readable description naming the curve
/// kind and its parameters.
pub trait Curve: Send + Sync + fmt::Display {
    /// Scalar size metric used for ordering and aggregation.
    fn radius(&self) -> f64;

    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative with respect to `t`.
    fn derivative_at(&self, t: f64) -> Vector3;
}
