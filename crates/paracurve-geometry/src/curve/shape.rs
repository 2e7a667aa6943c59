//! Closed set of curve variants held by a collection.

use std::fmt;

use paracurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Circle, Curve, Ellipse, Helix};

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Helix,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Ellipse, ShapeKind::Helix];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Helix => "Helix",
        };
        f.write_str(name)
    }
}

/// A curve of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Helix(_) => ShapeKind::Helix,
        }
    }

    /// The circle payload, if this shape is exactly a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Ellipse(_) | Shape::Helix(_) => None,
        }
    }

    fn as_curve(&self) -> &dyn Curve {
        match self {
            Shape::Circle(c) => c,
            Shape::Ellipse(e) => e,
            Shape::Helix(h) => h,
        }
    }
}

impl Curve for Shape {
    fn radius(&self) -> f64 {
        self.as_curve().radius()
    }

    fn point_at(&self, t: f64) -> Point3 {
        self.as_curve().point_at(t)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        self.as_curve().derivative_at(t)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_curve(), f)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<Helix> for Shape {
    fn from(helix: Helix) -> Self {
        Shape::Helix(helix)
    }
}
