//! paracurve geometry: parametric curves and circle radius aggregation.

pub mod aggregate;
pub mod curve;

pub use aggregate::{
    circles, parallel_radius_sum, sequential_radius_sum, summarize, CircleSummary, CircleView,
    DEFAULT_WORKERS,
};
pub use curve::{Circle, Curve, Ellipse, Helix, Shape, ShapeKind};
