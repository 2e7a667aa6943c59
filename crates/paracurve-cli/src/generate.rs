//! Random curve collections for demonstration runs.

use paracurve_core::{CurveError, Result};
use paracurve_geometry::{Circle, Ellipse, Helix, Shape, ShapeKind};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::debug;

pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_RADIUS_RANGE: (f64, f64) = (0.1, 100.0);
pub const DEFAULT_STEP_RANGE: (f64, f64) = (0.1, 100.0);

/// How many curves to draw and the half-open ranges their parameters come from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub step_min: f64,
    pub step_max: f64,
}

impl GeneratorConfig {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_range("radius", self.radius_min, self.radius_max)?;
        check_range("step", self.step_min, self.step_max)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius_min: DEFAULT_RADIUS_RANGE.0,
            radius_max: DEFAULT_RADIUS_RANGE.1,
            step_min: DEFAULT_STEP_RANGE.0,
            step_max: DEFAULT_STEP_RANGE.1,
        }
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(CurveError::InvalidConfig(format!(
            "{name} range must be finite, got [{min}, {max})"
        )));
    }
    if min >= max {
        return Err(CurveError::InvalidConfig(format!(
            "{name} range is empty: [{min}, {max})"
        )));
    }
    Ok(())
}

/// Draw `config.count` curves of uniformly chosen kind and parameters.
///
/// Ellipses draw `radius_x` then `radius_y`; helices draw `radius` then `step`.
pub fn generate_curves<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Vec<Shape>> {
    config.validate()?;

    let radius = Uniform::new(config.radius_min, config.radius_max);
    let step = Uniform::new(config.step_min, config.step_max);

    let shapes: Vec<Shape> = (0..config.count)
        .map(|_| random_shape(rng, &radius, &step))
        .collect();
    debug!(count = shapes.len(), "generated curves");
    Ok(shapes)
}

fn random_shape<R: Rng + ?Sized>(
    rng: &mut R,
    radius: &Uniform<f64>,
    step: &Uniform<f64>,
) -> Shape {
    match ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())] {
        ShapeKind::Circle => Circle::new(radius.sample(rng)).into(),
        ShapeKind::Ellipse => {
            let rx = radius.sample(rng);
            let ry = radius.sample(rng);
            Ellipse::new(rx, ry).into()
        }
        ShapeKind::Helix => {
            let r = radius.sample(rng);
            let s = step.sample(rng);
            Helix::new(r, s).into()
        }
    }
}
