//! Circle selection, ordering, and parallel radius summation.
//!
//! The pipeline runs in three steps over a borrowed collection:
//! [`circles`] selects the circle entries, [`CircleView::sort_by_radius`]
//! orders them, and [`parallel_radius_sum`] reduces their radii on a fixed
//! size worker pool.

use paracurve_core::{CurveError, Result};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::curve::{Circle, Curve, Shape};

/// Worker count used when none is configured.
pub const DEFAULT_WORKERS: usize = 4;

/// Non-owning list of the circles in a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleView<'a> {
    circles: Vec<&'a Circle>,
}

impl<'a> CircleView<'a> {
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a Circle] {
        &self.circles
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Circle> + '_ {
        self.circles.iter().copied()
    }

    pub fn radii(&self) -> Vec<f64> {
        self.iter().map(Circle::radius).collect()
    }

    /// Reorder the view by ascending radius.
    ///
    /// Uses a stable sort with `f64::total_cmp`, so equal radii keep their
    /// collection order and NaN radii sort last.
    pub fn sort_by_radius(&mut self) {
        self.circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
    }

    /// Sum of radii computed on `workers` threads.
    pub fn total_radius(&self, workers: usize) -> Result<f64> {
        parallel_radius_sum(&self.circles, workers)
    }
}

/// Collect every circle in `shapes`, preserving collection order.
pub fn circles(shapes: &[Shape]) -> CircleView<'_> {
    let circles: Vec<&Circle> = shapes.iter().filter_map(Shape::as_circle).collect();
    debug!(total = shapes.len(), circles = circles.len(), "selected circles");
    CircleView { circles }
}

/// Sum of radii in slice order on the calling thread.
pub fn sequential_radius_sum(circles: &[&Circle]) -> f64 {
    circles.iter().map(|c| c.radius()).sum()
}

/// Sum of radii on a dedicated pool of `workers` threads.
///
/// The slice is split into at most `workers` contiguous chunks. Each worker
/// sums its own chunk and the partial sums are added in chunk order, so the
/// result for a given input and worker count is reproducible.
pub fn parallel_radius_sum(circles: &[&Circle], workers: usize) -> Result<f64> {
    if workers == 0 {
        return Err(CurveError::InvalidConfig(
            "worker count must be at least 1".into(),
        ));
    }
    if circles.is_empty() {
        return Ok(0.0);
    }

    let chunk_size = circles.len().div_ceil(workers);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| CurveError::ThreadPool(format!("failed to create thread pool: {e}")))?;

    let partials: Vec<f64> = pool.install(|| {
        circles
            .par_chunks(chunk_size)
            .map(sequential_radius_sum)
            .collect()
    });
    debug!(
        circles = circles.len(),
        workers,
        chunks = partials.len(),
        "combined partial sums"
    );

    Ok(partials.iter().sum())
}

/// Sorted circle view and radius total for a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSummary<'a> {
    pub circles: CircleView<'a>,
    pub radius_sum: f64,
}

/// Select, sort, and sum the circles of `shapes` in one pass.
pub fn summarize(shapes: &[Shape], workers: usize) -> Result<CircleSummary<'_>> {
    let mut view = circles(shapes);
    view.sort_by_radius();
    let radius_sum = view.total_radius(workers)?;
    Ok(CircleSummary {
        circles: view,
        radius_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Ellipse, Helix};

    fn mixed() -> Vec<Shape> {
        vec![
            Circle::new(3.0).into(),
            Ellipse::new(2.0, 5.0).into(),
            Helix::new(4.0, 6.0).into(),
            Circle::new(1.0).into(),
        ]
    }

    #[test]
    fn test_circles_preserves_order() {
        let shapes = mixed();
        let view = circles(&shapes);
        assert_eq!(view.radii(), vec![3.0, 1.0]);
    }

    #[test]
    fn test_view_borrows_collection() {
        let shapes = mixed();
        let view = circles(&shapes);
        let first = view.as_slice()[0];
        let Shape::Circle(owned) = &shapes[0] else {
            panic!("expected circle");
        };
        assert!(std::ptr::eq(first, owned));
    }

    #[test]
    fn test_sort_by_radius() {
        let shapes = mixed();
        let mut view = circles(&shapes);
        view.sort_by_radius();
        assert_eq!(view.radii(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_sort_places_nan_last() {
        let shapes: Vec<Shape> = vec![
            Circle::new(f64::NAN).into(),
            Circle::new(2.0).into(),
            Circle::new(-1.0).into(),
        ];
        let mut view = circles(&shapes);
        view.sort_by_radius();
        let radii = view.radii();
        assert_eq!(&radii[..2], &[-1.0, 2.0]);
        assert!(radii[2].is_nan());
    }

    #[test]
    fn test_parallel_sum_rejects_zero_workers() {
        let c = Circle::new(1.0);
        let err = parallel_radius_sum(&[&c], 0).unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfig(_)));
    }

    #[test]
    fn test_parallel_sum_empty() {
        assert_eq!(parallel_radius_sum(&[], DEFAULT_WORKERS).unwrap(), 0.0);
    }

    #[test]
    fn test_summarize_mixed() {
        let shapes = mixed();
        let summary = summarize(&shapes, DEFAULT_WORKERS).unwrap();
        assert_eq!(summary.circles.radii(), vec![1.0, 3.0]);
        assert_eq!(summary.radius_sum, 4.0);
    }
}
