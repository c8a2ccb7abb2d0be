use crate::error::{Result, SamplingError};
use crate::geometry::ControlPointSet;
use crate::math::bernstein::BernsteinBasis;
use crate::math::{Point3, Vector3};

/// Evaluates `Σ Pⱼ · B(n, j, t)` over the whole control polygon.
///
/// An empty polygon evaluates to the origin.
#[must_use]
pub fn bernstein_point(points: &[Point3], t: f64) -> Point3 {
    let Some(n) = points.len().checked_sub(1) else {
        return Point3::origin();
    };
    weighted_sum(points, &BernsteinBasis::new(n), t)
}

/// `Σ Pⱼ · basis.weight(j, t)`; `basis` must have the polygon's degree.
fn weighted_sum(points: &[Point3], basis: &BernsteinBasis, t: f64) -> Point3 {
    let sum = points
        .iter()
        .zip(basis.weights(t))
        .fold(Vector3::zeros(), |acc, (p, w)| acc + p.coords * w);
    Point3::from(sum)
}

/// Samples the Bézier curve of a control point set at evenly spaced parameters.
///
/// Produces `sample_count + 1` points for `t = i / sample_count`,
/// `i = 0..=sample_count`. Sets with fewer than three control points produce
/// no samples.
pub struct SampleBezierCurve {
    sample_count: usize,
}

impl SampleBezierCurve {
    /// Creates a new `SampleBezierCurve` operation.
    #[must_use]
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count is zero and the set holds enough
    /// points to describe a curve.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, points: &ControlPointSet) -> Result<Vec<Point3>> {
        let degree = points.degree().unwrap_or(0);
        if degree < 2 {
            tracing::trace!(degree, "not enough control points to sample");
            return Ok(Vec::new());
        }
        if self.sample_count == 0 {
            return Err(SamplingError::ZeroSampleCount.into());
        }

        let basis = BernsteinBasis::new(degree);
        let count = self.sample_count as f64;
        let samples: Vec<Point3> = (0..=self.sample_count)
            .map(|i| weighted_sum(points.as_slice(), &basis, i as f64 / count))
            .collect();
        tracing::trace!(degree, samples = samples.len(), "sampled bezier curve");
        Ok(samples)
    }
}
