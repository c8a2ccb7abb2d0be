use crate::error::{GeometryError, Result};
use crate::geometry::ControlPointSet;
use crate::math::bernstein::bernstein_weights;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::sampling::bernstein_point;
use crate::operations::subdivision::de_casteljau_point;

use super::{Curve, CurveDomain};

/// How a [`Bezier`] computes points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMethod {
    /// Closed-form sum over the Bernstein basis.
    #[default]
    Bernstein,
    /// Repeated linear interpolation of the control polygon.
    DeCasteljau,
}

/// A Bézier curve of arbitrary degree over `t ∈ [0, 1]`.
///
/// `P(t) = Σ Pᵢ · B(n, i, t)`, so `P(0)` is the first control point and
/// `P(1)` the last.
#[derive(Debug, Clone)]
pub struct Bezier {
    points: Vec<Point3>,
    method: EvaluationMethod,
}

impl Bezier {
    /// Creates a new Bézier curve from its control polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points are given.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "bezier curve needs at least 2 control points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self {
            points,
            method: EvaluationMethod::default(),
        })
    }

    /// Creates a curve from the current contents of a control point set.
    ///
    /// # Errors
    ///
    /// Returns an error if the set holds fewer than two points.
    pub fn from_control_points(set: &ControlPointSet) -> Result<Self> {
        Self::new(set.vertices())
    }

    /// Switches the evaluation strategy.
    #[must_use]
    pub fn with_method(mut self, method: EvaluationMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn method(&self) -> EvaluationMethod {
        self.method
    }

    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.points
    }

    /// Polynomial degree (control point count minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

impl Curve for Bezier {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let point = match self.method {
            EvaluationMethod::Bernstein => bernstein_point(&self.points, t),
            // A subdivision step weights the earlier point by its parameter,
            // so the curve parameter enters mirrored.
            EvaluationMethod::DeCasteljau => de_casteljau_point(&self.points, 1.0 - t)
                .ok_or_else(|| GeometryError::Degenerate("empty control polygon".into()))?,
        };
        Ok(point)
    }

    #[allow(clippy::cast_precision_loss)]
    fn tangent(&self, t: f64) -> Result<Vector3> {
        // Hodograph: P'(t) = n · Σ (Pᵢ₊₁ − Pᵢ) · B(n − 1, i, t)
        let n = self.degree();
        let weights = bernstein_weights(n - 1, t);
        let derivative = self
            .points
            .windows(2)
            .zip(weights)
            .fold(Vector3::zeros(), |acc, (pair, w)| {
                acc + (pair[1] - pair[0]) * w
            })
            * n as f64;
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        (last - first).norm() < TOLERANCE
    }
}
