mod bezier;

pub use bezier::{Bezier, EvaluationMethod};

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Closed parameter interval `[t_min, t_max]` a curve is defined over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    pub t_min: f64,
    pub t_max: f64,
}

impl CurveDomain {
    /// The unit interval `[0, 1]` shared by all Bézier curves.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            t_min: 0.0,
            t_max: 1.0,
        }
    }
}

/// A parametric 3D curve evaluated over its [`CurveDomain`].
///
/// Parameters outside the domain are not rejected; polynomial curves simply
/// extrapolate.
pub trait Curve {
    /// Point at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Normalized first derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `t`.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    fn domain(&self) -> CurveDomain;

    /// Whether the start and end points coincide.
    fn is_closed(&self) -> bool;
}
