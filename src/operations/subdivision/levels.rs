use crate::geometry::ControlPointSet;
use crate::math::Point3;

use super::linear_combination;

/// Builds the nested polylines of de Casteljau's construction at one parameter.
///
/// The first level is the control polygon itself; each following level is one
/// [`linear_combination`] step of the previous, ending with a single point.
pub struct SubdivisionLevels {
    t: f64,
}

impl SubdivisionLevels {
    /// Creates a new `SubdivisionLevels` operation at parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the construction, returning `k` levels for `k` control points
    /// (none for an empty set).
    #[must_use]
    pub fn execute(&self, points: &ControlPointSet) -> Vec<Vec<Point3>> {
        let mut levels = Vec::with_capacity(points.len());
        let mut level = points.vertices();
        while !level.is_empty() {
            let next = linear_combination(&level, self.t);
            levels.push(level);
            level = next;
        }
        levels
    }
}
