use crate::math::Point3;

/// Ordered control points of a Bézier curve.
///
/// Insertion order is the parameterization order. Two consecutive points are
/// never equal: [`push`](Self::push) rejects a point identical to the current
/// last one. Non-adjacent repeats are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSet {
    points: Vec<Point3>,
}

impl ControlPointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set by pushing each point in order, dropping consecutive repeats.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        points.iter().copied().collect()
    }

    /// Appends `point`.
    ///
    /// Returns `false` and leaves the set untouched when `point` is exactly
    /// equal to the current last point.
    pub fn push(&mut self, point: Point3) -> bool {
        if self.points.last() == Some(&point) {
            tracing::debug!(?point, "rejected control point equal to the last one");
            return false;
        }
        self.points.push(point);
        true
    }

    /// Removes the last point. Returns `false` if the set is empty.
    pub fn pop(&mut self) -> bool {
        if self.points.pop().is_none() {
            tracing::debug!("pop on empty control point set");
            return false;
        }
        true
    }

    /// Returns a copy of the control points in insertion order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        self.points.clone()
    }

    /// Borrows the control points in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the last control point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Curve degree (point count minus one), or `None` for an empty set.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }
}

impl FromIterator<Point3> for ControlPointSet {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        let mut set = Self::new();
        for point in iter {
            set.push(point);
        }
        set
    }
}
