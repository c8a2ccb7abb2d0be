use crate::math::Point3;

/// One level of de Casteljau subdivision.
///
/// Returns `k - 1` points for `k` inputs, where
/// `out[i] = points[i] · t + points[i + 1] · (1 − t)`. Fewer than two inputs
/// yield an empty result. `t` is not clamped.
#[must_use]
pub fn linear_combination(points: &[Point3], t: f64) -> Vec<Point3> {
    points
        .windows(2)
        .map(|pair| Point3::from(pair[0].coords * t + pair[1].coords * (1.0 - t)))
        .collect()
}

/// Collapses `points` to a single point by applying [`linear_combination`]
/// until one point remains. Returns `None` for an empty input.
#[must_use]
pub fn de_casteljau_point(points: &[Point3], t: f64) -> Option<Point3> {
    let mut level = points.to_vec();
    while level.len() > 1 {
        level = linear_combination(&level, t);
    }
    level.pop()
}
