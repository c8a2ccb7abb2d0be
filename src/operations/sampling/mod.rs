mod bezier_curve;

pub use bezier_curve::{bernstein_point, SampleBezierCurve};
