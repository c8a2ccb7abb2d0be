pub mod control_points;
pub mod curve;

pub use control_points::ControlPointSet;
pub use curve::{Bezier, Curve, CurveDomain, EvaluationMethod};
