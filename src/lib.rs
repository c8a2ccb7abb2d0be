pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{BezelError, Result};
pub use geometry::{Bezier, ControlPointSet, Curve};
pub use session::{CurveSession, SessionConfig, SharedSession};
