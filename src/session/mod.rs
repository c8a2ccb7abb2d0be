//! Editing session: the state a render loop keeps between frames.

mod animator;
mod config;
mod shared;

pub use animator::{AnimationState, ParameterAnimator};
pub use config::SessionConfig;
pub use shared::SharedSession;

use crate::error::Result;
use crate::geometry::ControlPointSet;
use crate::math::Point3;
use crate::operations::sampling::SampleBezierCurve;
use crate::operations::subdivision::SubdivisionLevels;

/// Control points, animated subdivision parameter and sampling settings of
/// one interactive editing session.
#[derive(Debug, Clone)]
pub struct CurveSession {
    points: ControlPointSet,
    animator: ParameterAnimator,
    config: SessionConfig,
}

impl CurveSession {
    /// Creates an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            points: ControlPointSet::new(),
            animator: ParameterAnimator::new(config.initial_t, config.step_delta),
            config,
        })
    }

    #[must_use]
    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    #[must_use]
    pub fn animator(&self) -> &ParameterAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ParameterAnimator {
        &mut self.animator
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// See [`ControlPointSet::push`].
    pub fn push(&mut self, point: Point3) -> bool {
        self.points.push(point)
    }

    /// See [`ControlPointSet::pop`].
    pub fn pop(&mut self) -> bool {
        self.points.pop()
    }

    /// See [`ControlPointSet::vertices`].
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        self.points.vertices()
    }

    /// Samples the curve with the configured sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn curve(&self) -> Result<Vec<Point3>> {
        SampleBezierCurve::new(self.config.sample_count).execute(&self.points)
    }

    /// De Casteljau levels at the current animation parameter.
    #[must_use]
    pub fn subdivision(&self) -> Vec<Vec<Point3>> {
        SubdivisionLevels::new(self.animator.t()).execute(&self.points)
    }

    /// Advances the animation by one frame and returns the new `t`.
    pub fn advance(&mut self) -> f64 {
        self.animator.step()
    }
}
