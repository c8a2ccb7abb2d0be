use crate::error::{Result, SessionError};

/// Parameters for an editing session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Segments per sampled curve (the curve yields `sample_count + 1` points).
    pub sample_count: usize,
    /// Change of `t` per animation step.
    pub step_delta: f64,
    /// Subdivision parameter at session start.
    pub initial_t: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            step_delta: 0.005,
            initial_t: 0.25,
        }
    }
}

impl SessionConfig {
    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_count` is zero, `step_delta` is not a finite
    /// positive number, or `initial_t` lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(SessionError::InvalidConfig("sample_count must be at least 1".into()).into());
        }
        if !self.step_delta.is_finite() || self.step_delta <= 0.0 {
            return Err(SessionError::InvalidConfig(format!(
                "step_delta must be finite and positive, got {}",
                self.step_delta
            ))
            .into());
        }
        if !(0.0..=1.0).contains(&self.initial_t) {
            return Err(SessionError::InvalidConfig(format!(
                "initial_t must lie in [0, 1], got {}",
                self.initial_t
            ))
            .into());
        }
        Ok(())
    }
}
