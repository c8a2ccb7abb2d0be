/// Direction the interpolation parameter is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Paused,
    Increasing,
    Decreasing,
}

/// Ping-pong animation of the subdivision parameter `t` over `[0, 1]`.
///
/// Driven once per frame by [`step`](Self::step). Reaching either end pauses
/// the animation and arms the opposite direction for the next
/// [`toggle`](Self::toggle).
#[derive(Debug, Clone)]
pub struct ParameterAnimator {
    t: f64,
    delta: f64,
    state: AnimationState,
    /// Direction to resume in; `Paused` until the first toggle.
    resume: AnimationState,
}

impl ParameterAnimator {
    /// Creates a paused animator at `t` (clamped into `[0, 1]`) that moves
    /// `delta` per step.
    #[must_use]
    pub fn new(t: f64, delta: f64) -> Self {
        Self {
            t: t.clamp(0.0, 1.0),
            delta,
            state: AnimationState::Paused,
            resume: AnimationState::Paused,
        }
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Moves `t` directly, clamped into `[0, 1]`. The animation state is kept.
    pub fn set_t(&mut self, t: f64) {
        self.t = t.clamp(0.0, 1.0);
    }

    /// Starts, pauses or resumes the animation.
    pub fn toggle(&mut self) {
        match (self.state, self.resume) {
            (AnimationState::Paused, AnimationState::Paused) => {
                self.state = AnimationState::Increasing;
                self.resume = AnimationState::Increasing;
            }
            (AnimationState::Paused, resume) => self.state = resume,
            (running, _) => {
                self.resume = running;
                self.state = AnimationState::Paused;
            }
        }
        tracing::debug!(state = ?self.state, t = self.t, "animation toggled");
    }

    /// Advances `t` by one step and returns the new value.
    pub fn step(&mut self) -> f64 {
        match self.state {
            AnimationState::Paused => {}
            AnimationState::Increasing => {
                self.t += self.delta;
                if self.t > 1.0 {
                    self.t = 1.0;
                    self.state = AnimationState::Paused;
                    self.resume = AnimationState::Decreasing;
                    tracing::debug!("animation reached t = 1");
                }
            }
            AnimationState::Decreasing => {
                self.t -= self.delta;
                if self.t < 0.0 {
                    self.t = 0.0;
                    self.state = AnimationState::Paused;
                    self.resume = AnimationState::Increasing;
                    tracing::debug!("animation reached t = 0");
                }
            }
        }
        self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_paused() {
        let mut a = ParameterAnimator::new(0.25, 0.1);
        assert_eq!(a.state(), AnimationState::Paused);
        assert_relative_eq!(a.step(), 0.25);
    }

    #[test]
    fn first_toggle_increases() {
        let mut a = ParameterAnimator::new(0.25, 0.1);
        a.toggle();
        assert_eq!(a.state(), AnimationState::Increasing);
        assert_relative_eq!(a.step(), 0.35);
    }

    #[test]
    fn toggle_pauses_and_resumes_same_direction() {
        let mut a = ParameterAnimator::new(0.5, 0.1);
        a.toggle();
        a.toggle();
        assert_eq!(a.state(), AnimationState::Paused);
        assert_relative_eq!(a.step(), 0.5);
        a.toggle();
        assert_eq!(a.state(), AnimationState::Increasing);
    }

    #[test]
    fn bounces_off_one() {
        let mut a = ParameterAnimator::new(0.9, 0.25);
        a.toggle();
        assert_relative_eq!(a.step(), 1.0);
        assert_eq!(a.state(), AnimationState::Paused);
        a.toggle();
        assert_eq!(a.state(), AnimationState::Decreasing);
        assert_relative_eq!(a.step(), 0.75);
    }

    #[test]
    fn bounces_off_zero() {
        let mut a = ParameterAnimator::new(0.9, 0.25);
        a.toggle();
        a.step();
        a.toggle();
        for _ in 0..10 {
            a.step();
        }
        assert_relative_eq!(a.t(), 0.0);
        assert_eq!(a.state(), AnimationState::Paused);
        a.toggle();
        assert_eq!(a.state(), AnimationState::Increasing);
    }

    #[test]
    fn set_t_clamps() {
        let mut a = ParameterAnimator::new(2.0, 0.1);
        assert_relative_eq!(a.t(), 1.0);
        a.set_t(-3.0);
        assert_relative_eq!(a.t(), 0.0);
        a.set_t(0.4);
        assert_relative_eq!(a.t(), 0.4);
    }
}
