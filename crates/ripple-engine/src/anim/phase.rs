/// Phase added per frame.
pub const PHASE_STEP: f32 = 0.2;

/// Wrap-around point of the phase: `2 * 3.141`, not `TAU`.
pub const PHASE_PERIOD: f32 = 2.0 * 3.141;

/// Frame-stepped phase fed to the `phase` shader uniform.
///
/// Advances by a fixed step per rendered frame rather than by wall time, so
/// animation speed follows the display refresh rate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Phase {
    value: f32,
    step: f32,
    period: f32,
}

impl Phase {
    pub fn new(step: f32, period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self {
            value: 0.0,
            step,
            period,
        }
    }

    /// Current value, in `[0, period)` for non-negative steps.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the value for this frame, then steps and wraps.
    pub fn advance(&mut self) -> f32 {
        let current = self.value;
        self.value = (self.value + self.step) % self.period;
        current
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::new(PHASE_STEP, PHASE_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_zero() {
        let mut p = Phase::default();
        assert_eq!(p.advance(), 0.0);
        assert!((p.value() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn wraps_at_period() {
        let mut p = Phase::new(1.0, 2.5);
        let seen: Vec<f32> = (0..6).map(|_| p.advance()).collect();
        assert_eq!(seen, vec![0.0, 1.0, 2.0, 0.5, 1.5, 0.0]);
    }

    #[test]
    fn stays_in_range_over_many_frames() {
        let mut p = Phase::default();
        for _ in 0..10_000 {
            let v = p.advance();
            assert!((0.0..PHASE_PERIOD).contains(&v), "phase {v} out of range");
        }
    }

    #[test]
    fn period_is_not_tau() {
        assert!((PHASE_PERIOD - 6.282).abs() < 1e-6);
    }
}
