use std::time::{Duration, Instant};

/// Timing for a single frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Instant the tick was taken at.
    pub now: Instant,

    /// Zero-based frame number.
    pub frame_index: u64,
}

/// Per-loop frame clock.
///
/// `dt` is clamped to `[dt_min, dt_max]` so a stalled process (debugger,
/// compositor hiccup) does not produce a huge step on the next frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        let base = Instant::now();
        assert_eq!(clock.tick_at(base).frame_index, 0);
        assert_eq!(clock.tick_at(base + Duration::from_millis(16)).frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn dt_is_clamped_after_a_stall() {
        let mut clock = FrameClock::new();
        let base = Instant::now();
        clock.tick_at(base);
        let ft = clock.tick_at(base + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn dt_has_a_floor() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_secs(1));
        let base = Instant::now();
        clock.tick_at(base);
        let ft = clock.tick_at(base);
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }
}
