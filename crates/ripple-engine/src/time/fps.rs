use std::time::Instant;

/// Frames between two fps reports.
pub const DEFAULT_REPORT_EVERY: u64 = 100;

/// Average frame rate since start, reported every `report_every` frames.
///
/// The average is cumulative: `frames / seconds since start`, not a
/// sliding window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    start: Instant,
    frames: u64,
    report_every: u64,
}

impl FpsCounter {
    pub fn new(report_every: u64) -> Self {
        Self::with_start(Instant::now(), report_every)
    }

    pub fn with_start(start: Instant, report_every: u64) -> Self {
        Self {
            start,
            frames: 0,
            report_every: report_every.max(1),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn record_frame(&mut self) -> Option<f32> {
        self.record_frame_at(Instant::now())
    }

    /// Counts one frame; returns the average rate when a report is due.
    pub fn record_frame_at(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        if self.frames % self.report_every != 0 {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        if elapsed <= 0.0 {
            return None;
        }

        Some(self.frames as f32 / elapsed)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_EVERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reports_only_on_multiples() {
        let start = Instant::now();
        let mut fps = FpsCounter::with_start(start, 100);
        let now = start + Duration::from_secs(1);

        for _ in 0..99 {
            assert!(fps.record_frame_at(now).is_none());
        }
        assert!(fps.record_frame_at(now).is_some());
        assert!(fps.record_frame_at(now).is_none());
        assert_eq!(fps.frames(), 101);
    }

    #[test]
    fn rate_is_cumulative_average() {
        let start = Instant::now();
        let mut fps = FpsCounter::with_start(start, 100);

        for _ in 0..99 {
            fps.record_frame_at(start);
        }
        let rate = fps.record_frame_at(start + Duration::from_secs(2)).unwrap();
        assert!((rate - 50.0).abs() < 1e-3);

        for _ in 0..99 {
            fps.record_frame_at(start);
        }
        let rate = fps.record_frame_at(start + Duration::from_secs(4)).unwrap();
        assert!((rate - 50.0).abs() < 1e-3);
    }

    #[test]
    fn zero_elapsed_skips_report() {
        let start = Instant::now();
        let mut fps = FpsCounter::with_start(start, 1);
        assert!(fps.record_frame_at(start).is_none());
    }

    #[test]
    fn zero_interval_reports_every_frame() {
        let start = Instant::now();
        let mut fps = FpsCounter::with_start(start, 0);
        assert!(fps.record_frame_at(start + Duration::from_millis(10)).is_some());
    }
}
