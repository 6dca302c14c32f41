/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct shown in the overlay and control
 * panel, and FrameStats, which folds per-frame timings into one report per
 * second for the log.
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub average_speed: f32,
}

/// Per-second summary produced by [`FrameStats::record`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub fps: f32,
    pub mean_frame_time: Duration,
}

#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    frames: u32,
    elapsed: Duration,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Adds one frame; returns a report once `interval` has been covered.
    pub fn record(&mut self, frame_time: Duration) -> Option<FrameReport> {
        self.frames += 1;
        self.elapsed += frame_time;

        if self.elapsed < self.interval {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let report = FrameReport {
            frames: self.frames,
            fps: self.frames as f32 / seconds,
            mean_frame_time: self.elapsed / self.frames,
        };

        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_interval() {
        let mut stats = FrameStats::new(Duration::from_millis(100));
        for _ in 0..9 {
            assert_eq!(stats.record(Duration::from_millis(10)), None);
        }

        let report = stats.record(Duration::from_millis(10)).unwrap();
        assert_eq!(report.frames, 10);
        assert_eq!(report.mean_frame_time, Duration::from_millis(10));
        assert!((report.fps - 100.0).abs() < 0.01);

        // Counters start over after a report
        assert_eq!(stats.record(Duration::from_millis(10)), None);
    }

    #[test]
    fn one_slow_frame_reports_immediately() {
        let mut stats = FrameStats::default();
        let report = stats.record(Duration::from_secs(2)).unwrap();
        assert_eq!(report.frames, 1);
        assert!((report.fps - 0.5).abs() < 1e-6);
    }
}
