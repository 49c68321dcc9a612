//! Frame timing utilities
//!
//! `FrameClock` turns raw animation-frame timestamps into a bounded
//! integration step, and `FrameStats` counts frames over a rolling window
//! to publish frames-per-second.

use serde::{Deserialize, Serialize};
use crate::models::config::TimingConfig;

/// Rolling frames-per-second counter
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Last published frame rate
    pub fps: u32,

    /// Frames counted in the current window
    pub frame_count: u32,

    /// Start of the current window (milliseconds)
    pub window_start: Option<f64>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame at `now_ms`.
    ///
    /// Returns the new rate when a window of `window_ms` has closed.
    pub fn record_frame(&mut self, now_ms: f64, window_ms: f64) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now_ms);
        self.frame_count += 1;

        if now_ms - start >= window_ms {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.window_start = Some(now_ms);
            return Some(self.fps);
        }

        None
    }
}

/// Converts elapsed time between frames into a clamped step in nominal frames
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_time: Option<f64>,
    nominal_frame_ms: f64,
    max_delta: f64,
}

impl FrameClock {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            last_time: None,
            nominal_frame_ms: timing.nominal_frame_ms,
            max_delta: timing.max_delta,
        }
    }

    /// Step for a frame at `now_ms`, in `[0, max_delta]`.
    ///
    /// The first frame counts as exactly one nominal frame.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_time {
            Some(last) => ((now_ms - last) / self.nominal_frame_ms).clamp(0.0, self.max_delta),
            None => 1.0_f64.min(self.max_delta),
        };
        self.last_time = Some(now_ms);
        delta
    }

    /// Forget the previous timestamp so the next frame starts fresh
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_one_nominal_step() {
        let mut clock = FrameClock::new(&TimingConfig::default());
        assert_eq!(clock.advance(1234.0), 1.0);
    }

    #[test]
    fn test_delta_is_relative_to_nominal_frame() {
        let timing = TimingConfig {
            nominal_frame_ms: 10.0,
            ..TimingConfig::default()
        };
        let mut clock = FrameClock::new(&timing);
        clock.advance(0.0);
        assert_eq!(clock.advance(15.0), 1.5);
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let timing = TimingConfig::default();
        let mut clock = FrameClock::new(&timing);
        clock.advance(0.0);
        let delta = clock.advance(10.0 * timing.nominal_frame_ms);
        assert_eq!(delta, 2.0);
    }

    #[test]
    fn test_backwards_clock_gives_zero() {
        let mut clock = FrameClock::new(&TimingConfig::default());
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
    }

    #[test]
    fn test_fps_published_after_window() {
        let mut stats = FrameStats::new();
        let mut published = None;
        // 50 frames at 20ms, then the frame that closes the window
        for i in 0..=50 {
            if let Some(fps) = stats.record_frame(i as f64 * 20.0, 1000.0) {
                published = Some(fps);
            }
        }

        assert_eq!(published, Some(51));
        assert_eq!(stats.fps, 51);
        assert_eq!(stats.frame_count, 0);
    }

    #[test]
    fn test_fps_not_published_inside_window() {
        let mut stats = FrameStats::new();
        assert_eq!(stats.record_frame(0.0, 1000.0), None);
        assert_eq!(stats.record_frame(500.0, 1000.0), None);
        assert_eq!(stats.fps, 0);
        assert_eq!(stats.frame_count, 2);
    }
}
