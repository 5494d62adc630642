//! Frame pacing with FPS smoothing and optional frame limiting.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration based on target FPS.
    min_frame_duration: Duration,
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to step again.
    #[must_use]
    pub fn should_step(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time remaining until the next frame is due (zero when unlimited or
    /// already overdue). Callers may sleep for this long between frames.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after stepping a frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_steps() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_step());
        assert_eq!(timing.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn limited_waits_out_the_frame_budget() {
        let timing = FrameTiming::new(10);
        // A 100ms budget cannot have elapsed immediately after construction.
        assert!(!timing.should_step());
        assert!(timing.time_until_next_frame() > Duration::ZERO);
    }
}
