//! Per-particle transition records.
//!
//! Each particle gets its own tween with an independent random duration and
//! start offset. The staggering is what makes a formation change read as a
//! swarm instead of one rigid tween.

use glam::Vec3;
use rand::Rng;
use web_time::{Duration, Instant};

use crate::options::TransitionOptions;
use crate::util::easing::EasingFunction;

/// Bounded-time movement of one particle toward its formation target.
///
/// Position and color interpolate on independent windows; the color window
/// is typically shorter so the swarm re-dresses before it finishes moving.
#[derive(Debug, Clone)]
pub struct ParticleTween {
    /// Position at transition start.
    pub start_position: Vec3,
    /// Color at transition start.
    pub start_color: Vec3,
    /// Target position (exact value once settled).
    pub target_position: Vec3,
    /// Target color (exact value once settled).
    pub target_color: Vec3,
    start: Instant,
    duration: Duration,
    color_duration: Duration,
    position_settled: bool,
    color_settled: bool,
}

impl ParticleTween {
    /// Build a tween with freshly sampled timing: duration uniform in the
    /// configured bounds, start offset uniform in `[0, stagger_max]`, color
    /// window scaled down from the position duration.
    pub fn sample(
        start_position: Vec3,
        start_color: Vec3,
        target_position: Vec3,
        target_color: Vec3,
        now: Instant,
        opts: &TransitionOptions,
        rng: &mut impl Rng,
    ) -> Self {
        let (lo, hi) = opts.duration_range();
        let duration_secs = rng.random_range(lo..=hi);
        let stagger_secs = rng.random_range(0.0..=opts.stagger_max.max(0.0));
        let color_secs = duration_secs * opts.color_duration_scale.max(0.0);

        Self {
            start_position,
            start_color,
            target_position,
            target_color,
            start: now + Duration::from_secs_f32(stagger_secs),
            duration: Duration::from_secs_f32(duration_secs),
            color_duration: Duration::from_secs_f32(color_secs),
            position_settled: false,
            color_settled: false,
        }
    }

    /// Explicit-timing constructor (for tests).
    #[must_use]
    pub fn with_timing(
        start_position: Vec3,
        target_position: Vec3,
        start: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            start_position,
            start_color: Vec3::ONE,
            target_position,
            target_color: Vec3::ONE,
            start,
            duration,
            color_duration: duration,
            position_settled: false,
            color_settled: false,
        }
    }

    /// Raw position progress in [0, 1]; zero while the stagger offset has
    /// not elapsed, one once the duration has.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        progress_in_window(self.start, self.duration, now)
    }

    /// Raw color progress in [0, 1] on the color window.
    #[must_use]
    pub fn color_progress(&self, now: Instant) -> f32 {
        progress_in_window(self.start, self.color_duration, now)
    }

    /// Interpolated position at `now` under `easing`.
    #[must_use]
    pub fn position_at(&self, now: Instant, easing: EasingFunction) -> Vec3 {
        let eased = easing.evaluate(self.progress(now));
        self.start_position
            + (self.target_position - self.start_position) * eased
    }

    /// Interpolated color at `now` under `easing`.
    #[must_use]
    pub fn color_at(&self, now: Instant, easing: EasingFunction) -> Vec3 {
        let eased = easing.evaluate(self.color_progress(now));
        self.start_color + (self.target_color - self.start_color) * eased
    }

    /// Whether the position window has completed and been snapped.
    #[must_use]
    pub fn position_settled(&self) -> bool {
        self.position_settled
    }

    /// Mark the position window as snapped to target.
    pub fn settle_position(&mut self) {
        self.position_settled = true;
    }

    /// Whether the color window has completed and been snapped.
    #[must_use]
    pub fn color_settled(&self) -> bool {
        self.color_settled
    }

    /// Mark the color window as snapped to target.
    pub fn settle_color(&mut self) {
        self.color_settled = true;
    }

    /// Whether both windows have been snapped.
    #[must_use]
    pub fn settled(&self) -> bool {
        self.position_settled && self.color_settled
    }
}

/// Clamped progress of a window starting at `start` lasting `duration`.
/// Zero-length windows are complete the instant they begin.
fn progress_in_window(start: Instant, duration: Duration, now: Instant) -> f32 {
    if now < start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}
