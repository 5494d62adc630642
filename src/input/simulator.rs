//! Interval-based random gesture source.
//!
//! A stand-in for a real camera-based detector: every `interval` it picks a
//! gesture uniformly at random and emits it, skipping the emission entirely
//! when the pick matches the label already in effect (a real detector only
//! reports changes).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{Duration, Instant};

use super::gesture::Gesture;

/// Emits a uniformly random gesture at a fixed interval, skipping repeats.
pub struct GestureSimulator {
    interval: Duration,
    next_emit: Instant,
    current: Option<Gesture>,
    rng: StdRng,
}

impl GestureSimulator {
    /// Create a simulator that first fires one `interval` after `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self::seeded(interval, now, rand::rng().random())
    }

    /// Create a deterministically seeded simulator (for tests).
    #[must_use]
    pub fn seeded(interval: Duration, now: Instant, seed: u64) -> Self {
        Self {
            interval,
            next_emit: now + interval,
            current: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The gesture currently in effect, if one has been emitted.
    #[must_use]
    pub fn current(&self) -> Option<Gesture> {
        self.current
    }

    /// Poll the simulator. Returns a gesture when the interval has elapsed
    /// and the fresh random pick differs from the one already in effect.
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        if now < self.next_emit {
            return None;
        }
        self.next_emit = now + self.interval;

        let pick = Gesture::ALL[self.rng.random_range(0..Gesture::ALL.len())];
        if self.current == Some(pick) {
            return None;
        }
        self.current = Some(pick);
        Some(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_before_first_interval() {
        let t0 = Instant::now();
        let mut sim = GestureSimulator::seeded(Duration::from_secs(3), t0, 7);
        assert_eq!(sim.poll(t0), None);
        assert_eq!(sim.poll(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn emits_after_interval() {
        let t0 = Instant::now();
        let mut sim = GestureSimulator::seeded(Duration::from_secs(3), t0, 7);
        let first = sim.poll(t0 + Duration::from_secs(3));
        assert!(first.is_some());
        assert_eq!(sim.current(), first);
    }

    #[test]
    fn never_repeats_the_gesture_in_effect() {
        let t0 = Instant::now();
        let mut sim = GestureSimulator::seeded(Duration::from_secs(1), t0, 42);
        let mut last = None;
        for step in 1..200u64 {
            if let Some(g) = sim.poll(t0 + Duration::from_secs(step)) {
                assert_ne!(Some(g), last, "emitted an unchanged gesture");
                last = Some(g);
            }
        }
        assert!(last.is_some(), "seeded run should emit at least once");
    }
}
