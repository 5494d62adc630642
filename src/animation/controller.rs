//! The transition state machine.
//!
//! Idle until a formation change is requested; while transitioning it owns
//! one [`ParticleTween`] per particle and advances them every frame,
//! snapping each particle exactly onto its target when its window closes.
//! A new request mid-flight discards every in-flight tween and restarts
//! from whatever the store currently holds; there is no queueing.

use rand::Rng;
use web_time::Instant;

use super::tween::ParticleTween;
use crate::options::Options;
use crate::swarm::{formation, Formation, ParticleStore};
use crate::util::easing::EasingFunction;

/// Drives per-particle animated movement toward a target formation.
pub struct TransitionController {
    easing: EasingFunction,
    target: Option<Formation>,
    tweens: Vec<ParticleTween>,
}

impl TransitionController {
    /// Idle controller with the default ease-out curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            easing: EasingFunction::DEFAULT,
            target: None,
            tweens: Vec::new(),
        }
    }

    /// Use a custom easing curve for subsequent transitions.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Whether any particle is still unsettled.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// The formation currently being transitioned to, if any.
    #[must_use]
    pub fn target(&self) -> Option<Formation> {
        self.target
    }

    /// The target position assigned to particle `i` by the active
    /// transition, if one is running.
    #[must_use]
    pub fn target_position(&self, i: usize) -> Option<glam::Vec3> {
        if self.target.is_none() {
            return None;
        }
        self.tweens.get(i).map(|t| t.target_position)
    }

    /// Whether particle `i` is settled (true whenever the controller is
    /// idle). Settled particles belong to the ambient animator for the
    /// rest of the frame.
    #[must_use]
    pub fn particle_settled(&self, i: usize) -> bool {
        match self.target {
            None => true,
            Some(_) => {
                self.tweens.get(i).is_none_or(ParticleTween::position_settled)
            }
        }
    }

    /// Start a transition toward `target_formation`, replacing any in-flight
    /// transition wholesale. Every particle gets a freshly sampled target,
    /// color, duration, and stagger offset; its start state is whatever the
    /// store holds right now (mid-interpolation values included).
    pub fn begin(
        &mut self,
        target_formation: Formation,
        store: &ParticleStore,
        opts: &Options,
        now: Instant,
        rng: &mut impl Rng,
    ) {
        let count = store.len();
        let mut tweens = Vec::with_capacity(count);
        let palette = target_formation.palette(&opts.palette);

        for i in 0..count {
            let target_position = match target_formation {
                Formation::Floating => {
                    formation::floating_target(opts.swarm.bounds, rng)
                }
                Formation::Tree => {
                    formation::tree_target(i, count, &opts.formation, rng)
                }
            };
            let target_color = formation::palette_color(palette, rng);

            tweens.push(ParticleTween::sample(
                store.position(i),
                store.color(i),
                target_position,
                target_color,
                now,
                &opts.transition,
                rng,
            ));
        }

        log::debug!(
            "transition to {target_formation} started for {count} particles"
        );
        self.target = Some(target_formation);
        self.tweens = tweens;
    }

    /// Advance every unsettled particle to its interpolated state at `now`,
    /// snapping finished windows exactly onto their targets. Returns `true`
    /// while the transition is still running; on the frame every particle
    /// settles the controller returns to idle and reports `false`.
    pub fn update(&mut self, store: &mut ParticleStore, now: Instant) -> bool {
        if self.target.is_none() {
            return false;
        }

        let mut all_settled = true;
        for (i, tween) in self.tweens.iter_mut().enumerate() {
            if !tween.position_settled() {
                if tween.progress(now) >= 1.0 {
                    store.set_position(i, tween.target_position);
                    tween.settle_position();
                } else {
                    store.set_position(i, tween.position_at(now, self.easing));
                    all_settled = false;
                }
            }
            if !tween.color_settled() {
                if tween.color_progress(now) >= 1.0 {
                    store.set_color(i, tween.target_color);
                    tween.settle_color();
                } else {
                    store.set_color(i, tween.color_at(now, self.easing));
                    all_settled = false;
                }
            }
        }

        if all_settled {
            log::debug!("transition complete, controller idle");
            self.target = None;
            self.tweens.clear();
            return false;
        }
        true
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("target", &self.target)
            .field("tween_count", &self.tweens.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use web_time::Duration;

    use super::*;
    use crate::options::{Options, SwarmOptions};
    use crate::swarm::ParticleStore;

    fn test_setup(count: usize, seed: u64) -> (Options, ParticleStore, StdRng) {
        let opts = Options {
            swarm: SwarmOptions {
                particle_count: count,
                ..SwarmOptions::default()
            },
            ..Options::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let store = ParticleStore::new(&opts.swarm, &opts.palette, &mut rng);
        (opts, store, rng)
    }

    fn past_deadline(opts: &Options, t0: Instant) -> Instant {
        t0 + Duration::from_secs_f32(opts.transition.max_total_seconds())
            + Duration::from_millis(10)
    }

    #[test]
    fn idle_update_is_a_no_op() {
        let (_, mut store, _) = test_setup(8, 31);
        let mut controller = TransitionController::new();
        assert!(!controller.update(&mut store, Instant::now()));
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn every_particle_converges_exactly_onto_its_target() {
        let (opts, mut store, mut rng) = test_setup(50, 32);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();

        controller.begin(Formation::Tree, &store, &opts, t0, &mut rng);
        let targets: Vec<Vec3> = (0..store.len())
            .map(|i| controller.target_position(i).unwrap())
            .collect();

        let done = past_deadline(&opts, t0);
        assert!(!controller.update(&mut store, done));
        assert!(!controller.is_transitioning());
        for (i, target) in targets.iter().enumerate() {
            assert_eq!(store.position(i), *target, "particle {i} not snapped");
        }
    }

    #[test]
    fn timing_is_staggered_across_particles() {
        let (opts, mut store, mut rng) = test_setup(100, 33);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();

        controller.begin(Formation::Tree, &store, &opts, t0, &mut rng);
        // 1s in: the fastest tweens (0.5s duration, low stagger) are done,
        // the slowest (up to 2.5s duration + 0.35s stagger) are not.
        let mid = t0 + Duration::from_secs_f32(1.0);
        assert!(controller.update(&mut store, mid));
        let settled =
            (0..store.len()).filter(|&i| controller.particle_settled(i)).count();
        assert!(settled > 0, "no particle finished early");
        assert!(settled < store.len(), "all particles finished in lockstep");
    }

    #[test]
    fn new_transition_discards_in_flight_targets() {
        let (opts, mut store, mut rng) = test_setup(40, 34);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();

        controller.begin(Formation::Tree, &store, &opts, t0, &mut rng);
        let _ = controller.update(&mut store, t0 + Duration::from_millis(300));

        // Flip back mid-flight; the tree targets must be gone.
        let t1 = t0 + Duration::from_millis(400);
        controller.begin(Formation::Floating, &store, &opts, t1, &mut rng);
        let fresh: Vec<Vec3> = (0..store.len())
            .map(|i| controller.target_position(i).unwrap())
            .collect();

        let done = past_deadline(&opts, t1);
        let _ = controller.update(&mut store, done);
        let bounds = opts.swarm.bounds;
        for (i, target) in fresh.iter().enumerate() {
            assert_eq!(store.position(i), *target);
            assert!(store.position(i).x.abs() <= bounds[0]);
            assert!(store.position(i).y.abs() <= bounds[1]);
            assert!(store.position(i).z.abs() <= bounds[2]);
        }
    }

    #[test]
    fn restart_begins_from_interpolated_positions() {
        let (opts, mut store, mut rng) = test_setup(10, 35);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();

        controller.begin(Formation::Tree, &store, &opts, t0, &mut rng);
        let mid = t0 + Duration::from_millis(700);
        let _ = controller.update(&mut store, mid);
        let mid_positions: Vec<Vec3> =
            (0..store.len()).map(|i| store.position(i)).collect();

        controller.begin(Formation::Floating, &store, &opts, mid, &mut rng);
        // Immediately after the restart nothing has moved yet.
        let _ = controller.update(&mut store, mid);
        for (i, pos) in mid_positions.iter().enumerate() {
            assert!(
                (store.position(i) - *pos).length() < 1e-4,
                "particle {i} jumped on restart"
            );
        }
    }

    #[test]
    fn colors_settle_onto_palette_targets() {
        let (opts, mut store, mut rng) = test_setup(30, 36);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();

        controller.begin(Formation::Tree, &store, &opts, t0, &mut rng);
        let _ = controller.update(&mut store, past_deadline(&opts, t0));

        let palette: Vec<Vec3> = opts
            .palette
            .tree
            .iter()
            .map(|e| Vec3::from_array(e.color))
            .collect();
        for i in 0..store.len() {
            assert!(
                palette.contains(&store.color(i)),
                "particle {i} color {:?} not from the tree palette",
                store.color(i)
            );
        }
    }
}
