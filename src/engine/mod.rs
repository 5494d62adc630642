//! The simulation engine: one owned context for the whole swarm.
//!
//! `SwarmEngine` owns the particle store, the transition controller, the
//! ambient animator, the orbit camera, the mode flag, and the random
//! source; there are no module-level singletons. Gestures are queued as
//! they arrive and drained at the start of each frame tick, so gesture
//! dispatch and frame mutation never interleave.

pub mod command;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::Instant;

pub use command::SwarmCommand;

use crate::animation::{AmbientMotion, TransitionController};
use crate::camera::OrbitCamera;
use crate::input::Gesture;
use crate::options::Options;
use crate::render::FrameData;
use crate::status::{LogStatus, Severity, StatusSink};
use crate::swarm::{Formation, ParticleStore};

/// Everything the swarm simulation owns, advanced one frame at a time.
pub struct SwarmEngine {
    options: Options,
    store: Option<ParticleStore>,
    controller: TransitionController,
    ambient: AmbientMotion,
    camera: OrbitCamera,
    mode: Formation,
    enlarged: bool,
    rng: StdRng,
    epoch: Instant,
    gesture_queue: VecDeque<Gesture>,
    status: Box<dyn StatusSink>,
}

impl SwarmEngine {
    /// Create an engine with an OS-seeded random source. The swarm itself
    /// is not populated until [`init_swarm`](Self::init_swarm) runs; until
    /// then every gesture is a logged no-op.
    #[must_use]
    pub fn new(options: Options, now: Instant) -> Self {
        let seed = rand::rng().random();
        Self::seeded(options, now, seed)
    }

    /// Create a deterministically seeded engine (for tests and replays).
    #[must_use]
    pub fn seeded(options: Options, now: Instant, seed: u64) -> Self {
        let ambient = AmbientMotion::new(options.motion.clone());
        let camera = OrbitCamera::new(&options.camera, 16.0 / 9.0);
        Self {
            options,
            store: None,
            controller: TransitionController::new(),
            ambient,
            camera,
            mode: Formation::Floating,
            enlarged: false,
            rng: StdRng::seed_from_u64(seed),
            epoch: now,
            gesture_queue: VecDeque::new(),
            status: Box::new(LogStatus),
        }
    }

    /// Replace the status sink (defaults to the log-backed sink).
    pub fn set_status_sink(&mut self, sink: Box<dyn StatusSink>) {
        self.status = sink;
    }

    /// Populate the particle store. Call once the renderer boundary is
    /// known to be usable; before this, the engine stays inert.
    pub fn init_swarm(&mut self) {
        let store = ParticleStore::new(
            &self.options.swarm,
            &self.options.palette,
            &mut self.rng,
        );
        log::info!("swarm initialized with {} particles", store.len());
        self.store = Some(store);
        self.status.publish("swarm ready", Severity::Success);
    }

    /// Whether the particle store exists.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    /// Current formation mode.
    #[must_use]
    pub fn mode(&self) -> Formation {
        self.mode
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    /// Number of particles (zero before init).
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.store.as_ref().map_or(0, ParticleStore::len)
    }

    /// The engine's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read access to the particle store, if initialized.
    #[must_use]
    pub fn store(&self) -> Option<&ParticleStore> {
        self.store.as_ref()
    }

    /// Queue a gesture for dispatch at the next frame tick.
    pub fn push_gesture(&mut self, gesture: Gesture) {
        self.gesture_queue.push_back(gesture);
    }

    /// Parse and queue an upstream gesture label. Unrecognized labels are
    /// ignored silently: a forward-compatible no-op, not an error.
    pub fn handle_gesture_label(&mut self, label: &str) {
        if let Some(gesture) = Gesture::parse(label) {
            self.push_gesture(gesture);
        }
    }

    /// Recompute the camera aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Execute one command immediately.
    ///
    /// Mode-flip commands are idempotent: requesting the formation already
    /// in effect does nothing. Commands that need the particle store are
    /// logged and ignored while the engine is uninitialized.
    pub fn execute(&mut self, command: SwarmCommand, now: Instant) {
        match command {
            SwarmCommand::SetFormation(formation) => {
                self.set_formation(formation, now);
            }
            SwarmCommand::ToggleFormation => {
                self.set_formation(self.mode.flipped(), now);
            }
            SwarmCommand::AdjustSize => self.adjust_size(),
        }
    }

    /// Advance the simulation one frame: drain queued gestures, advance the
    /// active transition, apply ambient motion to settled particles, and
    /// move the orbit camera.
    pub fn tick(&mut self, now: Instant) {
        while let Some(gesture) = self.gesture_queue.pop_front() {
            self.announce(gesture);
            self.execute(SwarmCommand::from_gesture(gesture), now);
        }

        if let Some(store) = self.store.as_mut() {
            let _ = self.controller.update(store, now);

            let elapsed = now.saturating_duration_since(self.epoch).as_secs_f32();
            for i in 0..store.len() {
                if self.controller.particle_settled(i) {
                    let next = self.ambient.step(
                        self.mode,
                        store.position(i),
                        elapsed,
                        i,
                    );
                    store.set_position(i, next);
                }
            }
        }

        let elapsed = now.saturating_duration_since(self.epoch).as_secs_f32();
        self.camera.advance(elapsed);
    }

    /// Draw data for the current frame, once the swarm exists.
    #[must_use]
    pub fn frame(&self) -> Option<FrameData<'_>> {
        self.store.as_ref().map(|store| FrameData {
            positions: store.positions(),
            colors: store.colors(),
            sizes: store.sizes(),
            camera: self.camera.uniform(),
        })
    }

    /// Publish the user-facing message for a recognized gesture.
    fn announce(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Open => self
                .status
                .publish("open palm: floating cloud", Severity::Info),
            Gesture::Fist => {
                self.status.publish("fist: forming tree", Severity::Success);
            }
            Gesture::Pinch => self
                .status
                .publish("pinch: adjusting size", Severity::Warning),
        }
    }

    fn set_formation(&mut self, formation: Formation, now: Instant) {
        let Some(store) = self.store.as_ref() else {
            log::debug!(
                "formation change to {formation} requested before init; ignored"
            );
            return;
        };
        if self.mode == formation {
            log::debug!("already in {formation} formation; ignored");
            return;
        }

        self.mode = formation;
        self.controller.begin(
            formation,
            store,
            &self.options,
            now,
            &mut self.rng,
        );
    }

    fn adjust_size(&mut self) {
        let Some(store) = self.store.as_mut() else {
            log::debug!("size adjust requested before init; ignored");
            return;
        };

        self.enlarged = !self.enlarged;
        let size = if self.enlarged {
            self.options.swarm.enlarged_size
        } else {
            self.options.swarm.base_size
        };
        store.set_uniform_size(size);
    }
}

impl std::fmt::Debug for SwarmEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmEngine")
            .field("mode", &self.mode)
            .field("particle_count", &self.particle_count())
            .field("transitioning", &self.is_transitioning())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::options::{MotionOptions, SwarmOptions};
    use crate::status::SharedStatus;

    fn test_options(count: usize) -> Options {
        Options {
            swarm: SwarmOptions {
                particle_count: count,
                ..SwarmOptions::default()
            },
            // Freeze ambient motion so settled positions stay put exactly.
            motion: MotionOptions {
                drift_amplitude: 0.0,
                pulse_amplitude: 0.0,
                ..MotionOptions::default()
            },
            ..Options::default()
        }
    }

    fn ready_engine(count: usize, seed: u64, t0: Instant) -> SwarmEngine {
        let mut engine = SwarmEngine::seeded(test_options(count), t0, seed);
        engine.init_swarm();
        engine
    }

    fn past_transition(engine: &SwarmEngine, from: Instant) -> Instant {
        from + Duration::from_secs_f32(
            engine.options().transition.max_total_seconds(),
        ) + Duration::from_millis(50)
    }

    #[test]
    fn gestures_before_init_are_ignored_diagnostics() {
        let t0 = Instant::now();
        let mut engine = SwarmEngine::seeded(test_options(10), t0, 1);
        engine.handle_gesture_label("fist");
        engine.tick(t0);
        assert!(!engine.is_ready());
        assert!(!engine.is_transitioning());
        assert_eq!(engine.mode(), Formation::Floating);
    }

    #[test]
    fn unknown_labels_are_silently_dropped() {
        let t0 = Instant::now();
        let mut engine = ready_engine(10, 2, t0);
        engine.handle_gesture_label("thumbs_up");
        engine.tick(t0);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn fist_then_open_walks_the_swarm_through_both_formations() {
        let t0 = Instant::now();
        let mut engine = ready_engine(100, 3, t0);

        engine.handle_gesture_label("fist");
        engine.tick(t0);
        assert_eq!(engine.mode(), Formation::Tree);
        assert!(engine.is_transitioning());

        let t1 = past_transition(&engine, t0);
        engine.tick(t1);
        assert!(!engine.is_transitioning());

        let formation_opts = &engine.options().formation;
        let max_radius = formation_opts.max_tree_radius();
        let max_height = formation_opts.max_tree_height();
        let store = engine.store().unwrap();
        for i in 0..store.len() {
            let p = store.position(i);
            let radius = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radius <= max_radius + 1e-3, "particle {i} outside cone");
            assert!(p.y >= -1e-3 && p.y <= max_height + 1e-3);
        }

        engine.handle_gesture_label("open");
        engine.tick(t1);
        assert_eq!(engine.mode(), Formation::Floating);

        let t2 = past_transition(&engine, t1);
        engine.tick(t2);
        assert!(!engine.is_transitioning());

        let bounds = engine.options().swarm.bounds;
        let store = engine.store().unwrap();
        for i in 0..store.len() {
            let p = store.position(i);
            assert!(p.x.abs() <= bounds[0] + 1e-3);
            assert!(p.y.abs() <= bounds[1] + 1e-3);
            assert!(p.z.abs() <= bounds[2] + 1e-3);
        }
    }

    #[test]
    fn repeated_fist_is_idempotent() {
        let t0 = Instant::now();
        let mut engine = ready_engine(40, 4, t0);

        engine.push_gesture(Gesture::Fist);
        engine.tick(t0);
        let t1 = past_transition(&engine, t0);
        engine.tick(t1);
        assert!(!engine.is_transitioning());

        let before: Vec<glam::Vec3> = {
            let store = engine.store().unwrap();
            (0..store.len()).map(|i| store.position(i)).collect()
        };

        engine.push_gesture(Gesture::Fist);
        engine.tick(t1);
        assert!(!engine.is_transitioning(), "no new transition should start");
        let store = engine.store().unwrap();
        for (i, p) in before.iter().enumerate() {
            assert_eq!(store.position(i), *p, "particle {i} moved");
        }
    }

    #[test]
    fn pinch_toggles_size_between_exactly_two_bounds() {
        let t0 = Instant::now();
        let mut engine = ready_engine(20, 5, t0);
        let base = engine.options().swarm.base_size;
        let enlarged = engine.options().swarm.enlarged_size;

        assert!(engine
            .store()
            .unwrap()
            .sizes()
            .iter()
            .all(|&s| s == base));

        engine.push_gesture(Gesture::Pinch);
        engine.tick(t0);
        assert!(engine
            .store()
            .unwrap()
            .sizes()
            .iter()
            .all(|&s| s == enlarged));
        assert_eq!(engine.mode(), Formation::Floating, "pinch must not flip mode");

        engine.push_gesture(Gesture::Pinch);
        engine.tick(t0);
        assert!(engine
            .store()
            .unwrap()
            .sizes()
            .iter()
            .all(|&s| s == base));
    }

    #[test]
    fn mode_flip_mid_transition_restarts_cleanly() {
        let t0 = Instant::now();
        let mut engine = ready_engine(60, 6, t0);

        engine.push_gesture(Gesture::Fist);
        engine.tick(t0);
        engine.tick(t0 + Duration::from_millis(300));
        assert!(engine.is_transitioning());

        engine.push_gesture(Gesture::Open);
        let t1 = t0 + Duration::from_millis(400);
        engine.tick(t1);
        assert_eq!(engine.mode(), Formation::Floating);

        let t2 = past_transition(&engine, t1);
        engine.tick(t2);
        assert!(!engine.is_transitioning());
        let bounds = engine.options().swarm.bounds;
        let store = engine.store().unwrap();
        for i in 0..store.len() {
            let p = store.position(i);
            assert!(p.x.abs() <= bounds[0] + 1e-3);
            assert!(p.y.abs() <= bounds[1] + 1e-3);
            assert!(p.z.abs() <= bounds[2] + 1e-3);
        }
    }

    #[test]
    fn gestures_publish_status_messages() {
        let t0 = Instant::now();
        let mut engine = ready_engine(10, 7, t0);
        let shared = SharedStatus::default();
        engine.set_status_sink(Box::new(shared.clone()));

        engine.push_gesture(Gesture::Fist);
        engine.tick(t0);

        let (message, severity) = shared.active(Instant::now()).unwrap();
        assert!(message.contains("forming tree"));
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn frame_exposes_flat_arrays_and_camera() {
        let t0 = Instant::now();
        let mut engine = ready_engine(12, 8, t0);
        engine.resize(800, 600);
        engine.tick(t0);

        let frame = engine.frame().unwrap();
        assert_eq!(frame.positions.len(), 12);
        assert_eq!(frame.colors.len(), 12);
        assert_eq!(frame.sizes.len(), 12);
        assert!((frame.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}
