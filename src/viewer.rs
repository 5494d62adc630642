//! Headless frame loop for the demo binary.
//!
//! Wires the engine to a renderer, the timer-based gesture simulator, and a
//! stdin-backed keyboard substitute, then steps frames at a fixed pace.
//!
//! ```no_run
//! # use glimmer::Viewer;
//! # use web_time::Duration;
//! Viewer::builder()
//!     .run_for(Duration::from_secs(30))
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender};

use web_time::{Duration, Instant};

use crate::camera::CameraUniform;
use crate::engine::{SwarmCommand, SwarmEngine};
use crate::error::GlimmerError;
use crate::input::{Gesture, GestureSimulator};
use crate::options::{KeybindingOptions, Options};
use crate::render::{FrameData, LogRenderer, SwarmRenderer};
use crate::status::{Severity, SharedStatus, StatusSink};
use crate::util::frame_timing::FrameTiming;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    seed: Option<u64>,
    run_for: Option<Duration>,
    gesture_interval: Duration,
    stdin_gestures: bool,
    target_fps: u32,
    renderer: Option<Box<dyn SwarmRenderer>>,
}

impl ViewerBuilder {
    /// Builder with sensible defaults: default options, OS seeding, the
    /// 3-second gesture simulator, no stdin reader, 60 FPS pacing, and the
    /// log renderer.
    fn new() -> Self {
        Self {
            options: None,
            seed: None,
            run_for: None,
            gesture_interval: Duration::from_secs(3),
            stdin_gestures: false,
            target_fps: 60,
            renderer: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Seed the engine and simulator deterministically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Stop after the given wall-clock duration (default: run until quit).
    #[must_use]
    pub fn run_for(mut self, duration: Duration) -> Self {
        self.run_for = Some(duration);
        self
    }

    /// Interval between simulated gesture emissions.
    #[must_use]
    pub fn with_gesture_interval(mut self, interval: Duration) -> Self {
        self.gesture_interval = interval;
        self
    }

    /// Read gesture keys from stdin (`1`/`2`/`3`/`space`, gesture labels,
    /// or `quit`).
    #[must_use]
    pub fn with_stdin_gestures(mut self, enabled: bool) -> Self {
        self.stdin_gestures = enabled;
        self
    }

    /// Frame pacing target (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Use a custom renderer instead of the log-backed one.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn SwarmRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer { config: self }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// Drives the swarm engine frame by frame.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the loop. Blocks until the configured duration elapses or a `quit` line
/// arrives on stdin.
pub struct Viewer {
    config: ViewerBuilder,
}

/// Events delivered from outside the frame loop.
enum ViewerEvent {
    Gesture(Gesture),
    ToggleFormation,
    Quit,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Run the frame loop. Blocks until done.
    pub fn run(self) -> Result<(), GlimmerError> {
        let config = self.config;
        let start = Instant::now();
        let options = config.options.unwrap_or_default();
        let shared = SharedStatus::default();

        let mut engine = match config.seed {
            Some(seed) => SwarmEngine::seeded(options.clone(), start, seed),
            None => SwarmEngine::new(options.clone(), start),
        };
        engine.set_status_sink(Box::new(shared.clone()));

        let mut renderer = config
            .renderer
            .unwrap_or_else(|| Box::new(LogRenderer::default()));

        // The swarm is only populated once the renderer boundary answers;
        // an unavailable context leaves the system visibly inert rather
        // than failing fatally.
        if probe_renderer(renderer.as_mut()) {
            engine.init_swarm();
        } else {
            let mut sink = shared.clone();
            sink.publish(
                "renderer unavailable, swarm inert",
                Severity::Warning,
            );
        }

        let (tx, rx): (Sender<ViewerEvent>, Receiver<ViewerEvent>) =
            mpsc::channel();
        if config.stdin_gestures {
            spawn_stdin_reader(tx, options.keybindings.clone())?;
        }

        let mut simulator = match config.seed {
            Some(seed) => {
                GestureSimulator::seeded(config.gesture_interval, start, seed)
            }
            None => GestureSimulator::new(config.gesture_interval, start),
        };
        let mut timing = FrameTiming::new(config.target_fps);

        loop {
            let now = Instant::now();
            if let Some(limit) = config.run_for {
                if now.saturating_duration_since(start) >= limit {
                    log::info!(
                        "viewer finished after {limit:?} at {:.0} fps",
                        timing.fps()
                    );
                    return Ok(());
                }
            }

            // External events are queued before this frame's mutation step.
            loop {
                match rx.try_recv() {
                    Ok(ViewerEvent::Gesture(gesture)) => {
                        engine.push_gesture(gesture);
                    }
                    Ok(ViewerEvent::ToggleFormation) => {
                        engine.execute(SwarmCommand::ToggleFormation, now);
                    }
                    Ok(ViewerEvent::Quit) => return Ok(()),
                    Err(_) => break,
                }
            }
            if let Some(gesture) = simulator.poll(now) {
                engine.push_gesture(gesture);
            }

            engine.tick(now);

            if let Some(frame) = engine.frame() {
                if let Err(e) = renderer.render(&frame) {
                    log::error!("render failed: {e}");
                }
            }
            if let Some((message, _severity)) = shared.active(now) {
                log::trace!("status: {message}");
            }

            timing.end_frame();
            let wait = timing.time_until_next_frame();
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
    }
}

/// Check the renderer boundary with an empty frame. A failure here means
/// the context is unusable and the swarm should stay unpopulated.
pub(crate) fn probe_renderer(renderer: &mut dyn SwarmRenderer) -> bool {
    let empty = FrameData {
        positions: &[],
        colors: &[],
        sizes: &[],
        camera: CameraUniform::new(),
    };
    match renderer.render(&empty) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("renderer probe failed: {e}");
            false
        }
    }
}

/// Map a typed stdin token to the key-code vocabulary of the bindings map.
fn key_code_for(token: &str) -> String {
    match token {
        "1" => "Digit1".to_owned(),
        "2" => "Digit2".to_owned(),
        "3" => "Digit3".to_owned(),
        "space" => "Space".to_owned(),
        other => other.to_owned(),
    }
}

/// Background thread translating stdin lines into viewer events.
fn spawn_stdin_reader(
    tx: Sender<ViewerEvent>,
    bindings: KeybindingOptions,
) -> Result<(), GlimmerError> {
    std::thread::Builder::new()
        .name("gesture-keys".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let token = line.trim();
                if token.is_empty() {
                    continue;
                }
                if token.eq_ignore_ascii_case("quit") || token == "q" {
                    let _ = tx.send(ViewerEvent::Quit);
                    break;
                }
                if let Some(gesture) = Gesture::parse(token) {
                    let _ = tx.send(ViewerEvent::Gesture(gesture));
                    continue;
                }
                if let Some(action) = bindings.lookup(&key_code_for(token)) {
                    let event = action
                        .gesture()
                        .map_or(ViewerEvent::ToggleFormation, ViewerEvent::Gesture);
                    let _ = tx.send(event);
                }
            }
        })
        .map(|_| ())
        .map_err(GlimmerError::ThreadSpawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;

    struct FailingRenderer;

    impl SwarmRenderer for FailingRenderer {
        fn resize(&mut self, _width: u32, _height: u32) {}

        fn render(
            &mut self,
            _frame: &FrameData<'_>,
        ) -> Result<(), RenderError> {
            Err(RenderError::ContextUnavailable("no adapter".to_owned()))
        }
    }

    #[test]
    fn probe_accepts_a_working_renderer() {
        let mut renderer = LogRenderer::new(1);
        assert!(probe_renderer(&mut renderer));
    }

    #[test]
    fn probe_rejects_an_unavailable_renderer() {
        let mut renderer = FailingRenderer;
        assert!(!probe_renderer(&mut renderer));
    }

    #[test]
    fn stdin_tokens_map_to_key_codes() {
        assert_eq!(key_code_for("1"), "Digit1");
        assert_eq!(key_code_for("2"), "Digit2");
        assert_eq!(key_code_for("3"), "Digit3");
        assert_eq!(key_code_for("space"), "Space");
        assert_eq!(key_code_for("Escape"), "Escape");
    }

    #[test]
    fn bounded_run_returns() {
        use crate::options::{Options, SwarmOptions};

        let options = Options {
            swarm: SwarmOptions {
                particle_count: 50,
                ..SwarmOptions::default()
            },
            ..Options::default()
        };
        Viewer::builder()
            .with_options(options)
            .with_seed(9)
            .run_for(Duration::from_millis(50))
            .with_target_fps(240)
            .build()
            .run()
            .unwrap();
    }

    #[test]
    fn failing_renderer_leaves_the_loop_inert_but_alive() {
        Viewer::builder()
            .with_seed(10)
            .run_for(Duration::from_millis(10))
            .with_renderer(Box::new(FailingRenderer))
            .build()
            .run()
            .unwrap();
    }
}
