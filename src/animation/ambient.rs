//! Ambient motion for settled particles.
//!
//! Floating mode gives each particle an individually phase-shifted bob from
//! offset sine/cosine waves of (elapsed time, particle index), cheap to
//! compute with no per-particle velocity state. A soft boundary contracts any
//! coordinate that drifts past the configured bound back toward the origin
//! instead of clamping it. Tree mode keeps the silhouette legible with a
//! much smaller vertical pulsation only.

use glam::Vec3;

use crate::options::MotionOptions;
use crate::swarm::Formation;

/// Per-frame perturbation for settled particles.
#[derive(Debug, Clone)]
pub struct AmbientMotion {
    opts: MotionOptions,
}

impl AmbientMotion {
    /// Build from motion options.
    #[must_use]
    pub fn new(opts: MotionOptions) -> Self {
        Self { opts }
    }

    /// Next position of a settled particle under the given formation.
    #[must_use]
    pub fn step(
        &self,
        formation: Formation,
        position: Vec3,
        elapsed: f32,
        index: usize,
    ) -> Vec3 {
        match formation {
            Formation::Floating => self.floating_step(position, elapsed, index),
            Formation::Tree => self.tree_step(position, elapsed, index),
        }
    }

    /// Floating drift: offset waves per axis, then soft containment.
    #[must_use]
    pub fn floating_step(
        &self,
        position: Vec3,
        elapsed: f32,
        index: usize,
    ) -> Vec3 {
        let phase = index as f32;
        let drift = Vec3::new(
            (elapsed + phase).sin(),
            (elapsed * 0.7 + phase).cos(),
            (elapsed * 1.3 + phase).sin(),
        ) * self.opts.drift_amplitude;

        self.contain(position + drift)
    }

    /// Tree pulsation: vertical only, deliberately small.
    #[must_use]
    pub fn tree_step(
        &self,
        position: Vec3,
        elapsed: f32,
        index: usize,
    ) -> Vec3 {
        let phase = index as f32;
        let pulse = (elapsed * self.opts.pulse_rate + phase).sin()
            * self.opts.pulse_amplitude;
        Vec3::new(position.x, position.y + pulse, position.z)
    }

    /// Contract any coordinate whose magnitude exceeds the soft bound.
    fn contain(&self, position: Vec3) -> Vec3 {
        let bound = self.opts.soft_bound;
        let damping = self.opts.containment_damping;
        let pull = |c: f32| if c.abs() > bound { c * damping } else { c };
        Vec3::new(pull(position.x), pull(position.y), pull(position.z))
    }
}
