//! Animation system: bounded per-particle formation transitions and the
//! ambient motion applied once a particle has settled.

/// Ambient drift, containment, and pulsation.
pub mod ambient;
/// The transition state machine.
pub mod controller;
/// Per-particle transition records.
pub mod tween;

pub use ambient::AmbientMotion;
pub use controller::TransitionController;
pub use tween::ParticleTween;
