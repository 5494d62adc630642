//! Camera system for the 3D viewport.
//!
//! A perspective camera with a slowly orbiting eye looking at a fixed
//! target, plus the uniform handed to the renderer boundary each frame.

/// Core camera struct and renderer uniform types.
pub mod core;
/// Time-driven orbital camera.
pub mod orbit;

pub use core::{Camera, CameraUniform};
pub use orbit::OrbitCamera;
