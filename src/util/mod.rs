//! Shared utilities for the swarm engine.
//!
//! Helpers for easing curves and frame pacing.

pub mod easing;
pub mod frame_timing;
