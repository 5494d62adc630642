//! Input handling: gesture labels, the keyboard substitute, and the
//! timer-based gesture simulator that stands in for a real detector.

/// Platform-agnostic gesture events.
pub mod gesture;
/// Interval-based random gesture source.
pub mod simulator;

pub use gesture::{Gesture, GestureAction};
pub use simulator::GestureSimulator;
