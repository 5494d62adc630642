//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a detected gesture, a
//! key press, or a programmatic call, is represented as a `SwarmCommand`.
//! Consumers construct commands and pass them to
//! [`SwarmEngine::execute`](super::SwarmEngine::execute). The engine never
//! cares *how* a command was triggered.

use crate::input::{Gesture, GestureAction};
use crate::swarm::Formation;

/// A discrete operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarmCommand {
    /// Transition the swarm to the given formation. A no-op when the swarm
    /// is already in (or transitioning to) that formation.
    SetFormation(Formation),
    /// Flip to the other formation, whatever the current mode.
    ToggleFormation,
    /// Toggle particle size between the two configured bounds. Never
    /// changes formation, position, or color targets.
    AdjustSize,
}

impl SwarmCommand {
    /// The gesture dispatch table: open → floating, fist → tree,
    /// pinch → size adjust.
    #[must_use]
    pub fn from_gesture(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Open => Self::SetFormation(Formation::Floating),
            Gesture::Fist => Self::SetFormation(Formation::Tree),
            Gesture::Pinch => Self::AdjustSize,
        }
    }

    /// Convert a key-bound action into a command.
    #[must_use]
    pub fn from_action(action: GestureAction) -> Self {
        match action.gesture() {
            Some(gesture) => Self::from_gesture(gesture),
            None => Self::ToggleFormation,
        }
    }
}
