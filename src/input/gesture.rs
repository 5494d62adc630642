//! Platform-agnostic gesture events.
//!
//! Gestures arrive as text labels from whatever detector is upstream: a
//! camera pipeline, a timer-based simulator, or a keyboard substitute. The
//! engine only ever sees the parsed [`Gesture`] value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recognized hand gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Open palm: request the floating-cloud formation.
    Open,
    /// Closed fist: request the tree formation.
    Fist,
    /// Pinch: adjust particle size without touching the formation.
    Pinch,
}

impl Gesture {
    /// Every recognized gesture, in label order.
    pub const ALL: [Gesture; 3] = [Gesture::Open, Gesture::Fist, Gesture::Pinch];

    /// Parse an upstream label. Unrecognized labels map to `None` so new
    /// detector vocabulary is a forward-compatible no-op.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "open" => Some(Self::Open),
            "fist" => Some(Self::Fist),
            "pinch" => Some(Self::Pinch),
            _ => None,
        }
    }

    /// The wire label for this gesture.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fist => "fist",
            Self::Pinch => "pinch",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// fist = "Digit2"
/// toggle_formation = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureAction {
    /// Emit an `open` gesture.
    Open,
    /// Emit a `fist` gesture.
    Fist,
    /// Emit a `pinch` gesture.
    Pinch,
    /// Flip the formation directly, whatever the current mode.
    ToggleFormation,
}

impl GestureAction {
    /// The gesture this action stands in for, if any.
    #[must_use]
    pub fn gesture(self) -> Option<Gesture> {
        match self {
            Self::Open => Some(Gesture::Open),
            Self::Fist => Some(Gesture::Fist),
            Self::Pinch => Some(Gesture::Pinch),
            Self::ToggleFormation => None,
        }
    }
}
