use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Per-particle transition timing parameters.
///
/// Each particle draws its own duration and start offset from these bounds,
/// so the swarm never moves in lockstep.
pub struct TransitionOptions {
    /// Shortest per-particle transition duration in seconds.
    #[schemars(title = "Min Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub duration_min: f32,
    /// Longest per-particle transition duration in seconds.
    #[schemars(title = "Max Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub duration_max: f32,
    /// Largest per-particle start offset in seconds.
    #[schemars(title = "Max Stagger", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub stagger_max: f32,
    /// Color window length as a fraction of the position duration.
    /// Below 1.0 the color settles before the position does.
    #[schemars(title = "Color Window", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub color_duration_scale: f32,
}

impl TransitionOptions {
    /// Duration bounds sorted low-to-high, so sampling never panics on a
    /// misconfigured pair.
    #[must_use]
    pub fn duration_range(&self) -> (f32, f32) {
        if self.duration_min <= self.duration_max {
            (self.duration_min, self.duration_max)
        } else {
            (self.duration_max, self.duration_min)
        }
    }

    /// Upper bound on how long a whole transition can run: worst-case
    /// stagger plus the longest per-particle duration.
    #[must_use]
    pub fn max_total_seconds(&self) -> f32 {
        let (_, hi) = self.duration_range();
        self.stagger_max + hi
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_min: 0.5,
            duration_max: 2.5,
            stagger_max: 0.35,
            color_duration_scale: 0.6,
        }
    }
}
