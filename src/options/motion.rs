use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Ambient motion parameters for settled particles.
pub struct MotionOptions {
    /// Per-frame drift amplitude in floating mode.
    #[schemars(title = "Drift Amplitude", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub drift_amplitude: f32,
    /// Coordinate magnitude beyond which containment kicks in.
    #[schemars(title = "Soft Bound", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub soft_bound: f32,
    /// Multiplicative contraction applied to out-of-bound coordinates.
    /// Must stay below 1.0 or drift is unbounded.
    #[schemars(title = "Containment Damping", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub containment_damping: f32,
    /// Vertical pulsation amplitude in tree mode. Much smaller than the
    /// floating drift so the silhouette stays legible.
    #[schemars(title = "Pulse Amplitude", range(min = 0.0, max = 0.05), extend("step" = 0.0005))]
    pub pulse_amplitude: f32,
    /// Pulsation frequency multiplier in tree mode.
    #[schemars(title = "Pulse Rate", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub pulse_rate: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            drift_amplitude: 0.005,
            soft_bound: 18.0,
            containment_damping: 0.96,
            pulse_amplitude: 0.0015,
            pulse_rate: 2.0,
        }
    }
}
