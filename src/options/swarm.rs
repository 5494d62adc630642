use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Swarm", inline)]
#[serde(default)]
/// Particle population and size parameters.
pub struct SwarmOptions {
    /// Number of particles in the swarm.
    #[schemars(title = "Particle Count", range(min = 1, max = 20000))]
    pub particle_count: usize,
    /// Half-extents of the floating-cloud bounding box (x, y, z).
    #[schemars(skip)]
    pub bounds: [f32; 3],
    /// Default particle point size.
    #[schemars(title = "Base Size", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub base_size: f32,
    /// Enlarged particle point size (pinch gesture toggles to this).
    #[schemars(title = "Enlarged Size", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub enlarged_size: f32,
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            bounds: [15.0, 10.0, 15.0],
            base_size: 0.1,
            enlarged_size: 0.15,
        }
    }
}
