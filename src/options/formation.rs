use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Formation", inline)]
#[serde(default)]
/// Tree-formation cone geometry parameters.
pub struct FormationOptions {
    /// Number of horizontal layers in the tree cone.
    #[schemars(title = "Layer Count", range(min = 2, max = 32))]
    pub layer_count: usize,
    /// Vertical distance between consecutive layers.
    #[schemars(title = "Layer Spacing", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub layer_spacing: f32,
    /// Radius lost per layer going up (the cone narrows toward the top).
    #[schemars(title = "Radius Step", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub radius_step: f32,
    /// Bounded random scale applied to radius and height so the cone is not
    /// a rigid lattice. A jitter of 0.15 scales by factors in [0.85, 1.15].
    #[schemars(title = "Jitter", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub jitter: f32,
}

impl FormationOptions {
    /// Largest radius `tree_target` can produce, jitter included.
    #[must_use]
    pub fn max_tree_radius(&self) -> f32 {
        self.layer_count as f32 * self.radius_step * (1.0 + self.jitter)
    }

    /// Largest height `tree_target` can produce, jitter included.
    #[must_use]
    pub fn max_tree_height(&self) -> f32 {
        self.layer_count as f32 * self.layer_spacing * (1.0 + self.jitter)
    }
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            layer_count: 8,
            layer_spacing: 1.2,
            radius_step: 0.45,
            jitter: 0.15,
        }
    }
}
