//! Centralized simulation options with TOML preset support.
//!
//! All tweakable settings (swarm population, formation geometry, transition
//! timing, ambient motion, palettes, camera orbit, keybindings) are
//! consolidated here. Options serialize to/from TOML so tests and demos can
//! override any constant.

mod camera;
mod formation;
mod keybindings;
mod motion;
mod palette;
mod swarm;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use formation::FormationOptions;
pub use keybindings::KeybindingOptions;
pub use motion::MotionOptions;
pub use palette::{PaletteEntry, PaletteOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use swarm::SwarmOptions;
pub use transition::TransitionOptions;

use crate::error::GlimmerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Particle population and size parameters.
    pub swarm: SwarmOptions,
    /// Tree-formation cone geometry.
    pub formation: FormationOptions,
    /// Per-particle transition timing bounds.
    pub transition: TransitionOptions,
    /// Ambient drift/pulsation parameters.
    pub motion: MotionOptions,
    /// Weighted color palettes.
    #[schemars(skip)]
    pub palette: PaletteOptions,
    /// Camera projection and orbit parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlimmerError> {
        let content = std::fs::read_to_string(path).map_err(GlimmerError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| GlimmerError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlimmerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlimmerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlimmerError::Io)?;
        }
        std::fs::write(path, content).map_err(GlimmerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[transition]
duration_max = 4.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.transition.duration_max, 4.0);
        // Everything else should be default
        assert_eq!(opts.transition.duration_min, 0.5);
        assert_eq!(opts.swarm.particle_count, 2000);
        assert_eq!(opts.formation.layer_count, 8);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::GestureAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Digit2"),
            Some(GestureAction::Fist)
        );
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(GestureAction::ToggleFormation)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn palette_defaults_are_weighted() {
        let palette = PaletteOptions::default();
        assert_eq!(palette.floating.len(), 3);
        assert!(palette.tree.iter().all(|e| e.weight >= 0.0));
        // Tree palette is pink-dominant
        let pink = &palette.tree[0];
        assert!(pink.weight > 0.5);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("swarm"));
        assert!(props.contains_key("formation"));
        assert!(props.contains_key("transition"));
        assert!(props.contains_key("motion"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("palette"));
        assert!(!props.contains_key("keybindings"));
    }
}
