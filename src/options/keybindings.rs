use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::GestureAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping gesture actions to key codes.
///
/// This is the keyboard-driven substitute for a real gesture source: three
/// keys stand in for the gesture labels and one toggles the formation
/// directly.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Fist` → `"Digit2"`).
    pub bindings: HashMap<GestureAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, GestureAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (GestureAction::Open, "Digit1".into()),
            (GestureAction::Fist, "Digit2".into()),
            (GestureAction::Pinch, "Digit3".into()),
            (GestureAction::ToggleFormation, "Space".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

// The reverse map is a cache; equality is defined by the bindings alone.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<GestureAction> {
        self.key_to_action.get(key).copied()
    }
}
