//! Input bar keybindings.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    CursorLeft,
    CursorRight,
    CursorWordLeft,
    CursorWordRight,
    CursorLineStart,
    CursorLineEnd,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteWordBackward,
    DeleteToLineStart,
    DeleteToLineEnd,
    Submit,
    NextField,
    PreviousField,
    SelectUp,
    SelectDown,
    SelectConfirm,
    SelectCancel,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

/// Per-action overrides applied on top of [`DEFAULT_KEYBINDINGS`].
#[derive(Debug, Clone, Default)]
pub struct KeybindingsConfig {
    entries: HashMap<EditorAction, KeyBinding>,
}

impl KeybindingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: EditorAction, keys: K) {
        self.entries.insert(action, keys.into());
    }
}

/// Default key ids per action.
///
/// While the popup is open, everything bound to `SelectUp`/`SelectDown` navigates the popup
/// instead of editing text, which is why `tab` and `backspace` appear there.
pub static DEFAULT_KEYBINDINGS: LazyLock<HashMap<EditorAction, Vec<KeyId>>> = LazyLock::new(|| {
    use EditorAction::*;

    let entries: [(EditorAction, &[&str]); 18] = [
        (CursorLeft, &["left", "ctrl+b"]),
        (CursorRight, &["right", "ctrl+f"]),
        (CursorWordLeft, &["alt+left", "ctrl+left"]),
        (CursorWordRight, &["alt+right", "ctrl+right"]),
        (CursorLineStart, &["home", "ctrl+a"]),
        (CursorLineEnd, &["end", "ctrl+e"]),
        (DeleteCharBackward, &["backspace"]),
        (DeleteCharForward, &["delete", "ctrl+d"]),
        (DeleteWordBackward, &["ctrl+w", "alt+backspace"]),
        (DeleteToLineStart, &["ctrl+u"]),
        (DeleteToLineEnd, &["ctrl+k"]),
        (Submit, &["enter"]),
        (NextField, &["tab"]),
        (PreviousField, &["shift+tab"]),
        (SelectUp, &["up", "backspace"]),
        (SelectDown, &["down", "tab"]),
        (SelectConfirm, &["enter"]),
        (SelectCancel, &["escape"]),
    ];

    entries
        .into_iter()
        .map(|(action, keys)| (action, keys.iter().map(|key| key.to_string()).collect()))
        .collect()
});

pub struct KeybindingsManager {
    action_to_keys: HashMap<EditorAction, Vec<KeyId>>,
}

impl KeybindingsManager {
    pub fn new(config: KeybindingsConfig) -> Self {
        let mut manager = Self {
            action_to_keys: HashMap::new(),
        };
        manager.build_maps(&config);
        manager
    }

    fn build_maps(&mut self, config: &KeybindingsConfig) {
        self.action_to_keys = DEFAULT_KEYBINDINGS.clone();
        for (action, binding) in &config.entries {
            let keys = match binding {
                KeyBinding::Single(key) => vec![key.clone()],
                KeyBinding::Multiple(keys) => keys.clone(),
            };
            self.action_to_keys.insert(*action, keys);
        }
    }

    /// Whether the normalized `key_id` triggers `action`.
    pub fn matches(&self, key_id: &str, action: EditorAction) -> bool {
        self.action_to_keys
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|key| key == key_id))
    }

    pub fn get_keys(&self, action: EditorAction) -> Vec<KeyId> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }

    pub fn set_config(&mut self, config: KeybindingsConfig) {
        self.build_maps(&config);
    }
}

impl Default for KeybindingsManager {
    fn default() -> Self {
        Self::new(KeybindingsConfig::default())
    }
}

/// Shared keybindings, cloned into every widget that reads them.
pub type KeybindingsHandle = Arc<Mutex<KeybindingsManager>>;

pub fn default_keybindings_handle() -> KeybindingsHandle {
    Arc::new(Mutex::new(KeybindingsManager::default()))
}

#[cfg(test)]
mod tests {
    use super::{EditorAction, KeyBinding, KeybindingsConfig, KeybindingsManager};

    #[test]
    fn defaults_match_expected_keys() {
        let manager = KeybindingsManager::default();
        assert!(manager.matches("up", EditorAction::SelectUp));
        assert!(manager.matches("backspace", EditorAction::SelectUp));
        assert!(manager.matches("tab", EditorAction::SelectDown));
        assert!(manager.matches("enter", EditorAction::Submit));
        assert!(!manager.matches("enter", EditorAction::SelectCancel));
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut config = KeybindingsConfig::new();
        config.set(EditorAction::Submit, KeyBinding::Single("ctrl+x".to_string()));
        config.set(EditorAction::SelectDown, vec!["down", "ctrl+n"]);
        let manager = KeybindingsManager::new(config);
        assert!(manager.matches("ctrl+x", EditorAction::Submit));
        assert!(!manager.matches("enter", EditorAction::Submit));
        assert!(manager.matches("ctrl+n", EditorAction::SelectDown));
        assert!(!manager.matches("tab", EditorAction::SelectDown));
    }

    #[test]
    fn get_keys_lists_bindings() {
        let manager = KeybindingsManager::default();
        assert_eq!(manager.get_keys(EditorAction::SelectCancel), vec!["escape".to_string()]);
    }
}
