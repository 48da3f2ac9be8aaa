//! Global keyboard bindings
//!
//! Keys are identified by DOM `KeyboardEvent.code` values. There is no
//! remapping and modifiers are ignored.

use serde::{Deserialize, Serialize};

/// Keys the player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    KeyM,
    Other,
}

impl Key {
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "KeyM" => Key::KeyM,
            _ => Key::Other,
        }
    }

    pub fn action(self) -> Option<KeyAction> {
        match self {
            Key::Space => Some(KeyAction::TogglePlay),
            Key::ArrowRight => Some(KeyAction::Next),
            Key::ArrowLeft => Some(KeyAction::Previous),
            Key::ArrowUp => Some(KeyAction::VolumeUp),
            Key::ArrowDown => Some(KeyAction::VolumeDown),
            Key::KeyM => Some(KeyAction::ToggleMute),
            Key::Other => None,
        }
    }

    /// Space and the vertical arrows would otherwise scroll the page
    pub fn prevents_default(self) -> bool {
        matches!(self, Key::Space | Key::ArrowUp | Key::ArrowDown)
    }
}

/// Player operation bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    TogglePlay,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    ToggleMute,
}

/// Outcome of a key press, returned to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResponse {
    pub action: Option<KeyAction>,
    pub prevent_default: bool,
}

impl KeyResponse {
    pub fn for_key(key: Key) -> Self {
        Self {
            action: key.action(),
            prevent_default: key.prevents_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_codes() {
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_code("KeyM"), Key::KeyM);
        assert_eq!(Key::from_code("KeyN"), Key::Other);
        assert_eq!(Key::from_code("m"), Key::Other);
    }

    #[test]
    fn bindings() {
        assert_eq!(Key::Space.action(), Some(KeyAction::TogglePlay));
        assert_eq!(Key::ArrowRight.action(), Some(KeyAction::Next));
        assert_eq!(Key::ArrowLeft.action(), Some(KeyAction::Previous));
        assert_eq!(Key::ArrowUp.action(), Some(KeyAction::VolumeUp));
        assert_eq!(Key::ArrowDown.action(), Some(KeyAction::VolumeDown));
        assert_eq!(Key::KeyM.action(), Some(KeyAction::ToggleMute));
        assert_eq!(Key::Other.action(), None);
    }

    #[test]
    fn only_scrolling_keys_prevent_default() {
        assert!(Key::Space.prevents_default());
        assert!(Key::ArrowUp.prevents_default());
        assert!(Key::ArrowDown.prevents_default());
        assert!(!Key::ArrowLeft.prevents_default());
        assert!(!Key::ArrowRight.prevents_default());
        assert!(!Key::KeyM.prevents_default());
        assert!(!Key::Other.prevents_default());
    }
}
