//! Key to action bindings

use super::decoder::KeyId;
use crate::config::keys;

/// Action a confirmed key press triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Select the next sensor
    Up,
    /// Select the previous sensor
    Down,
}

/// Which keys trigger which action
///
/// Keys without a binding still decode, they just do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyBindings {
    /// Key bound to [`KeyAction::Up`]
    pub up: Option<KeyId>,
    /// Key bound to [`KeyAction::Down`]
    pub down: Option<KeyId>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Some(keys::UP),
            down: Some(keys::DOWN),
        }
    }
}

impl KeyBindings {
    /// Look up the action bound to `key`
    pub fn action_for(&self, key: KeyId) -> Option<KeyAction> {
        if self.up == Some(key) {
            Some(KeyAction::Up)
        } else if self.down == Some(key) {
            Some(KeyAction::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(keys::UP), Some(KeyAction::Up));
        assert_eq!(bindings.action_for(keys::DOWN), Some(KeyAction::Down));
        assert_eq!(bindings.action_for(keys::SELECT), None);
        assert_eq!(bindings.action_for(keys::LEFT), None);
        assert_eq!(bindings.action_for(keys::RIGHT), None);
    }
}
