//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Held state drives movement;
//! the `just_pressed` edges drive the confirm/cancel actions, which must fire
//! once per press rather than every tick held.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay:
/// movement (left/right/jump), menu actions (confirm/cancel), and the debug
/// overlay toggle.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub confirm: BoolState,
    pub cancel: BoolState,
    pub debug_overlay: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            cancel: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            debug_overlay: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        for state in [
            input.left,
            input.right,
            input.jump,
            input.confirm,
            input.cancel,
            input.debug_overlay,
        ] {
            assert!(!state.active);
            assert!(!state.just_pressed);
            assert!(!state.just_released);
        }
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.confirm.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.cancel.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.debug_overlay.key_binding, KeyboardKey::KEY_F11);
    }
}
