//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`], then
//! triggers [`InputEvent`]s for the press/release edges. Confirm and cancel
//! consumers react to the events (once per press); movement consumers read
//! the held state from the resource.

use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

fn refresh(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    refresh(&mut input.left, &rl);
    refresh(&mut input.right, &rl);
    refresh(&mut input.jump, &rl);
    refresh(&mut input.confirm, &rl);
    refresh(&mut input.cancel, &rl);
    refresh(&mut input.debug_overlay, &rl);

    for (state, action) in [
        (&input.left, InputAction::Left),
        (&input.right, InputAction::Right),
        (&input.jump, InputAction::Jump),
        (&input.confirm, InputAction::Confirm),
        (&input.cancel, InputAction::Cancel),
    ] {
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    if input.debug_overlay.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
