//! Input action events.
//!
//! [`InputEvent`] is triggered when gameplay-relevant input actions are
//! pressed or released. [`flow_input_observer`] feeds confirm/cancel presses
//! through the state machine's transition table, so a press fires exactly
//! once however long the key is held.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::gamestate::{FlowEvent, GameState, NextGameState, transition};
use crate::systems::gamestate::apply_flow_effects;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move left (default: Left arrow).
    Left,
    /// Move right (default: Right arrow).
    Right,
    /// Jump (default: Space).
    Jump,
    /// Confirm/start action (default: Enter).
    Confirm,
    /// Back/cancel action (default: Escape).
    Cancel,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Observer translating confirm/cancel presses into state machine events.
///
/// Movement actions are not handled here; the physics system reads the held
/// input state directly.
pub fn flow_input_observer(
    trigger: On<InputEvent>,
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let flow_event = match event.action {
        InputAction::Confirm => FlowEvent::Confirm,
        InputAction::Cancel => FlowEvent::Cancel,
        _ => return,
    };
    if let Some((next, effects)) = transition(game_state.get(), flow_event) {
        next_state.set(next);
        apply_flow_effects(&effects, &mut audio_cmds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::gamestate::{GameStates, NextGameStates};
    use bevy_ecs::observer::Observer;

    fn world_in_state(state: GameStates) -> World {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(state);
        world.insert_resource(game_state);
        world.insert_resource(NextGameState::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        world.spawn(Observer::new(flow_input_observer));
        world.flush();
        world
    }

    #[test]
    fn test_confirm_press_in_menu_requests_play() {
        let mut world = world_in_state(GameStates::Menu);
        world.trigger(InputEvent {
            action: InputAction::Confirm,
            pressed: true,
        });
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Pending(GameStates::Playing)
        );
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut world = world_in_state(GameStates::Menu);
        world.trigger(InputEvent {
            action: InputAction::Confirm,
            pressed: false,
        });
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Unchanged
        );
    }

    #[test]
    fn test_movement_actions_are_ignored() {
        let mut world = world_in_state(GameStates::Playing);
        for action in [InputAction::Left, InputAction::Right, InputAction::Jump] {
            world.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Unchanged
        );
    }

    #[test]
    fn test_cancel_press_while_playing_returns_to_menu() {
        let mut world = world_in_state(GameStates::Playing);
        world.trigger(InputEvent {
            action: InputAction::Cancel,
            pressed: true,
        });
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Pending(GameStates::Menu)
        );
    }
}
