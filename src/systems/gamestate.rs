//! Game state plumbing: pending-transition check, run conditions, and the
//! helper that applies transition side effects.

use crate::events::audio::AudioCmd;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{FlowEffect, GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

/// Emit the change event when a transition is pending; the observer applies
/// it and runs the enter/exit hooks.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Run condition for systems that only make sense mid-game.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// Apply the side effects returned by
/// [`transition`](crate::resources::gamestate::transition).
pub fn apply_flow_effects(effects: &[FlowEffect], audio_cmds: &mut MessageWriter<AudioCmd>) {
    for effect in effects {
        match effect {
            FlowEffect::PlayFx(id) => {
                audio_cmds.write(AudioCmd::PlayFx { id: *id });
            }
        }
    }
}
