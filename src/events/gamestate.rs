//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate enter/exit hook systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.

use crate::resources::gamestate::NextGameStates::Pending;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Event indicating that a pending game state transition should be applied.
///
/// Emitting this causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]; if it holds a pending state the observer updates the
/// authoritative [`GameState`], runs exit hooks for the old state and enter
/// hooks for the new one, then clears the pending value.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    let Pending(new_state) = next_game_state.get().clone() else {
        debug!("No state change pending.");
        return;
    };

    let old_state = game_state.get().clone();
    info!("Transitioning from {:?} to {:?}", old_state, new_state);
    game_state.set(new_state.clone());
    next_game_state.reset();

    on_state_exit(&old_state, &mut commands, &systems_store);
    on_state_enter(&new_state, &mut commands, &systems_store);
}

/// Run the named hook system, panicking if it was never registered. The hook
/// table is filled once at startup, so a missing entry is a programming
/// error, not a runtime condition.
fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    let id = systems_store
        .get(name)
        .unwrap_or_else(|| panic!("hook system '{name}' not found in SystemsStore"));
    commands.run_system(*id);
}

/// Run state-specific "enter" systems for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::None => {}
        GameStates::Setup => run_hook("setup", commands, systems_store),
        GameStates::Menu => run_hook("enter_menu", commands, systems_store),
        GameStates::Playing => run_hook("enter_play", commands, systems_store),
        GameStates::GameOver => run_hook("enter_gameover", commands, systems_store),
        GameStates::Victory => run_hook("enter_victory", commands, systems_store),
        GameStates::Quitting => run_hook("quit_game", commands, systems_store),
    }
}

/// Run state-specific "exit" systems for the given state. Every
/// player-visible screen tears its scene entities down on exit.
fn on_state_exit(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::Menu
        | GameStates::Playing
        | GameStates::GameOver
        | GameStates::Victory => run_hook("clean_scene", commands, systems_store),
        GameStates::None | GameStates::Setup | GameStates::Quitting => {
            debug!("Exited {:?} state", state)
        }
    }
}
