//! High-level game state resources and the transition table.
//!
//! [`GameState`] tracks the authoritative current state, [`NextGameState`]
//! holds a pending transition requested by systems. See
//! [`crate::events::gamestate::observe_gamestate_change_event`] for how a
//! pending transition is applied and enter/exit hooks are invoked.
//!
//! [`transition`] is the pure state machine: systems feed it a [`FlowEvent`]
//! and apply the returned state and side effects, which keeps the whole
//! table unit-testable without driving the frame loop.

use bevy_ecs::prelude::Resource;

use crate::events::audio::Sfx;

/// Discrete high-level states the game can be in.
///
/// `None`, `Setup`, and `Quitting` are bootstrap/teardown states; the four
/// others are the player-visible screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Menu,
    Playing,
    GameOver,
    Victory,
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Update the current state immediately. Prefer requesting transitions
    /// via [`NextGameState`] so enter/exit hooks run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl Default for NextGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition; `check_pending_state` will emit the change event
    /// and an observer applies it.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

/// Events the state machine reacts to: player intent (confirm/cancel) and
/// world events raised by the playing systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Confirm,
    Cancel,
    TimeExpired,
    LivesExhausted,
    GoalReached,
}

/// Side effects a transition carries with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    PlayFx(Sfx),
}

/// The transition table: `(state, event) -> (next state, side effects)`.
///
/// Returns `None` when the event does nothing in the given state (e.g.
/// confirm on the victory screen). Scene setup/teardown is not encoded here;
/// it belongs to the enter/exit hooks run on state change.
pub fn transition(state: &GameStates, event: FlowEvent) -> Option<(GameStates, Vec<FlowEffect>)> {
    use FlowEvent::*;
    use GameStates::{GameOver, Menu, Playing, Quitting, Victory};

    match (state, event) {
        (Menu, Confirm) | (GameOver, Confirm) => Some((Playing, Vec::new())),
        (Playing, Cancel) => Some((Menu, Vec::new())),
        (Menu, Cancel) | (GameOver, Cancel) | (Victory, Cancel) => Some((Quitting, Vec::new())),
        (Playing, TimeExpired) | (Playing, LivesExhausted) => {
            Some((GameOver, vec![FlowEffect::PlayFx(Sfx::GameOver)]))
        }
        (Playing, GoalReached) => Some((Victory, vec![FlowEffect::PlayFx(Sfx::Victory)])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::FlowEvent::*;
    use super::*;

    #[test]
    fn test_confirm_starts_play_from_menu_and_gameover() {
        assert_eq!(
            transition(&GameStates::Menu, Confirm),
            Some((GameStates::Playing, Vec::new()))
        );
        assert_eq!(
            transition(&GameStates::GameOver, Confirm),
            Some((GameStates::Playing, Vec::new()))
        );
    }

    #[test]
    fn test_cancel_in_play_returns_to_menu() {
        assert_eq!(
            transition(&GameStates::Playing, Cancel),
            Some((GameStates::Menu, Vec::new()))
        );
    }

    #[test]
    fn test_cancel_on_end_screens_quits() {
        for state in [GameStates::Menu, GameStates::GameOver, GameStates::Victory] {
            assert_eq!(
                transition(&state, Cancel),
                Some((GameStates::Quitting, Vec::new()))
            );
        }
    }

    #[test]
    fn test_time_expiry_and_lost_lives_end_the_run() {
        for event in [TimeExpired, LivesExhausted] {
            let (next, effects) = transition(&GameStates::Playing, event).unwrap();
            assert_eq!(next, GameStates::GameOver);
            assert_eq!(effects, vec![FlowEffect::PlayFx(Sfx::GameOver)]);
        }
    }

    #[test]
    fn test_goal_wins_the_level() {
        let (next, effects) = transition(&GameStates::Playing, GoalReached).unwrap();
        assert_eq!(next, GameStates::Victory);
        assert_eq!(effects, vec![FlowEffect::PlayFx(Sfx::Victory)]);
    }

    #[test]
    fn test_confirm_is_ignored_on_victory_screen() {
        assert_eq!(transition(&GameStates::Victory, Confirm), None);
    }

    #[test]
    fn test_world_events_only_matter_while_playing() {
        for state in [GameStates::Menu, GameStates::GameOver, GameStates::Victory] {
            assert_eq!(transition(&state, TimeExpired), None);
            assert_eq!(transition(&state, GoalReached), None);
            assert_eq!(transition(&state, LivesExhausted), None);
        }
    }

    #[test]
    fn test_pending_state_roundtrip() {
        let mut next = NextGameState::new();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
        next.set(GameStates::Playing);
        assert_eq!(
            *next.get(),
            NextGameStates::Pending(GameStates::Playing)
        );
        next.reset();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
    }
}
