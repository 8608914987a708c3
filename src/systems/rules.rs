//! Per-tick playing rules: the countdown clock and the fall watcher.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::consts::RENDER_HEIGHT;
use crate::events::audio::{AudioCmd, Sfx};
use crate::resources::camera::ScrollCamera;
use crate::resources::gamestate::{FlowEvent, GameState, NextGameState, transition};
use crate::resources::scoreboard::Scoreboard;
use crate::resources::systemsstore::SystemsStore;
use crate::systems::gamestate::apply_flow_effects;

/// Advance the countdown clock; on expiry the run is over.
pub fn countdown(
    mut scoreboard: ResMut<Scoreboard>,
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if scoreboard.advance_clock() {
        if let Some((next, effects)) = transition(game_state.get(), FlowEvent::TimeExpired) {
            next_state.set(next);
            apply_flow_effects(&effects, &mut audio_cmds);
        }
    }
}

/// What a fall below the visible area costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// A life was lost but some remain; respawn at the fixed spawn point.
    Respawn,
    /// The last life was lost; the run is over, no respawn.
    OutOfLives,
}

/// Take one life and decide between respawning and ending the run.
pub fn resolve_fall(lives: &mut u32) -> FallOutcome {
    *lives = lives.saturating_sub(1);
    if *lives == 0 {
        FallOutcome::OutOfLives
    } else {
        FallOutcome::Respawn
    }
}

/// Watch for players falling below the visible area.
///
/// A fall with lives remaining replaces the player with a fresh one at the
/// spawn point and rewinds the camera; the last fall ends the run instead.
pub fn fall_watch(
    mut commands: Commands,
    mut scoreboard: ResMut<Scoreboard>,
    mut camera: ResMut<ScrollCamera>,
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    systems_store: Res<SystemsStore>,
    players: Query<(Entity, &MapPosition), With<Player>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (entity, position) in players.iter() {
        if position.pos.y > RENDER_HEIGHT as f32 {
            match resolve_fall(&mut scoreboard.lives) {
                FallOutcome::Respawn => {
                    info!("Player fell, {} lives left", scoreboard.lives);
                    audio_cmds.write(AudioCmd::PlayFx { id: Sfx::Damage });
                    commands.entity(entity).despawn();
                    camera.reset();
                    let spawn = systems_store
                        .get("spawn_player")
                        .expect("spawn_player system not found in SystemsStore");
                    commands.run_system(*spawn);
                }
                FallOutcome::OutOfLives => {
                    info!("Player fell with no lives left");
                    if let Some((next, effects)) =
                        transition(game_state.get(), FlowEvent::LivesExhausted)
                    {
                        next_state.set(next);
                        apply_flow_effects(&effects, &mut audio_cmds);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPAWN_X, SPAWN_Y};
    use crate::resources::gamestate::{GameStates, NextGameStates};

    #[test]
    fn test_fall_with_lives_remaining_respawns() {
        let mut lives = 3;
        assert_eq!(resolve_fall(&mut lives), FallOutcome::Respawn);
        assert_eq!(lives, 2);
    }

    #[test]
    fn test_fall_on_last_life_ends_the_run() {
        let mut lives = 1;
        assert_eq!(resolve_fall(&mut lives), FallOutcome::OutOfLives);
        assert_eq!(lives, 0);
    }

    fn playing_world() -> World {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(GameStates::Playing);
        world.insert_resource(game_state);
        world.insert_resource(NextGameState::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        world.insert_resource(ScrollCamera::new());
        world
    }

    #[test]
    fn test_last_life_fall_requests_gameover_without_respawn() {
        let mut world = playing_world();
        world.insert_resource(SystemsStore::new());
        let mut scoreboard = Scoreboard::new();
        scoreboard.lives = 1;
        world.insert_resource(scoreboard);
        world.spawn((Player::new(), MapPosition::new(32.0, 200.0)));

        let watch = world.register_system(fall_watch);
        world.run_system(watch).unwrap();

        assert_eq!(world.resource::<Scoreboard>().lives, 0);
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Pending(GameStates::GameOver)
        );
        // no despawn/respawn cycle on the last life
        assert_eq!(world.query::<&Player>().iter(&world).count(), 1);
    }

    #[test]
    fn test_fall_with_lives_left_respawns_at_spawn_point() {
        let mut world = playing_world();
        let spawn_id = world.register_system(crate::game::spawn_player);
        let mut store = SystemsStore::new();
        store.insert("spawn_player", spawn_id);
        world.insert_resource(store);
        world.insert_resource(Scoreboard::new());
        world.resource_mut::<ScrollCamera>().scroll_x = 300.0;
        world.spawn((Player::new(), MapPosition::new(500.0, 200.0)));

        let watch = world.register_system(fall_watch);
        world.run_system(watch).unwrap();

        assert_eq!(world.resource::<Scoreboard>().lives, 2);
        assert_eq!(world.resource::<ScrollCamera>().scroll_x, 0.0);
        let mut q = world.query::<(&Player, &MapPosition)>();
        let (player, position) = q.single(&world).unwrap();
        assert!(player.alive);
        assert_eq!(position.pos.x, SPAWN_X);
        assert_eq!(position.pos.y, SPAWN_Y);
        // the run keeps going
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Unchanged
        );
    }

    #[test]
    fn test_countdown_expiry_requests_gameover() {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(GameStates::Playing);
        world.insert_resource(game_state);
        world.insert_resource(NextGameState::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        let mut scoreboard = Scoreboard::new();
        // one tick away from expiry
        scoreboard.time = 1;
        scoreboard.ticks = 59;
        world.insert_resource(scoreboard);

        let tick = world.register_system(countdown);
        world.run_system(tick).unwrap();

        assert_eq!(world.resource::<Scoreboard>().time, 0);
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            crate::resources::gamestate::NextGameStates::Pending(GameStates::GameOver)
        );
    }
}
