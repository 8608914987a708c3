//! Coin spin/collection and the goal trigger.
//!
//! Collection removes the coin entity through `Commands`, so the query is
//! never mutated while being iterated; the despawn applies at the end of the
//! system and the coin is gone from every later tick's overlap tests.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::goal::Goal;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::consts::COIN_SPIN_RATE;
use crate::events::audio::{AudioCmd, Sfx};
use crate::resources::gamestate::{FlowEvent, GameState, NextGameState, transition};
use crate::resources::scoreboard::Scoreboard;
use crate::systems::gamestate::apply_flow_effects;

/// Advance every coin's spin phase (cyclic, purely visual).
pub fn coin_spin(mut coins: Query<&mut Coin>) {
    for mut coin in coins.iter_mut() {
        coin.phase = (coin.phase + COIN_SPIN_RATE) % 4.0;
    }
}

/// Collect coins the player overlaps: despawn, credit the scoreboard, chime.
pub fn coin_pickup(
    mut commands: Commands,
    mut scoreboard: ResMut<Scoreboard>,
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    coins: Query<(Entity, &MapPosition, &BoxCollider), With<Coin>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (player_pos, player_box) in players.iter() {
        for (coin_entity, coin_pos, coin_box) in coins.iter() {
            if player_box.overlaps(player_pos.pos, coin_box, coin_pos.pos) {
                commands.entity(coin_entity).despawn();
                scoreboard.award_coin();
                audio_cmds.write(AudioCmd::PlayFx { id: Sfx::Coin });
            }
        }
    }
}

/// End the level the first time the player overlaps the goal region.
pub fn goal_trigger(
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    goals: Query<(&MapPosition, &BoxCollider), With<Goal>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (player_pos, player_box) in players.iter() {
        for (goal_pos, goal_box) in goals.iter() {
            if player_box.overlaps(player_pos.pos, goal_box, goal_pos.pos) {
                if let Some((next, effects)) =
                    transition(game_state.get(), FlowEvent::GoalReached)
                {
                    next_state.set(next);
                    apply_flow_effects(&effects, &mut audio_cmds);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COIN_REWARD;
    use crate::resources::gamestate::{GameStates, NextGameStates};

    #[test]
    fn test_coin_collected_exactly_once() {
        let mut world = World::new();
        world.insert_resource(Scoreboard::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        world.spawn((
            Player::new(),
            MapPosition::new(100.0, 100.0),
            BoxCollider::new(8.0, 16.0),
        ));
        world.spawn((
            Coin::new(),
            MapPosition::new(100.0, 104.0),
            BoxCollider::new(8.0, 8.0),
        ));

        let pickup = world.register_system(coin_pickup);
        world.run_system(pickup).unwrap();

        let scoreboard = *world.resource::<Scoreboard>();
        assert_eq!(scoreboard.coins, 1);
        assert_eq!(scoreboard.score, COIN_REWARD);
        assert_eq!(world.query::<&Coin>().iter(&world).count(), 0);

        // the coin is gone, a second tick collects nothing
        world.run_system(pickup).unwrap();
        assert_eq!(world.resource::<Scoreboard>().coins, 1);
    }

    #[test]
    fn test_coin_out_of_reach_stays() {
        let mut world = World::new();
        world.insert_resource(Scoreboard::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        world.spawn((
            Player::new(),
            MapPosition::new(0.0, 0.0),
            BoxCollider::new(8.0, 16.0),
        ));
        world.spawn((
            Coin::new(),
            MapPosition::new(100.0, 100.0),
            BoxCollider::new(8.0, 8.0),
        ));

        let pickup = world.register_system(coin_pickup);
        world.run_system(pickup).unwrap();

        assert_eq!(world.resource::<Scoreboard>().coins, 0);
        assert_eq!(world.query::<&Coin>().iter(&world).count(), 1);
    }

    #[test]
    fn test_goal_overlap_requests_victory() {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(GameStates::Playing);
        world.insert_resource(game_state);
        world.insert_resource(NextGameState::new());
        world.insert_resource(Messages::<AudioCmd>::default());
        world.spawn((
            Player::new(),
            MapPosition::new(800.0, 100.0),
            BoxCollider::new(8.0, 16.0),
        ));
        world.spawn((
            Goal,
            MapPosition::new(800.0, 96.0),
            BoxCollider::new(16.0, 32.0),
        ));

        let trigger = world.register_system(goal_trigger);
        world.run_system(trigger).unwrap();

        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Pending(GameStates::Victory)
        );
    }

    #[test]
    fn test_coin_spin_wraps() {
        let mut world = World::new();
        world.spawn(Coin { phase: 3.95 });
        let spin = world.register_system(coin_spin);
        world.run_system(spin).unwrap();
        let coin = *world.query::<&Coin>().single(&world).unwrap();
        assert!(coin.phase < 4.0);
    }
}
