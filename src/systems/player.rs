//! Per-tick player physics and collision resolution.
//!
//! One system applies, in order: horizontal intent, jump intent, gravity,
//! horizontal move + resolve, vertical move + resolve. Each axis is resolved
//! in a single non-iterative pass over the platforms in list order; the
//! first overlap zeroes the velocity, which also ends any further pushing in
//! that pass. The pass order is the order platforms were spawned: the query
//! is collected and sorted by entity id, and platforms are spawned in one
//! batch at level entry and never respawned, so id order is authoring order.
//!
//! The step logic lives in free functions over plain values so the tick can
//! be exercised without a world.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::consts::{ACCEL, DECEL, GRAVITY, JUMP_IMPULSE, MAX_SPEED};
use crate::events::audio::{AudioCmd, Sfx};
use crate::resources::input::InputState;

/// Accelerate toward the held direction, clamped to the speed limit; with no
/// direction held, decelerate toward rest without crossing zero. Left wins
/// when both directions are held.
pub fn horizontal_intent(vel_x: &mut f32, left: bool, right: bool) {
    if left {
        *vel_x = (*vel_x - ACCEL).max(-MAX_SPEED);
    } else if right {
        *vel_x = (*vel_x + ACCEL).min(MAX_SPEED);
    } else if *vel_x > 0.0 {
        *vel_x = (*vel_x - DECEL).max(0.0);
    } else if *vel_x < 0.0 {
        *vel_x = (*vel_x + DECEL).min(0.0);
    }
}

/// Push the player out of overlapping solids along X only.
///
/// The push direction comes from the sign of the velocity, not from the
/// overlap geometry: a body overlapping with zero horizontal velocity is left
/// where it is (the vertical pass owns that case). Velocity is zeroed on any
/// overlap.
pub fn resolve_horizontal(
    pos: &mut Vector2,
    vel: &mut Vector2,
    collider: &BoxCollider,
    solids: &[(Vector2, BoxCollider)],
) {
    for (solid_pos, solid) in solids {
        if collider.overlaps(*pos, solid, *solid_pos) {
            let (solid_min, solid_max) = solid.aabb(*solid_pos);
            if vel.x > 0.0 {
                pos.x = solid_min.x - collider.offset.x - collider.size.x;
            } else if vel.x < 0.0 {
                pos.x = solid_max.x - collider.offset.x;
            }
            vel.x = 0.0;
        }
    }
}

/// Push the player out of overlapping solids along Y only.
///
/// Falling bodies land (bottom edge flush with the solid's top, grounded
/// set); rising bodies bonk (top edge flush with the solid's bottom,
/// grounded untouched). Vertical velocity is zeroed in both cases.
pub fn resolve_vertical(
    pos: &mut Vector2,
    vel: &mut Vector2,
    grounded: &mut bool,
    collider: &BoxCollider,
    solids: &[(Vector2, BoxCollider)],
) {
    for (solid_pos, solid) in solids {
        if collider.overlaps(*pos, solid, *solid_pos) {
            let (solid_min, solid_max) = solid.aabb(*solid_pos);
            if vel.y > 0.0 {
                pos.y = solid_min.y - collider.offset.y - collider.size.y;
                vel.y = 0.0;
                *grounded = true;
            } else if vel.y < 0.0 {
                pos.y = solid_max.y - collider.offset.y;
                vel.y = 0.0;
            }
        }
    }
}

/// One fixed-rate simulation step for the player body.
///
/// Returns true when a jump was initiated this tick; the caller owns the
/// sound trigger. Dead players ignore input but keep integrating.
pub fn step_player(
    pos: &mut Vector2,
    vel: &mut Vector2,
    state: &mut Player,
    collider: &BoxCollider,
    solids: &[(Vector2, BoxCollider)],
    left: bool,
    right: bool,
    jump: bool,
) -> bool {
    let mut jumped = false;
    if state.alive {
        horizontal_intent(&mut vel.x, left, right);
        if jump && state.grounded {
            vel.y = -JUMP_IMPULSE;
            state.grounded = false;
            jumped = true;
        }
    }

    vel.y += GRAVITY;

    pos.x += vel.x;
    resolve_horizontal(pos, vel, collider, solids);

    pos.y += vel.y;
    state.grounded = false;
    resolve_vertical(pos, vel, &mut state.grounded, collider, solids);

    jumped
}

/// Advance every player body by one tick against the current platform set.
pub fn player_physics(
    mut players: Query<(&mut MapPosition, &mut RigidBody, &mut Player, &BoxCollider)>,
    platforms: Query<(Entity, &MapPosition, &BoxCollider), (With<Platform>, Without<Player>)>,
    input: Res<InputState>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let mut solids: Vec<(Entity, Vector2, BoxCollider)> = platforms
        .iter()
        .map(|(entity, position, collider)| (entity, position.pos, *collider))
        .collect();
    solids.sort_by_key(|(entity, ..)| *entity);
    let solids: Vec<(Vector2, BoxCollider)> = solids
        .into_iter()
        .map(|(_, position, collider)| (position, collider))
        .collect();

    for (mut position, mut body, mut player, collider) in players.iter_mut() {
        let jumped = step_player(
            &mut position.pos,
            &mut body.velocity,
            &mut player,
            collider,
            &solids,
            input.left.active,
            input.right.active,
            input.jump.active,
        );
        if jumped {
            audio_cmds.write(AudioCmd::PlayFx { id: Sfx::Jump });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn player_box() -> BoxCollider {
        BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn platform(x: f32, y: f32, w: f32, h: f32) -> (Vector2, BoxCollider) {
        (Vector2 { x, y }, BoxCollider::new(w, h))
    }

    // -------- horizontal intent --------

    #[test]
    fn test_accelerates_toward_held_direction() {
        let mut vel_x = 0.0;
        horizontal_intent(&mut vel_x, false, true);
        assert!(approx_eq(vel_x, ACCEL));
        horizontal_intent(&mut vel_x, false, true);
        assert!(approx_eq(vel_x, 2.0 * ACCEL));
    }

    #[test]
    fn test_speed_is_clamped_both_ways() {
        let mut vel_x = 0.0;
        for _ in 0..1000 {
            horizontal_intent(&mut vel_x, false, true);
            assert!(vel_x <= MAX_SPEED);
        }
        assert!(approx_eq(vel_x, MAX_SPEED));

        for _ in 0..1000 {
            horizontal_intent(&mut vel_x, true, false);
            assert!(vel_x >= -MAX_SPEED);
        }
        assert!(approx_eq(vel_x, -MAX_SPEED));
    }

    #[test]
    fn test_deceleration_never_crosses_zero() {
        let mut vel_x = 0.1; // less than one DECEL step
        horizontal_intent(&mut vel_x, false, false);
        assert!(approx_eq(vel_x, 0.0));

        let mut vel_x = -0.1;
        horizontal_intent(&mut vel_x, false, false);
        assert!(approx_eq(vel_x, 0.0));
    }

    // -------- axis resolution --------

    #[test]
    fn test_moving_right_snaps_flush_to_platform_left_edge() {
        let solids = [platform(100.0, 0.0, 32.0, 64.0)];
        let collider = player_box();
        // start clear of the wall, end overlapping it
        let mut pos = Vector2 { x: 94.0, y: 10.0 };
        let mut vel = Vector2 { x: 8.0, y: 0.0 };
        pos.x += vel.x;
        resolve_horizontal(&mut pos, &mut vel, &collider, &solids);
        assert!(approx_eq(pos.x + PLAYER_WIDTH, 100.0));
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_moving_left_snaps_flush_to_platform_right_edge() {
        let solids = [platform(100.0, 0.0, 32.0, 64.0)];
        let collider = player_box();
        let mut pos = Vector2 { x: 134.0, y: 10.0 };
        let mut vel = Vector2 { x: -8.0, y: 0.0 };
        pos.x += vel.x;
        resolve_horizontal(&mut pos, &mut vel, &collider, &solids);
        assert!(approx_eq(pos.x, 132.0));
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_zero_velocity_overlap_is_left_in_place() {
        // Overlap carried over from a prior frame with no horizontal motion:
        // the push direction comes from the velocity sign, so nothing moves.
        let solids = [platform(100.0, 0.0, 32.0, 64.0)];
        let collider = player_box();
        let mut pos = Vector2 { x: 98.0, y: 10.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        resolve_horizontal(&mut pos, &mut vel, &collider, &solids);
        assert!(approx_eq(pos.x, 98.0));
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_falling_onto_platform_grounds_and_stops() {
        let solids = [platform(0.0, 128.0, 200.0, 16.0)];
        let collider = player_box();
        let mut pos = Vector2 { x: 32.0, y: 110.0 };
        let mut vel = Vector2 { x: 0.0, y: 4.0 };
        let mut grounded = false;
        pos.y += vel.y;
        resolve_vertical(&mut pos, &mut vel, &mut grounded, &collider, &solids);
        assert!(approx_eq(pos.y + PLAYER_HEIGHT, 128.0));
        assert_eq!(vel.y, 0.0);
        assert!(grounded);
    }

    #[test]
    fn test_rising_into_underside_bonks_without_grounding() {
        let solids = [platform(0.0, 40.0, 200.0, 16.0)];
        let collider = player_box();
        let mut pos = Vector2 { x: 32.0, y: 60.0 };
        let mut vel = Vector2 { x: 0.0, y: -6.0 };
        let mut grounded = false;
        pos.y += vel.y;
        resolve_vertical(&mut pos, &mut vel, &mut grounded, &collider, &solids);
        assert!(approx_eq(pos.y, 56.0));
        assert_eq!(vel.y, 0.0);
        assert!(!grounded);
    }

    #[test]
    fn test_multi_overlap_resolves_in_list_order() {
        // Two overlapping solids on the same axis resolve in list order. The
        // first overlap zeroes the velocity, so the second platform - still
        // overlapping after the snap - can no longer push: the push direction
        // comes from the velocity sign.
        let solids = [
            platform(100.0, 0.0, 32.0, 64.0),
            platform(96.0, 0.0, 32.0, 64.0),
        ];
        let collider = player_box();
        let mut pos = Vector2 { x: 90.0, y: 10.0 };
        let mut vel = Vector2 { x: 8.0, y: 0.0 };
        pos.x += vel.x;
        resolve_horizontal(&mut pos, &mut vel, &collider, &solids);
        assert!(approx_eq(pos.x + PLAYER_WIDTH, 100.0));
        assert_eq!(vel.x, 0.0);
    }

    // -------- whole-tick behavior --------

    #[test]
    fn test_jump_tick_leaves_impulse_minus_gravity() {
        let collider = player_box();
        let mut state = Player::new();
        state.grounded = true;
        let mut pos = Vector2 { x: 32.0, y: 100.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        let jumped = step_player(
            &mut pos, &mut vel, &mut state, &collider, &[], false, false, true,
        );
        assert!(jumped);
        assert!(approx_eq(vel.y, -JUMP_IMPULSE + GRAVITY));
        assert!(!state.grounded);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let collider = player_box();
        let mut state = Player::new();
        state.grounded = false;
        let mut pos = Vector2 { x: 32.0, y: 100.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        let jumped = step_player(
            &mut pos, &mut vel, &mut state, &collider, &[], false, false, true,
        );
        assert!(!jumped);
        assert!(approx_eq(vel.y, GRAVITY));
    }

    #[test]
    fn test_gravity_applies_even_when_standing() {
        // Grounded is re-derived each tick: gravity pulls into the platform
        // and the vertical pass lands the player again.
        let solids = [platform(0.0, 128.0, 200.0, 16.0)];
        let collider = player_box();
        let mut state = Player::new();
        let mut pos = Vector2 { x: 32.0, y: 112.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        for _ in 0..10 {
            step_player(
                &mut pos, &mut vel, &mut state, &collider, &solids, false, false, false,
            );
            assert!(approx_eq(pos.y, 112.0));
            assert_eq!(vel.y, 0.0);
            assert!(state.grounded);
        }
    }

    #[test]
    fn test_dead_player_ignores_input_but_falls() {
        let collider = player_box();
        let mut state = Player::new();
        state.alive = false;
        state.grounded = true;
        let mut pos = Vector2 { x: 32.0, y: 100.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        let jumped = step_player(
            &mut pos, &mut vel, &mut state, &collider, &[], false, true, true,
        );
        assert!(!jumped);
        assert_eq!(vel.x, 0.0);
        assert!(approx_eq(vel.y, GRAVITY));
    }

    #[test]
    fn test_walk_and_land_sequence() {
        // Run right off a ledge onto a lower platform.
        let solids = [
            platform(0.0, 64.0, 32.0, 16.0),
            platform(0.0, 128.0, 400.0, 16.0),
        ];
        let collider = player_box();
        let mut state = Player::new();
        let mut pos = Vector2 { x: 10.0, y: 48.0 };
        let mut vel = Vector2 { x: 0.0, y: 0.0 };
        for _ in 0..300 {
            step_player(
                &mut pos, &mut vel, &mut state, &collider, &solids, false, true, false,
            );
        }
        assert!(state.grounded);
        assert!(approx_eq(pos.y + PLAYER_HEIGHT, 128.0));
        assert!(pos.x > 32.0);
    }
}
