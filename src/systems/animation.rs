//! Animation systems.
//!
//! [`animation`] advances playback based on elapsed time and updates the
//! visible sprite frame. [`player_animation`] selects which of the player's
//! animations should be active from the body state: walking cycles the
//! two-frame strip while grounded and moving, standing holds the idle frame,
//! airborne shows the jump pose, dead shows the dead pose.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::consts::WALK_SPEED_THRESHOLD;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame offset.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(resource) = animation_store.animations.get(anim.animation_key) else {
            continue;
        };

        anim.elapsed_time += time.delta;
        let frame_duration = 1.0 / resource.fps;
        if anim.elapsed_time >= frame_duration {
            anim.frame_index += 1;
            anim.elapsed_time -= frame_duration;

            if anim.frame_index >= resource.frame_count {
                if resource.looped {
                    anim.frame_index = 0;
                } else {
                    anim.frame_index = resource.frame_count - 1; // stay on last frame
                }
            }
        }

        sprite.offset = Vector2 {
            x: resource.position.x + (anim.frame_index as f32 * resource.displacement),
            y: resource.position.y,
        };
    }
}

/// Pick the player's animation from the body state and mirror the sprite
/// when moving left.
pub fn player_animation(mut query: Query<(&RigidBody, &Player, &mut Animation, &mut Sprite)>) {
    for (body, player, mut anim, mut sprite) in query.iter_mut() {
        let key = if !player.alive {
            "player_dead"
        } else if !player.grounded {
            "player_jump"
        } else if body.velocity.x.abs() > WALK_SPEED_THRESHOLD {
            "player_walk"
        } else {
            "player_stand"
        };
        anim.switch_to(key);
        sprite.flip_h = body.velocity.x < 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::AnimationResource;

    fn store_with_walk() -> AnimationStore {
        let mut store = AnimationStore::new();
        store.insert(
            "player_walk",
            AnimationResource {
                tex_key: "player",
                position: Vector2 { x: 0.0, y: 0.0 },
                displacement: 8.0,
                frame_count: 2,
                fps: 7.5,
                looped: true,
            },
        );
        store
    }

    #[test]
    fn test_walk_cycle_flips_frames_and_offsets() {
        let mut world = World::new();
        world.insert_resource(store_with_walk());
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            // exactly one frame duration per run
            delta: 1.0 / 7.5,
            time_scale: 1.0,
        });
        world.spawn((Animation::new("player_walk"), Sprite::new("player", 8.0, 16.0)));

        let advance = world.register_system(animation);
        world.run_system(advance).unwrap();
        {
            let sprite = world.query::<&Sprite>().single(&world).unwrap();
            assert_eq!(sprite.offset.x, 8.0);
        }
        world.run_system(advance).unwrap();
        {
            let sprite = world.query::<&Sprite>().single(&world).unwrap();
            assert_eq!(sprite.offset.x, 0.0);
        }
    }

    #[test]
    fn test_player_animation_selection() {
        let mut world = World::new();
        let entity = world
            .spawn((
                RigidBody::new(),
                Player::new(),
                Animation::new("player_stand"),
                Sprite::new("player", 8.0, 16.0),
            ))
            .id();
        let select = world.register_system(player_animation);

        // airborne
        world.run_system(select).unwrap();
        assert_eq!(
            world.get::<Animation>(entity).unwrap().animation_key,
            "player_jump"
        );

        // grounded and moving fast enough to walk
        {
            let mut player = world.get_mut::<Player>(entity).unwrap();
            player.grounded = true;
        }
        {
            let mut body = world.get_mut::<RigidBody>(entity).unwrap();
            body.velocity.x = -1.0;
        }
        world.run_system(select).unwrap();
        assert_eq!(
            world.get::<Animation>(entity).unwrap().animation_key,
            "player_walk"
        );
        assert!(world.get::<Sprite>(entity).unwrap().flip_h);

        // grounded and nearly still
        {
            let mut body = world.get_mut::<RigidBody>(entity).unwrap();
            body.velocity.x = 0.1;
        }
        world.run_system(select).unwrap();
        assert_eq!(
            world.get::<Animation>(entity).unwrap().animation_key,
            "player_stand"
        );
        assert!(!world.get::<Sprite>(entity).unwrap().flip_h);
    }
}
