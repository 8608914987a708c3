//! Camera follow system.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::ScrollCamera;

/// Scroll the camera after the player so it stays within the lead distance.
/// The follow/clamp logic lives on
/// [`ScrollCamera`](crate::resources::camera::ScrollCamera).
pub fn camera_follow(
    mut camera: ResMut<ScrollCamera>,
    players: Query<&MapPosition, With<Player>>,
) {
    for position in players.iter() {
        camera.update(position.pos.x);
    }
}
