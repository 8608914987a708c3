//! The hard-coded level layout.
//!
//! A single level defined as code, rebuilt fresh on every entry to Playing;
//! there is no external level format.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::goal::Goal;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;

/// Platform rectangles as (x, y, width, height): the ground runs with gaps,
/// plus floating ledges stepping up toward the goal.
pub const PLATFORMS: &[(f32, f32, f32, f32)] = &[
    // ground
    (0.0, 128.0, 200.0, 16.0),
    (224.0, 128.0, 200.0, 16.0),
    (448.0, 128.0, 400.0, 16.0),
    // floating ledges
    (160.0, 96.0, 32.0, 16.0),
    (256.0, 80.0, 48.0, 16.0),
    (352.0, 64.0, 32.0, 16.0),
    (480.0, 96.0, 64.0, 16.0),
    (600.0, 112.0, 32.0, 16.0),
];

/// Coin positions, one coin hovering over each ledge.
pub const COINS: &[(f32, f32)] = &[
    (176.0, 80.0),
    (272.0, 64.0),
    (368.0, 48.0),
    (496.0, 80.0),
    (512.0, 80.0),
    (616.0, 96.0),
];

/// Goal position and extent.
pub const GOAL: (f32, f32) = (800.0, 96.0);
pub const GOAL_WIDTH: f32 = 16.0;
pub const GOAL_HEIGHT: f32 = 32.0;

/// Coin extent.
pub const COIN_SIZE: f32 = 8.0;

/// Spawn the level's platforms, coins, and goal.
///
/// Platforms are spawned first and in table order; the physics pass resolves
/// against them in that same order.
pub fn spawn_level(commands: &mut Commands) {
    for &(x, y, w, h) in PLATFORMS {
        commands.spawn((
            Group("platforms"),
            Platform,
            MapPosition::new(x, y),
            BoxCollider::new(w, h),
            ZIndex(0),
        ));
    }

    for &(x, y) in COINS {
        commands.spawn((
            Group("coins"),
            Coin::new(),
            MapPosition::new(x, y),
            BoxCollider::new(COIN_SIZE, COIN_SIZE),
            ZIndex(1),
            Sprite::new("coin", COIN_SIZE, COIN_SIZE),
        ));
    }

    commands.spawn((
        Group("goal"),
        Goal,
        MapPosition::new(GOAL.0, GOAL.1),
        BoxCollider::new(GOAL_WIDTH, GOAL_HEIGHT),
        ZIndex(0),
        Sprite::new("goal", GOAL_WIDTH, GOAL_HEIGHT),
    ));
}
