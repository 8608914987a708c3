//! Screen-space position component.
//!
//! Stores an entity's position in canvas (pixel) coordinates. Use this for
//! HUD and menu elements that must not move with the camera; for world-space
//! entities see [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position in canvas pixels, drawn after the world pass.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
