//! Kinematic body component.
//!
//! Stores the per-tick velocity of a moving entity. The simulation runs on
//! fixed per-tick constants, and the player controller integrates its own
//! accelerations, so the body is just the velocity state shared between the
//! physics, camera-follow, and animation systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in pixels per tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }
}
