//! Scrolling camera resource.
//!
//! A single horizontal scroll offset that follows the player. Owned by the
//! ECS world and read by the render pass, which turns it into a raylib
//! [`Camera2D`] transform.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::consts::SCROLL_EDGE;

/// Horizontal scroll offset of the view into the world. Never negative, and
/// monotonically non-decreasing except for the reset on level (re)start.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScrollCamera {
    pub scroll_x: f32,
}

impl Default for ScrollCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCamera {
    pub fn new() -> Self {
        Self { scroll_x: 0.0 }
    }

    /// Follow `target_x`: once the target is more than the lead distance past
    /// the left view edge, scroll so it sits exactly at the lead distance.
    /// Clamped so the view never leaves the world origin.
    pub fn update(&mut self, target_x: f32) {
        if target_x - self.scroll_x > SCROLL_EDGE {
            self.scroll_x = target_x - SCROLL_EDGE;
        }
        if self.scroll_x < 0.0 {
            self.scroll_x = 0.0;
        }
    }

    /// Back to the world origin, used on level (re)start and respawn.
    pub fn reset(&mut self) {
        self.scroll_x = 0.0;
    }

    /// Raylib camera for the world render pass. The scroll is floored to a
    /// whole pixel so the low-resolution grid stays stable.
    pub fn to_camera2d(&self) -> Camera2D {
        Camera2D {
            target: Vector2 {
                x: self.scroll_x.floor(),
                y: 0.0,
            },
            offset: Vector2::zero(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}
