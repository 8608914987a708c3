//! Screen size resource.
//!
//! The game's logical canvas dimensions in pixels. Render and HUD layout
//! systems read this rather than hardcoding the canvas size.

use bevy_ecs::prelude::Resource;

/// Logical canvas size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
