use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// 2D sprite identified by a texture key, its frame size, and an offset into
/// the sheet if the texture holds several frames. The animation system
/// rewrites `offset` to select the current frame.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: &'static str,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite showing the whole texture (or its first frame).
    pub fn new(tex_key: &'static str, width: f32, height: f32) -> Self {
        Self {
            tex_key,
            width,
            height,
            offset: Vector2::zero(),
            flip_h: false,
        }
    }
}
