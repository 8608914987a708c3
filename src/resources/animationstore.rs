//! Animation resource registry.
//!
//! A minimal store for animation definitions that can be reused by multiple
//! entities. Systems look up an animation by key and drive playback from the
//! immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource)]
pub struct AnimationStore {
    pub animations: FxHashMap<&'static str, AnimationResource>,
}

impl Default for AnimationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &'static str, animation: AnimationResource) {
        self.animations.insert(key, animation);
    }
}

/// Immutable data describing a strip of frames in a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: &'static str,
    /// Top-left of frame 0 in the sheet.
    pub position: Vector2,
    /// Per-frame x advance in the sheet.
    pub displacement: f32,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}
