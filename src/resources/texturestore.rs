//! Texture store resource.
//!
//! Loaded textures keyed by string IDs. All of this game's textures are
//! generated in code from pixel arrays at startup; see
//! [`crate::pixelart`].

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to uploaded textures.
#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<&'static str, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &'static str, texture: Texture2D) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
