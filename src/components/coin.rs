use bevy_ecs::prelude::Component;

/// Collectible coin. The spin phase cycles 0..4 and is purely visual.
#[derive(Component, Clone, Copy, Debug)]
pub struct Coin {
    pub phase: f32,
}

impl Default for Coin {
    fn default() -> Self {
        Self::new()
    }
}

impl Coin {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }
}
