use bevy_ecs::prelude::Component;

/// Playback state for an animation defined in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: &'static str,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: &'static str) -> Self {
        Self {
            animation_key,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to another animation, restarting playback. No-op when the key
    /// is already active so a running cycle is not reset every tick.
    pub fn switch_to(&mut self, animation_key: &'static str) {
        if self.animation_key != animation_key {
            self.animation_key = animation_key;
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}
