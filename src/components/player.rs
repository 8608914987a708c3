use bevy_ecs::prelude::Component;

/// Player body state beyond position and velocity.
///
/// `grounded` is re-derived by the physics pass every tick, never latched
/// across ticks.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    /// Resting on top of a platform as of this tick's resolution.
    pub grounded: bool,
    /// Dead players keep falling but ignore input.
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            grounded: false,
            alive: true,
        }
    }
}
