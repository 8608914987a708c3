use bevy_ecs::prelude::Component;

/// Level-completion trigger region. A single instance per level; it is never
/// removed, the first overlap with the player ends the level.
#[derive(Component, Clone, Copy, Debug)]
pub struct Goal;
