use bevy_ecs::prelude::Component;

/// Static solid the player collides with. The collider carries the rectangle;
/// platforms are immutable for the lifetime of a level instance.
#[derive(Component, Clone, Copy, Debug)]
pub struct Platform;
