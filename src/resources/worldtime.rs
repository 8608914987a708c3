use bevy_ecs::prelude::Resource;

/// Simulation time. `delta` is the scaled frame delta in seconds; animation
/// playback reads it, the physics tick does not (it runs on fixed per-tick
/// constants).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
