//! Debug overlay marker resource.
//!
//! Presence of this resource enables collider outlines, position crosses,
//! and the FPS readout in the render pass. Toggled by F11 via
//! [`crate::events::switchdebug::switch_debug_observer`].

use bevy_ecs::prelude::Resource;

/// Insert to enable the debug overlay, remove to disable it.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
