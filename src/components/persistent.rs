//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! scene is cleaned on a state change. Used for observers and registered hook
//! systems, which live in the world as entities.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive scene cleanup.
#[derive(Component, Clone, Copy, Debug)]
pub struct Persistent;
