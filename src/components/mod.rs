//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`coin`] – collectible pickup with a spin phase
//! - [`goal`] – level-completion trigger region
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`platform`] – static solid the player collides with
//! - [`player`] – player body state (grounded/alive)
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`text`] – pixel-font text and HUD bindings
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod coin;
pub mod goal;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod screenposition;
pub mod sprite;
pub mod text;
pub mod zindex;
