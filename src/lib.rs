//! Pocketland library.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use in integration tests and as a reusable library.

pub mod components;
pub mod consts;
pub mod events;
pub mod game;
pub mod level;
pub mod pixelart;
pub mod resources;
pub mod systems;
