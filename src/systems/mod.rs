//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and select the player's pose
//! - [`audio`] – the audio thread and the systems bridging it with the world
//! - [`camera`] – make the scroll camera follow the player
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`hud`] – refresh HUD text from the scoreboard
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`pickups`] – coin spin/collection and the goal trigger
//! - [`player`] – per-tick player physics and collision resolution
//! - [`render`] – draw the world and HUD to the fixed-resolution canvas
//! - [`rules`] – the countdown clock and the fall/lives watcher
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod audio;
pub mod camera;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod pickups;
pub mod player;
pub mod render;
pub mod rules;
pub mod time;
