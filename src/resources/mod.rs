//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and accessed by systems during
//! execution: input state, timing, rendering handles, asset stores, and the
//! high-level game state.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `audio` – bridge and channels for the background audio thread
//! - `camera` – scrolling camera that follows the player
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window/FPS settings loaded from config.ini
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of the game's actions
//! - `pixelfont` – character-to-bitmap lookup for HUD text
//! - `rendertarget` – fixed-resolution framebuffer scaled to the window
//! - `scoreboard` – score/coins/lives/time counters
//! - `screensize` – logical canvas dimensions in pixels
//! - `signals` – global flags for cross-system communication
//! - `systemsstore` – registry of hook systems looked up by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `windowsize` – actual window dimensions, for letterboxing
//! - `worldtime` – simulation time and delta

pub mod animationstore;
pub mod audio;
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod pixelfont;
pub mod rendertarget;
pub mod scoreboard;
pub mod screensize;
pub mod signals;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
