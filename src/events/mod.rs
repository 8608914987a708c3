//! Event types and observers used by the game.
//!
//! Domain events exchanged across systems and the observers that react to
//! them. Events let systems communicate without tight coupling.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`input`] – logical input actions and the flow observer
//! - [`switchdebug`] – toggle the debug overlay on/off

pub mod audio;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
