//! Pixel-font text components.
//!
//! [`PixelText`] is rendered with the built-in 3x4 bitmap font by the HUD
//! pass. Entities that additionally carry a [`HudStat`] get their string
//! refreshed from the [`Scoreboard`](crate::resources::scoreboard::Scoreboard)
//! each frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Text drawn with the built-in pixel font at a [`ScreenPosition`].
///
/// [`ScreenPosition`]: super::screenposition::ScreenPosition
#[derive(Component, Clone, Debug)]
pub struct PixelText {
    pub text: String,
    pub color: Color,
}

impl PixelText {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Scoreboard field a HUD text entity displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudStat {
    Score,
    Coins,
    Time,
    Lives,
}
