//! HUD refresh system.
//!
//! Rewrites the strings of HUD text entities from the
//! [`Scoreboard`](crate::resources::scoreboard::Scoreboard) each frame, in
//! the classic zero-padded layout.

use bevy_ecs::prelude::*;

use crate::components::text::{HudStat, PixelText};
use crate::resources::scoreboard::Scoreboard;

/// Format the bound scoreboard field into each HUD text entity.
pub fn hud_refresh(scoreboard: Res<Scoreboard>, mut query: Query<(&HudStat, &mut PixelText)>) {
    for (stat, mut text) in query.iter_mut() {
        let fresh = match stat {
            HudStat::Score => format!("{:06}", scoreboard.score),
            HudStat::Coins => format!("COINS:{:02}", scoreboard.coins),
            HudStat::Time => format!("TIME:{:03}", scoreboard.time.max(0)),
            HudStat::Lives => format!("LIVES:{}", scoreboard.lives),
        };
        if text.text != fresh {
            text.text = fresh;
        }
    }
}
