//! Window size resource.
//!
//! Tracks the actual OS window dimensions in pixels, which differ from the
//! game's render resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Calculate the destination rectangle for letterboxed rendering.
    ///
    /// Given the game's render resolution, returns a rectangle that preserves
    /// the game's aspect ratio, fits within the window bounds, and centers
    /// the content (letterbox/pillarbox as needed).
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            // Window is wider than game - pillarbox (black bars on sides)
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than game - letterbox (black bars top/bottom)
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}
