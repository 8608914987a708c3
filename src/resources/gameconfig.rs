//! Game configuration resource.
//!
//! Window settings loaded from an INI configuration file, with safe defaults
//! when the file is absent. The render resolution is fixed by the game
//! (160x144) and is not configurable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 576
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::consts::{RENDER_HEIGHT, RENDER_WIDTH};

/// Default safe values for startup: a 4x integer upscale of the canvas.
const DEFAULT_WINDOW_WIDTH: u32 = RENDER_WIDTH * 4;
const DEFAULT_WINDOW_HEIGHT: u32 = RENDER_HEIGHT * 4;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window settings. The target FPS doubles as the simulation tick rate: one
/// frame is one tick, and raylib's frame pacing supplies the loop-tail sleep.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames (ticks) per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}",
            self.window_width, self.window_height, self.target_fps
        );

        Ok(())
    }
}
