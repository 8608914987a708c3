//! Render target resource for fixed-resolution rendering.
//!
//! Provides a framebuffer texture at the game's 160x144 internal resolution,
//! which is then scaled to fit the actual window size with letterboxing as
//! needed.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Fixed-resolution framebuffer.
///
/// The render system draws all game content to this texture, then scales it
/// to fit the window. Point filtering keeps the upscale pixel-sharp.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU
/// resources that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Game's internal render width in pixels.
    pub game_width: u32,
    /// Game's internal render height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a new render target at the specified game resolution.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        // Nearest-neighbor filtering: pixel art must stay sharp when scaled.
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for drawing this texture to the window.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
