//! Pixel font resource.
//!
//! A mapping from character to fixed-size 3x4 bitmap, built once at startup
//! into an immutable lookup. Characters without a glyph are silently skipped
//! by the text renderer (their advance is still reserved, leaving a gap).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::pixelart::GLYPHS;

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: i32 = 3;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 4;
/// Horizontal advance per character (glyph plus one pixel of spacing).
pub const GLYPH_ADVANCE: i32 = 4;

/// A 3x4 one-bit glyph, rows top to bottom.
pub type Glyph = [[u8; GLYPH_WIDTH as usize]; GLYPH_HEIGHT as usize];

/// Immutable character-to-bitmap lookup.
#[derive(Resource)]
pub struct PixelFont {
    glyphs: FxHashMap<char, Glyph>,
}

impl Default for PixelFont {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelFont {
    /// Build the lookup from the built-in glyph table.
    pub fn new() -> Self {
        let mut glyphs = FxHashMap::default();
        for &(ch, glyph) in GLYPHS {
            glyphs.insert(ch, glyph);
        }
        Self { glyphs }
    }

    /// Glyph for a character, if one exists. Lookup is case-insensitive.
    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch.to_ascii_uppercase())
    }

    /// Width in pixels of a rendered string.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn measure(&self, text: &str) -> i32 {
        text.chars().count() as i32 * GLYPH_ADVANCE
    }
}
