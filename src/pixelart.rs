//! In-code pixel art: the four-tone palette, sprite frames, and the glyph
//! table for the 3x4 HUD font.
//!
//! There are no image assets; every texture is built at startup by blitting
//! these arrays into an [`Image`] and uploading it. Sprite cells use
//! 0 = transparent, 1 = dark, 2 = darkest.

use raylib::prelude::*;

/// Four-tone hand-held green palette, darkest to lightest. The lightest tone
/// doubles as the background clear color.
pub const SHADE_DARKEST: Color = Color {
    r: 15,
    g: 56,
    b: 15,
    a: 255,
};
pub const SHADE_DARK: Color = Color {
    r: 48,
    g: 98,
    b: 48,
    a: 255,
};
pub const SHADE_LIGHT: Color = Color {
    r: 139,
    g: 172,
    b: 15,
    a: 255,
};
pub const SHADE_LIGHTEST: Color = Color {
    r: 155,
    g: 188,
    b: 15,
    a: 255,
};

/// One 8x16 player frame.
pub type PlayerFrame = [[u8; 8]; 16];

pub const PLAYER_STAND: PlayerFrame = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 1, 1, 0, 0, 1, 1, 0],
];

/// Walking pose; the walk cycle alternates this with [`PLAYER_STAND`].
pub const PLAYER_WALK: PlayerFrame = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 0, 0, 1, 0, 0],
    [0, 1, 0, 0, 0, 1, 0, 0],
    [1, 0, 0, 0, 0, 0, 1, 0],
    [1, 0, 0, 0, 0, 0, 1, 0],
    [1, 1, 0, 0, 0, 1, 1, 0],
];

pub const PLAYER_JUMP: PlayerFrame = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 0, 0, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 0, 0, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const PLAYER_DEAD: PlayerFrame = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 0, 0, 0, 0, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const COIN_SPRITE: [[u8; 8]; 8] = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
];

fn shade(value: u8) -> Option<Color> {
    match value {
        1 => Some(SHADE_DARK),
        2 => Some(SHADE_DARKEST),
        _ => None,
    }
}

fn blit<const W: usize, const H: usize>(image: &mut Image, frame: &[[u8; W]; H], x_off: i32) {
    for (y, row) in frame.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if let Some(color) = shade(value) {
                image.draw_pixel(x_off + x as i32, y as i32, color);
            }
        }
    }
}

/// The player sprite sheet: stand, walk, jump, dead frames side by side.
pub fn build_player_sheet(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<Texture2D, String> {
    let mut image = Image::gen_image_color(32, 16, Color::BLANK);
    let frames = [&PLAYER_STAND, &PLAYER_WALK, &PLAYER_JUMP, &PLAYER_DEAD];
    for (i, frame) in frames.iter().enumerate() {
        blit(&mut image, frame, i as i32 * 8);
    }
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to upload player sheet: {}", e))
}

/// The coin sprite.
pub fn build_coin(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D, String> {
    let mut image = Image::gen_image_color(8, 8, Color::BLANK);
    blit(&mut image, &COIN_SPRITE, 0);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to upload coin sprite: {}", e))
}

/// The goal: a 16x32 pole with a small flag.
pub fn build_goal(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D, String> {
    let mut image = Image::gen_image_color(16, 32, Color::BLANK);
    for y in 0..32 {
        image.draw_pixel(7, y, SHADE_DARKEST);
        image.draw_pixel(8, y, SHADE_DARKEST);
    }
    for y in 2..8 {
        for x in 9..(9 + (8 - y)) {
            image.draw_pixel(x, y, SHADE_DARK);
        }
    }
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to upload goal sprite: {}", e))
}

/// 3x4 glyphs for the HUD font, keyed by (upper-case) character.
pub const GLYPHS: &[(char, [[u8; 3]; 4])] = &[
    ('A', [[1, 1, 1], [1, 0, 1], [1, 1, 1], [1, 0, 1]]),
    ('B', [[1, 1, 0], [1, 0, 1], [1, 1, 0], [1, 1, 1]]),
    ('C', [[1, 1, 1], [1, 0, 0], [1, 0, 0], [1, 1, 1]]),
    ('D', [[1, 1, 0], [1, 0, 1], [1, 0, 1], [1, 1, 0]]),
    ('E', [[1, 1, 1], [1, 0, 0], [1, 1, 0], [1, 1, 1]]),
    ('F', [[1, 1, 1], [1, 0, 0], [1, 1, 0], [1, 0, 0]]),
    ('G', [[1, 1, 1], [1, 0, 0], [1, 0, 1], [1, 1, 1]]),
    ('H', [[1, 0, 1], [1, 1, 1], [1, 0, 1], [1, 0, 1]]),
    ('I', [[1, 1, 1], [0, 1, 0], [0, 1, 0], [1, 1, 1]]),
    ('J', [[0, 0, 1], [0, 0, 1], [1, 0, 1], [1, 1, 1]]),
    ('K', [[1, 0, 1], [1, 1, 0], [1, 1, 0], [1, 0, 1]]),
    ('L', [[1, 0, 0], [1, 0, 0], [1, 0, 0], [1, 1, 1]]),
    ('M', [[1, 0, 1], [1, 1, 1], [1, 0, 1], [1, 0, 1]]),
    ('N', [[1, 0, 1], [1, 1, 1], [1, 1, 1], [1, 0, 1]]),
    ('O', [[1, 1, 1], [1, 0, 1], [1, 0, 1], [1, 1, 1]]),
    ('P', [[1, 1, 1], [1, 0, 1], [1, 1, 1], [1, 0, 0]]),
    ('Q', [[1, 1, 1], [1, 0, 1], [1, 1, 1], [0, 0, 1]]),
    ('R', [[1, 1, 0], [1, 0, 1], [1, 1, 0], [1, 0, 1]]),
    ('S', [[1, 1, 1], [1, 0, 0], [0, 1, 0], [1, 1, 1]]),
    ('T', [[1, 1, 1], [0, 1, 0], [0, 1, 0], [0, 1, 0]]),
    ('U', [[1, 0, 1], [1, 0, 1], [1, 0, 1], [1, 1, 1]]),
    ('V', [[1, 0, 1], [1, 0, 1], [1, 0, 1], [0, 1, 0]]),
    ('W', [[1, 0, 1], [1, 0, 1], [1, 1, 1], [1, 0, 1]]),
    ('X', [[1, 0, 1], [0, 1, 0], [0, 1, 0], [1, 0, 1]]),
    ('Y', [[1, 0, 1], [1, 0, 1], [0, 1, 0], [0, 1, 0]]),
    ('Z', [[1, 1, 1], [0, 1, 0], [1, 0, 0], [1, 1, 1]]),
    ('0', [[1, 1, 1], [1, 0, 1], [1, 0, 1], [1, 1, 1]]),
    ('1', [[0, 1, 0], [1, 1, 0], [0, 1, 0], [1, 1, 1]]),
    ('2', [[1, 1, 1], [0, 0, 1], [0, 1, 0], [1, 1, 1]]),
    ('3', [[1, 1, 1], [0, 1, 1], [0, 0, 1], [1, 1, 1]]),
    ('4', [[1, 0, 1], [1, 0, 1], [1, 1, 1], [0, 0, 1]]),
    ('5', [[1, 1, 1], [1, 0, 0], [0, 1, 1], [1, 1, 0]]),
    ('6', [[1, 0, 0], [1, 1, 1], [1, 0, 1], [1, 1, 1]]),
    ('7', [[1, 1, 1], [0, 0, 1], [0, 1, 0], [0, 1, 0]]),
    ('8', [[1, 1, 1], [1, 1, 1], [1, 0, 1], [1, 1, 1]]),
    ('9', [[1, 1, 1], [1, 0, 1], [1, 1, 1], [0, 0, 1]]),
    (':', [[0, 1, 0], [0, 0, 0], [0, 1, 0], [0, 0, 0]]),
    ('!', [[0, 1, 0], [0, 1, 0], [0, 0, 0], [0, 1, 0]]),
    ('.', [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 1, 0]]),
    ('-', [[0, 0, 0], [1, 1, 1], [0, 0, 0], [0, 0, 0]]),
    (' ', [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_frames_share_dimensions() {
        for frame in [PLAYER_STAND, PLAYER_WALK, PLAYER_JUMP, PLAYER_DEAD] {
            assert_eq!(frame.len(), 16);
            assert_eq!(frame[0].len(), 8);
        }
    }

    #[test]
    fn test_cells_use_known_shades() {
        for frame in [PLAYER_STAND, PLAYER_WALK, PLAYER_JUMP, PLAYER_DEAD] {
            for row in frame {
                for value in row {
                    assert!(value <= 2);
                }
            }
        }
        for row in COIN_SPRITE {
            for value in row {
                assert!(value <= 2);
            }
        }
    }

    #[test]
    fn test_glyph_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for (ch, _) in GLYPHS {
            assert!(seen.insert(*ch), "duplicate glyph for {ch:?}");
        }
    }
}
