//! Render systems.
//!
//! Everything is drawn to the fixed 160x144 render target: a world pass
//! under the scroll camera (platforms, sprites sorted by z-index and culled
//! against the view), then a screen-space pass for pixel-font text, then the
//! debug overlay when enabled. The finished target is scaled to the window
//! with letterboxing.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::text::PixelText;
use crate::components::zindex::ZIndex;
use crate::pixelart;
use crate::resources::camera::ScrollCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::pixelfont::{GLYPH_ADVANCE, PixelFont};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Draw a string with the pixel font. Characters without a glyph are
/// skipped, but their advance is still reserved so the layout holds.
pub fn draw_pixel_text<D: RaylibDraw>(
    d: &mut D,
    font: &PixelFont,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) {
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = font.get(ch) else { continue };
        let cell_x = x + i as i32 * GLYPH_ADVANCE;
        for (gy, row) in glyph.iter().enumerate() {
            for (gx, &bit) in row.iter().enumerate() {
                if bit == 1 {
                    d.draw_pixel(cell_x + gx as i32, y + gy as i32, color);
                }
            }
        }
    }
}

/// Exclusive render system: draws the whole frame and presents it.
///
/// Raylib's draw handles borrow the handle and thread exclusively, so the
/// non-send graphics resources are pulled out of the world for the draw
/// scope and reinserted afterwards.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread missing from world");
    let mut target = world
        .remove_non_send_resource::<RenderTarget>()
        .expect("render target missing from world");

    let camera = world.resource::<ScrollCamera>().to_camera2d();
    let window = *world.resource::<WindowSize>();

    {
        let mut d = rl.begin_drawing(&thread);
        {
            let mut canvas = d.begin_texture_mode(&thread, &mut target.texture);
            canvas.clear_background(pixelart::SHADE_LIGHTEST);
            {
                let mut d2 = canvas.begin_mode2D(camera);
                render_world(world, &mut d2);
            }
            render_screen(world, &mut canvas);
        }

        d.clear_background(Color::BLACK);
        let dest = window.calculate_letterbox(target.game_width, target.game_height);
        // The render texture's color attachment is drawn via FFI; the safe
        // wrappers only cover plain textures.
        unsafe {
            raylib::ffi::DrawTexturePro(
                target.texture.texture,
                target.source_rect().into(),
                dest.into(),
                Vector2::zero().into(),
                0.0,
                Color::WHITE.into(),
            );
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(target);
}

/// World pass, drawn in camera space.
fn render_world(world: &mut World, d2: &mut impl RaylibDraw) {
    let camera = *world.resource::<ScrollCamera>();
    let screen = *world.resource::<ScreenSize>();

    // Visible world rectangle; the camera only scrolls along X.
    let view_min_x = camera.scroll_x;
    let view_max_x = camera.scroll_x + screen.w as f32;

    // Platforms are flat-shaded rectangles with a darker border.
    {
        let mut platforms = world.query_filtered::<(&MapPosition, &BoxCollider), With<Platform>>();
        for (position, collider) in platforms.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            if x + w < view_min_x || x > view_max_x {
                continue;
            }
            d2.draw_rectangle(x as i32, y as i32, w as i32, h as i32, pixelart::SHADE_LIGHT);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, pixelart::SHADE_DARK);
        }
    }

    // Sprites: collect, cull against the view, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world)
            .filter_map(|(sprite, position, z)| {
                let min_x = position.pos.x;
                let max_x = min_x + sprite.width;
                if max_x < view_min_x || min_x > view_max_x {
                    None
                } else {
                    Some((sprite.clone(), *position, *z))
                }
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, position, _z) in to_draw.iter() {
        let Some(tex) = textures.get(sprite.tex_key) else {
            continue;
        };
        // Source rect selects a frame from the sheet; a negative width
        // mirrors the frame horizontally.
        let mut src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: sprite.width,
            height: sprite.height,
        };
        if sprite.flip_h {
            src.width = -src.width;
        }
        // Whole-pixel destination keeps sprites on the low-res grid.
        let dest = Rectangle {
            x: position.pos.x.floor(),
            y: position.pos.y.floor(),
            width: sprite.width,
            height: sprite.height,
        };
        d2.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            let (px, py) = (position.pos.x as i32, position.pos.y as i32);
            d2.draw_line(px - 2, py, px + 2, py, Color::GREEN);
            d2.draw_line(px, py - 2, px, py + 2, Color::GREEN);
        }
    }
}

/// Screen-space pass: pixel-font text and the debug readout.
fn render_screen(world: &mut World, d: &mut impl RaylibDraw) {
    let mut texts: Vec<(PixelText, ScreenPosition)> = {
        let mut q = world.query::<(&PixelText, &ScreenPosition)>();
        q.iter(world)
            .map(|(text, position)| (text.clone(), *position))
            .collect()
    };
    // stable reading order for overlapping text is not a concern; draw in
    // spawn order
    let font = world.resource::<PixelFont>();
    for (text, position) in texts.drain(..) {
        draw_pixel_text(
            d,
            font,
            &text.text,
            position.pos.x as i32,
            position.pos.y as i32,
            text.color,
        );
    }

    if world.contains_resource::<DebugMode>() {
        let screen = *world.resource::<ScreenSize>();
        let entity_count = world.iter_entities().count();
        d.draw_text(
            &format!("E:{}", entity_count),
            2,
            screen.h - 10,
            10,
            Color::RED,
        );
        let camera = world.resource::<ScrollCamera>();
        d.draw_text(
            &format!("X:{:.0}", camera.scroll_x),
            40,
            screen.h - 10,
            10,
            Color::RED,
        );
    }
}
