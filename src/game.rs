//! Scene setup and teardown hooks.
//!
//! These systems are registered once at startup under well-known names in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the state-change observer when a state is entered or left. All scene
//! entities are value-replaced on every (re)entry: the exit hook despawns
//! everything non-persistent, the enter hook builds the scene fresh.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::text::{HudStat, PixelText};
use crate::components::zindex::ZIndex;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, SPAWN_X, SPAWN_Y, WALK_ANIM_FPS};
use crate::level;
use crate::pixelart;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::camera::ScrollCamera;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::pixelfont::PixelFont;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::signals::WorldSignals;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;

/// One-time asset setup: build every texture from its pixel arrays, register
/// the animation strips, and load the pixel font. Ends by requesting the
/// menu.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
) {
    let mut tex_store = TextureStore::new();
    let player_sheet =
        pixelart::build_player_sheet(&mut rl, &th).expect("build player sheet texture");
    tex_store.insert("player", player_sheet);
    let coin_tex = pixelart::build_coin(&mut rl, &th).expect("build coin texture");
    tex_store.insert("coin", coin_tex);
    let goal_tex = pixelart::build_goal(&mut rl, &th).expect("build goal texture");
    tex_store.insert("goal", goal_tex);
    commands.insert_resource(tex_store);

    // Player sheet layout: stand | walk | jump | dead, 8px frames.
    let mut anim_store = AnimationStore::new();
    anim_store.insert(
        "player_stand",
        AnimationResource {
            tex_key: "player",
            position: Vector2 { x: 0.0, y: 0.0 },
            displacement: PLAYER_WIDTH,
            frame_count: 1,
            fps: 1.0,
            looped: true,
        },
    );
    anim_store.insert(
        "player_walk",
        AnimationResource {
            tex_key: "player",
            // the walk cycle alternates the stand and walk poses
            position: Vector2 { x: 0.0, y: 0.0 },
            displacement: PLAYER_WIDTH,
            frame_count: 2,
            fps: WALK_ANIM_FPS,
            looped: true,
        },
    );
    anim_store.insert(
        "player_jump",
        AnimationResource {
            tex_key: "player",
            position: Vector2 {
                x: 2.0 * PLAYER_WIDTH,
                y: 0.0,
            },
            displacement: PLAYER_WIDTH,
            frame_count: 1,
            fps: 1.0,
            looped: true,
        },
    );
    anim_store.insert(
        "player_dead",
        AnimationResource {
            tex_key: "player",
            position: Vector2 {
                x: 3.0 * PLAYER_WIDTH,
                y: 0.0,
            },
            displacement: PLAYER_WIDTH,
            frame_count: 1,
            fps: 1.0,
            looped: true,
        },
    );
    commands.insert_resource(anim_store);

    commands.insert_resource(PixelFont::new());

    next_state.set(GameStates::Menu);
    log::info!("Asset setup done, heading to the menu");
}

/// Center a line of pixel text horizontally on the canvas.
fn centered(text: &str, y: f32) -> (ScreenPosition, PixelText) {
    let width = text.chars().count() as i32 * crate::resources::pixelfont::GLYPH_ADVANCE;
    let x = (crate::consts::RENDER_WIDTH as i32 - width) / 2;
    (
        ScreenPosition::new(x as f32, y),
        PixelText::new(text, pixelart::SHADE_DARK),
    )
}

/// Title screen text.
pub fn enter_menu(mut commands: Commands) {
    let (pos, text) = centered("POCKETLAND", 40.0);
    commands.spawn((Group("menu"), pos, text));
    let (pos, text) = centered("PRESS ENTER TO START", 80.0);
    commands.spawn((Group("menu"), pos, text));
    let (pos, text) = centered("ESC TO QUIT", 100.0);
    commands.spawn((Group("menu"), pos, text));
}

/// Fresh run: reset the counters and camera, rebuild the level, spawn the
/// player and the HUD.
pub fn enter_play(
    mut commands: Commands,
    mut scoreboard: ResMut<Scoreboard>,
    mut camera: ResMut<ScrollCamera>,
    systems_store: Res<SystemsStore>,
) {
    scoreboard.reset_run();
    camera.reset();

    level::spawn_level(&mut commands);

    let hud = pixelart::SHADE_DARKEST;
    commands.spawn((
        Group("hud"),
        ScreenPosition::new(8.0, 8.0),
        PixelText::new("PIP", hud),
    ));
    commands.spawn((
        Group("hud"),
        ScreenPosition::new(8.0, 16.0),
        PixelText::new("", hud),
        HudStat::Score,
    ));
    commands.spawn((
        Group("hud"),
        ScreenPosition::new(60.0, 8.0),
        PixelText::new("", hud),
        HudStat::Coins,
    ));
    commands.spawn((
        Group("hud"),
        ScreenPosition::new(60.0, 16.0),
        PixelText::new("", hud),
        HudStat::Time,
    ));
    commands.spawn((
        Group("hud"),
        ScreenPosition::new(120.0, 8.0),
        PixelText::new("", hud),
        HudStat::Lives,
    ));

    let spawn = systems_store
        .get("spawn_player")
        .expect("spawn_player system not found in SystemsStore");
    commands.run_system(*spawn);
}

/// Spawn a fresh player at the fixed spawn point. Run on level entry and
/// again after every non-fatal fall.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Group("player"),
        Player::new(),
        MapPosition::new(SPAWN_X, SPAWN_Y),
        RigidBody::new(),
        BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        ZIndex(2),
        Sprite::new("player", PLAYER_WIDTH, PLAYER_HEIGHT),
        Animation::new("player_stand"),
    ));
}

/// Game-over screen text.
pub fn enter_gameover(mut commands: Commands) {
    let (pos, text) = centered("GAME OVER", 60.0);
    commands.spawn((Group("gameover"), pos, text));
    let (pos, text) = centered("PRESS ENTER TO RETRY", 80.0);
    commands.spawn((Group("gameover"), pos, text));
    let (pos, text) = centered("ESC TO QUIT", 100.0);
    commands.spawn((Group("gameover"), pos, text));
}

/// Victory screen text, with the final score.
pub fn enter_victory(mut commands: Commands, scoreboard: Res<Scoreboard>) {
    let (pos, text) = centered("LEVEL COMPLETE!", 60.0);
    commands.spawn((Group("victory"), pos, text));
    let (pos, text) = centered(&format!("SCORE: {}", scoreboard.score), 80.0);
    commands.spawn((Group("victory"), pos, text));
    let (pos, text) = centered("ESC TO QUIT", 100.0);
    commands.spawn((Group("victory"), pos, text));
}

/// Raise the quit flag; the main loop exits at the end of the frame.
pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    log::info!("Quitting");
    signals.set_flag("quit_game");
}

/// Despawn every scene entity. Observers and registered hook systems are
/// marked [`Persistent`] and survive.
pub fn clean_scene(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
