//! Pocketland entry point.
//!
//! A Game-Boy-style 2D platformer written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Everything is drawn to a fixed 160x144 canvas and integer-friendly
//! letterbox-scaled to the window; sprites and sound effects are generated
//! in code at startup, so there are no asset files.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, render target, ECS world, and resources
//! 2. Register state enter/exit hook systems and observers
//! 3. Run the frame loop at a fixed 60 FPS - one frame is one simulation
//!    tick: input polling, state transitions, physics, pickups, rules,
//!    animation, HUD, render, then raylib's frame-pacing sleep
//! 4. Join the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod consts;
mod events;
mod game;
mod level;
mod pixelart;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::input::flow_input_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::camera::ScrollCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;
use crate::resources::signals::WorldSignals;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, player_animation};
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::camera::camera_follow;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::hud::hud_refresh;
use crate::systems::input::update_input_state;
use crate::systems::pickups::{coin_pickup, coin_spin, goal_trigger};
use crate::systems::player::player_physics;
use crate::systems::render::render_system;
use crate::systems::rules::{countdown, fall_watch};
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Pocketland
#[derive(Parser)]
#[command(version, about = "A Game-Boy-style platformer on a 160x144 canvas")]
struct Cli {
    /// Read settings from this file instead of ./config.ini.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Raylib window & render target ---------------
    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
    }
    config.load_from_file().ok(); // ignore errors, use defaults

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Pocketland")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is the cancel action, not window close
    rl.set_exit_key(None);

    let render_target = RenderTarget::new(
        &mut rl,
        &thread,
        consts::RENDER_WIDTH,
        consts::RENDER_HEIGHT,
    )
    .expect("Failed to create render target");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: consts::RENDER_WIDTH as i32,
        h: consts::RENDER_HEIGHT as i32,
    });
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(Scoreboard::new());
    world.insert_resource(ScrollCamera::new());
    world.insert_non_send_resource(render_target);

    // Spawns the audio thread; must go before the scene setup so the first
    // effect triggers have somewhere to go.
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // State enter/exit hooks, registered as systems and looked up by name.
    // Registered systems are stored as entities and must be marked Persistent
    // so scene cleanup leaves them alone.
    let mut systems_store = SystemsStore::new();
    let hooks = [
        ("setup", world.register_system(game::setup)),
        ("enter_menu", world.register_system(game::enter_menu)),
        ("enter_play", world.register_system(game::enter_play)),
        ("enter_gameover", world.register_system(game::enter_gameover)),
        ("enter_victory", world.register_system(game::enter_victory)),
        ("spawn_player", world.register_system(game::spawn_player)),
        ("clean_scene", world.register_system(game::clean_scene)),
        ("quit_game", world.register_system(game::quit_game)),
    ];
    for (name, id) in hooks {
        world.entity_mut(id.entity()).insert(Persistent);
        systems_store.insert(name, id);
    }
    world.insert_resource(systems_store);
    world.flush();

    // Enter the Setup state immediately to build assets.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});

    world.spawn((Observer::new(flow_input_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    // Ensure observers are registered before any system triggers events.
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(
        player_physics
            .after(check_pending_state)
            .run_if(state_is_playing),
    );
    update.add_systems(
        camera_follow
            .after(player_physics)
            .run_if(state_is_playing),
    );
    update.add_systems(coin_spin.run_if(state_is_playing));
    update.add_systems(
        coin_pickup
            .after(player_physics)
            .run_if(state_is_playing),
    );
    update.add_systems(countdown.after(check_pending_state).run_if(state_is_playing));
    update.add_systems(
        fall_watch
            .after(player_physics)
            .run_if(state_is_playing),
    );
    // The goal check runs last of the rules so reaching the goal on the final
    // tick still wins.
    update.add_systems(
        goal_trigger
            .after(coin_pickup)
            .after(countdown)
            .after(fall_watch)
            .run_if(state_is_playing),
    );
    update.add_systems(player_animation.after(player_physics));
    update.add_systems(animation.after(player_animation));
    update.add_systems(hud_refresh.after(coin_pickup).after(countdown));
    update.add_systems(
        render_system
            .after(hud_refresh)
            .after(camera_follow)
            .after(animation)
            .after(coin_spin),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Window may have been resized; keep the letterbox math current.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    shutdown_audio(&mut world);
}
