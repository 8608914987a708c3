//! Simulation constants.
//!
//! The game runs at a fixed 60 ticks per second, one tick per rendered
//! frame, so physics constants are expressed in pixels per tick (and pixels
//! per tick squared for accelerations).

/// Logical canvas width in pixels.
pub const RENDER_WIDTH: u32 = 160;
/// Logical canvas height in pixels.
pub const RENDER_HEIGHT: u32 = 144;
/// Simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 60;

/// Downward acceleration applied every tick, grounded or not.
pub const GRAVITY: f32 = 0.25;
/// Horizontal acceleration per tick while a direction is held.
pub const ACCEL: f32 = 0.10;
/// Horizontal deceleration per tick while no direction is held.
pub const DECEL: f32 = 0.15;
/// Horizontal speed clamp, both directions.
pub const MAX_SPEED: f32 = 1.6;
/// Upward velocity granted by a jump.
pub const JUMP_IMPULSE: f32 = 4.5;

/// Camera lead distance: half the visible width.
pub const SCROLL_EDGE: f32 = (RENDER_WIDTH / 2) as f32;

/// Player bounding box.
pub const PLAYER_WIDTH: f32 = 8.0;
pub const PLAYER_HEIGHT: f32 = 16.0;
/// Fixed respawn point.
pub const SPAWN_X: f32 = 32.0;
pub const SPAWN_Y: f32 = 100.0;

/// Lives granted on a fresh run.
pub const START_LIVES: u32 = 3;
/// Countdown seconds granted on a fresh run.
pub const START_TIME: i32 = 400;
/// Score awarded per collected coin.
pub const COIN_REWARD: u32 = 200;

/// Walk animation rate; two frames means the leg pose flips every eight
/// ticks.
pub const WALK_ANIM_FPS: f32 = 7.5;
/// Minimum horizontal speed for the walk cycle to play.
pub const WALK_SPEED_THRESHOLD: f32 = 0.2;
/// Coin spin phase advance per tick (cyclic modulo 4).
pub const COIN_SPIN_RATE: f32 = 0.15;
