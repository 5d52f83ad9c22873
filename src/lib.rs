//! Arcade Sim - shared core for three small arcade games
//!
//! Core modules:
//! - `sim`: Per-frame simulation (motion, AABB collisions, bounces, pools, game state)
//! - `settings`: Data-driven game configuration, validated at setup
//! - `error`: Setup-time errors
//!
//! Rendering, windowing and keyboard polling live outside this crate. A
//! frontend calls `setup` once, then `update` once per frame, and reads
//! `entities()`/`hud()` afterwards to draw.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SetupError};
pub use settings::Settings;

/// Default configuration constants
pub mod consts {
    /// Frame delta at the nominal 60 FPS
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;

    /// Brick grid
    pub const BOARD_WIDTH_IN_BRICKS: usize = 12;
    pub const BOARD_HEIGHT_IN_BRICKS: usize = 13;
    pub const BRICK_WIDTH: f32 = 64.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_OFFSET_X: f32 = 16.0;
    pub const BRICK_OFFSET_Y: f32 = 16.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BREAKOUT_BALL_VELOCITY: (f32, f32) = (50.0, -25.0);
    pub const VOLLEY_BALL_VELOCITY: (f32, f32) = (50.0, 25.0);
    /// Speed multiplier applied on every brick-breaker paddle bounce (uncapped)
    pub const PADDLE_BOOST: f32 = 1.1;

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 100.0;
    pub const BREAKOUT_PADDLE_SIZE: (f32, f32) = (50.0, 5.0);
    pub const VOLLEY_PADDLE_SIZE: (f32, f32) = (5.0, 50.0);
    pub const VOLLEY_PADDLE_MARGIN: f32 = 5.0;

    /// Shooter defaults
    pub const SHIP_SIZE: f32 = 25.0;
    pub const BULLET_SIZE: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 400.0;
    pub const BULLET_COOLDOWN: f32 = 0.3;
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 40.0;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 2.0;
    /// Y coordinate enemies spawn at (above the visible field)
    pub const ENEMY_SPAWN_Y: f32 = -20.0;
    pub const MAX_BULLETS: usize = 50;
    pub const MAX_ENEMIES: usize = 50;
    pub const ENEMIES_PER_LEVEL: u32 = 10;
    pub const STARTING_LIVES: u8 = 3;
}
