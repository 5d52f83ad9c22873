//! Game settings
//!
//! One `Settings` value configures all three games. Every field has a default
//! matching the classic tuning, so a JSON document only needs the keys it
//! wants to override. Malformed values are rejected here, before any world
//! is set up, so the per-frame update never has to check them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SetupError};
use crate::sim::input::{InputBinding, Key};

/// Play field extents (pixels, origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(SetupError::EmptyField {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Brick-breaker tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutSettings {
    /// Board width in bricks
    pub columns: usize,
    /// Board height in bricks
    pub rows: usize,
    pub brick_size: Vec2,
    /// Top-left corner of brick (0, 0)
    pub brick_offset: Vec2,
    pub ball_size: Vec2,
    /// Launch velocity, also the reference for paddle deflection angles
    pub ball_velocity: Vec2,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    /// Speed multiplier per paddle bounce
    pub paddle_boost: f32,
    pub binding: InputBinding,
}

impl Default for BreakoutSettings {
    fn default() -> Self {
        Self {
            columns: BOARD_WIDTH_IN_BRICKS,
            rows: BOARD_HEIGHT_IN_BRICKS,
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_offset: Vec2::new(BRICK_OFFSET_X, BRICK_OFFSET_Y),
            ball_size: Vec2::splat(BALL_SIZE),
            ball_velocity: Vec2::from(BREAKOUT_BALL_VELOCITY),
            paddle_size: Vec2::from(BREAKOUT_PADDLE_SIZE),
            paddle_speed: PADDLE_SPEED,
            paddle_boost: PADDLE_BOOST,
            binding: InputBinding::horizontal(Key::A, Key::D),
        }
    }
}

impl BreakoutSettings {
    pub fn validate(&self, field: &Field) -> Result<()> {
        field.validate()?;
        if self.columns == 0 || self.rows == 0 {
            return Err(SetupError::EmptyBoard {
                columns: self.columns,
                rows: self.rows,
            });
        }
        check_size("brick", self.brick_size)?;
        check_size("ball", self.ball_size)?;
        check_size("paddle", self.paddle_size)?;
        check_fits("paddle width", self.paddle_size.x, field.width)?;
        check_value("paddle speed", self.paddle_speed)?;
        check_value("paddle boost", self.paddle_boost)?;
        check_finite("ball velocity", self.ball_velocity)
    }
}

/// Two-paddle volley tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolleySettings {
    pub ball_size: Vec2,
    pub ball_velocity: Vec2,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    /// Left player, right player
    pub bindings: [InputBinding; 2],
}

impl Default for VolleySettings {
    fn default() -> Self {
        Self {
            ball_size: Vec2::splat(BALL_SIZE),
            ball_velocity: Vec2::from(VOLLEY_BALL_VELOCITY),
            paddle_size: Vec2::from(VOLLEY_PADDLE_SIZE),
            paddle_speed: PADDLE_SPEED,
            paddle_margin: VOLLEY_PADDLE_MARGIN,
            bindings: [
                InputBinding::vertical(Key::W, Key::S),
                InputBinding::vertical(Key::I, Key::K),
            ],
        }
    }
}

impl VolleySettings {
    pub fn validate(&self, field: &Field) -> Result<()> {
        field.validate()?;
        check_size("ball", self.ball_size)?;
        check_size("paddle", self.paddle_size)?;
        check_fits("paddle height", self.paddle_size.y, field.height)?;
        check_value("paddle speed", self.paddle_speed)?;
        check_value("paddle margin", self.paddle_margin)?;
        check_finite("ball velocity", self.ball_velocity)
    }
}

/// Vertical shooter tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterSettings {
    pub ship_size: Vec2,
    pub ship_speed: f32,
    pub binding: InputBinding,
    pub bullet_size: Vec2,
    /// Upward speed (pixels/s)
    pub bullet_speed: f32,
    /// Seconds between shots
    pub bullet_cooldown: f32,
    pub max_bullets: usize,
    pub enemy_size: Vec2,
    /// Downward speed (pixels/s)
    pub enemy_speed: f32,
    /// Seconds between enemy spawns
    pub spawn_interval: f32,
    pub max_enemies: usize,
    /// Kills needed to win; also the number of enemies spawned
    pub enemies_per_level: u32,
    pub lives: u8,
}

impl Default for ShooterSettings {
    fn default() -> Self {
        Self {
            ship_size: Vec2::splat(SHIP_SIZE),
            ship_speed: PADDLE_SPEED,
            binding: InputBinding::horizontal(Key::A, Key::D).with_shoot(Key::Space),
            bullet_size: Vec2::splat(BULLET_SIZE),
            bullet_speed: BULLET_SPEED,
            bullet_cooldown: BULLET_COOLDOWN,
            max_bullets: MAX_BULLETS,
            enemy_size: Vec2::splat(ENEMY_SIZE),
            enemy_speed: ENEMY_SPEED,
            spawn_interval: ENEMY_SPAWN_INTERVAL,
            max_enemies: MAX_ENEMIES,
            enemies_per_level: ENEMIES_PER_LEVEL,
            lives: STARTING_LIVES,
        }
    }
}

impl ShooterSettings {
    pub fn validate(&self, field: &Field) -> Result<()> {
        field.validate()?;
        if self.max_bullets == 0 {
            return Err(SetupError::ZeroPoolCapacity { pool: "bullets" });
        }
        if self.max_enemies == 0 {
            return Err(SetupError::ZeroPoolCapacity { pool: "enemies" });
        }
        if self.lives == 0 {
            return Err(SetupError::ZeroCount { what: "lives" });
        }
        if self.enemies_per_level == 0 {
            return Err(SetupError::ZeroCount {
                what: "enemies per level",
            });
        }
        check_size("ship", self.ship_size)?;
        check_size("bullet", self.bullet_size)?;
        check_size("enemy", self.enemy_size)?;
        check_fits("ship width", self.ship_size.x, field.width)?;
        check_value("ship speed", self.ship_speed)?;
        check_value("bullet speed", self.bullet_speed)?;
        check_value("bullet cooldown", self.bullet_cooldown)?;
        check_value("enemy speed", self.enemy_speed)?;
        check_value("spawn interval", self.spawn_interval)
    }
}

/// Configuration for all three games
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for brick colors and enemy spawn columns
    pub seed: u64,
    pub field: Field,
    pub breakout: BreakoutSettings,
    pub volley: VolleySettings,
    pub shooter: ShooterSettings,
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON (always succeeds for plain data)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every game section against the shared field
    pub fn validate(&self) -> Result<()> {
        self.breakout.validate(&self.field)?;
        self.volley.validate(&self.field)?;
        self.shooter.validate(&self.field)
    }
}

fn check_size(what: &'static str, size: Vec2) -> Result<()> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(SetupError::DegenerateEntity {
            what,
            width: size.x,
            height: size.y,
        })
    }
}

fn check_fits(what: &'static str, extent: f32, field: f32) -> Result<()> {
    if extent <= field {
        Ok(())
    } else {
        Err(SetupError::PaddleWiderThanField {
            what,
            extent,
            field,
        })
    }
}

fn check_value(what: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidValue { what, value })
    }
}

fn check_finite(what: &'static str, v: Vec2) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SetupError::InvalidValue {
            what,
            value: if v.x.is_finite() { v.y } else { v.x },
        })
    }
}
