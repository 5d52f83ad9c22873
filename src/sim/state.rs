//! Entity and game-state types shared by the three games
//!
//! The worlds own their entities directly. [`Entity`] is the read-only,
//! tagged view handed to a renderer after each update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Face;
use super::geometry::Rect;
use super::input::InputBinding;
use super::pool::Slot;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All enemies of the level destroyed (terminal)
    Won,
    /// Out of lives (terminal)
    GameOver,
}

impl GamePhase {
    /// Terminal phases freeze the simulation
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// Draw colors used by the games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Orange,
    Black,
}

impl Color {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Red => [0.9, 0.16, 0.22, 1.0],
            Color::Green => [0.0, 0.89, 0.19, 1.0],
            Color::Blue => [0.0, 0.47, 0.95, 1.0],
            Color::Orange => [1.0, 0.63, 0.0, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Brick color class (0..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickColor {
    #[default]
    White,
    Red,
    Green,
    Blue,
}

impl BrickColor {
    pub const COUNT: u8 = 4;

    /// Map a class index to a color; indices wrap modulo 4
    pub fn from_class(class: u8) -> Self {
        match class % Self::COUNT {
            0 => BrickColor::White,
            1 => BrickColor::Red,
            2 => BrickColor::Green,
            _ => BrickColor::Blue,
        }
    }

    pub fn class(self) -> u8 {
        self as u8
    }

    pub fn color(self) -> Color {
        match self {
            BrickColor::White => Color::White,
            BrickColor::Red => Color::Red,
            BrickColor::Green => Color::Green,
            BrickColor::Blue => Color::Blue,
        }
    }
}

/// The ball (brick-breaker and volley)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

/// A player-controlled paddle (or the shooter's ship)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Velocity applied on the last tick
    pub vel: Vec2,
    /// Movement speed while a direction is held (pixels/s)
    pub speed: f32,
    pub score: u32,
    pub binding: InputBinding,
}

impl Paddle {
    pub fn new(rect: Rect, speed: f32, binding: InputBinding) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            speed,
            score: 0,
            binding,
        }
    }
}

/// One cell of the brick grid; geometry comes from the grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub color: BrickColor,
    pub alive: bool,
}

/// A pooled moving box (bullets and enemies)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub active: bool,
    pub color: Color,
}

impl Projectile {
    pub fn new(size: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            rect: Rect::from_center_size(Vec2::ZERO, size),
            vel,
            active: false,
            color,
        }
    }
}

impl Slot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Kind-specific part of a rendered entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Ball,
    Paddle { score: u32 },
    Brick { color: BrickColor, alive: bool },
    Bullet { active: bool },
    Enemy { active: bool },
}

/// Read-only snapshot of one entity for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
    pub vel: Vec2,
    pub color: Color,
}

impl Entity {
    /// Whether a renderer should draw this entity at all
    pub fn is_visible(&self) -> bool {
        match self.kind {
            EntityKind::Ball | EntityKind::Paddle { .. } => true,
            EntityKind::Brick { alive, .. } => alive,
            EntityKind::Bullet { active } | EntityKind::Enemy { active } => active,
        }
    }
}

impl From<&Ball> for Entity {
    fn from(ball: &Ball) -> Self {
        Self {
            kind: EntityKind::Ball,
            rect: ball.rect,
            vel: ball.vel,
            color: Color::White,
        }
    }
}

/// Side of the volley court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Notable things that happened during one update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Brick at grid cell (column, row) destroyed through `face`
    BrickDestroyed { column: usize, row: usize, face: Face },
    /// Ball bounced off a paddle
    PaddleHit { player: usize },
    /// Ball left the bottom of the brick-breaker field
    BallMissed,
    /// Every brick destroyed; the level was set up again
    LevelCleared,
    /// Volley point scored by `side`
    PointScored { side: Side },
    /// Bullet destroyed an enemy
    EnemyKilled { kills: u32 },
    /// An enemy rammed the ship
    PlayerHit { lives: u8 },
    BulletFired,
    EnemySpawned,
    Won,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_color_class_wraps() {
        for class in 0..BrickColor::COUNT {
            assert_eq!(BrickColor::from_class(class).class(), class);
        }
        assert_eq!(BrickColor::from_class(5), BrickColor::Red);
        assert_eq!(BrickColor::Blue.color().rgba(), Color::Blue.rgba());
    }

    #[test]
    fn test_rgba_is_opaque() {
        for color in [Color::White, Color::Red, Color::Green, Color::Blue, Color::Orange, Color::Black] {
            assert_eq!(color.rgba()[3], 1.0);
        }
        assert_eq!(Color::White.rgba(), [1.0; 4]);
    }

    #[test]
    fn test_dead_and_inactive_entities_hidden() {
        let rect = Rect::from_center_size(Vec2::ZERO, Vec2::ONE);
        let entity = |kind| Entity {
            kind,
            rect,
            vel: Vec2::ZERO,
            color: Color::White,
        };
        assert!(entity(EntityKind::Ball).is_visible());
        assert!(entity(EntityKind::Paddle { score: 0 }).is_visible());
        assert!(!entity(EntityKind::Brick {
            color: BrickColor::Red,
            alive: false
        })
        .is_visible());
        assert!(entity(EntityKind::Enemy { active: true }).is_visible());
        assert!(!entity(EntityKind::Bullet { active: false }).is_visible());
    }
}
