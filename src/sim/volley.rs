//! Two-paddle volley world
//!
//! Paddles slide vertically along the left and right walls. A ball leaving
//! through a side wall scores for the opposite player and restarts from the
//! center, keeping its velocity. Scores only ever go up.

use glam::Vec2;

use super::bounce::{reflect_axis, return_volley};
use super::collision::ball_touches_side_paddle;
use super::geometry::Rect;
use super::input::{InputBinding, TickInput};
use super::motion::{Axis, EdgeCrossing, drive_paddle, step};
use super::state::{Ball, Color, Entity, EntityKind, GameEvent, GamePhase, Paddle, Side};
use super::tick::{Hud, Simulation};
use crate::error::Result;
use crate::settings::{Field, VolleySettings};

#[derive(Debug, Clone)]
pub struct VolleyWorld {
    field: Field,
    pub ball: Ball,
    /// Left player, right player
    pub paddles: [Paddle; 2],
    events: Vec<GameEvent>,
}

impl VolleyWorld {
    pub fn setup(settings: &VolleySettings, field: Field) -> Result<Self> {
        settings.validate(&field)?;

        let size = settings.paddle_size;
        let mid_y = field.height / 2.0;
        let left = Vec2::new(settings.paddle_margin, mid_y);
        let right = Vec2::new(field.width - size.x - settings.paddle_margin, mid_y);
        let paddle = |center, binding| {
            Paddle::new(
                Rect::from_center_size(center, size),
                settings.paddle_speed,
                binding,
            )
        };

        log::info!("Volley ready: field {}x{}", field.width, field.height);
        Ok(Self {
            field,
            ball: Ball {
                rect: Rect::from_center_size(field.center(), settings.ball_size),
                vel: settings.ball_velocity,
            },
            paddles: [
                paddle(left, settings.bindings[0]),
                paddle(right, settings.bindings[1]),
            ],
            events: Vec::new(),
        })
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.paddles[0].score, self.paddles[1].score]
    }

    fn score(&mut self, side: Side) {
        let scorer = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        self.paddles[scorer].score += 1;
        self.ball.rect.center = self.field.center();
        self.events.push(GameEvent::PointScored { side });
        log::debug!("Point {:?}: {:?}", side, self.scores());
    }
}

impl Simulation for VolleyWorld {
    fn update(&mut self, dt: f32, input: &TickInput) {
        self.events.clear();

        for (i, paddle) in self.paddles.iter_mut().enumerate() {
            paddle.vel = drive_paddle(
                &mut paddle.rect,
                &input.player(i),
                Axis::Vertical,
                paddle.speed,
                &self.field,
                dt,
            );
        }

        step(&mut self.ball.rect, self.ball.vel, dt);

        for (player, paddle) in self.paddles.iter().enumerate() {
            if ball_touches_side_paddle(&self.ball.rect, &paddle.rect) {
                self.ball.vel = return_volley(self.ball.vel);
                self.events.push(GameEvent::PaddleHit { player });
            }
        }

        let edges = EdgeCrossing::of(self.ball.rect.center, &self.field);
        if edges.vertical() {
            self.ball.vel = reflect_axis(self.ball.vel, Axis::Vertical);
        }
        if edges.left {
            self.score(Side::Right);
        }
        if edges.right {
            self.score(Side::Left);
        }
    }

    fn phase(&self) -> GamePhase {
        GamePhase::Playing
    }

    fn entities(&self) -> Vec<Entity> {
        let mut out: Vec<Entity> = self
            .paddles
            .iter()
            .map(|p| Entity {
                kind: EntityKind::Paddle { score: p.score },
                rect: p.rect,
                vel: p.vel,
                color: Color::White,
            })
            .collect();
        out.push(Entity::from(&self.ball));
        out
    }

    fn hud(&self) -> Hud {
        Hud {
            scores: self.scores().to_vec(),
            lives: None,
            kills: None,
            phase: GamePhase::Playing,
        }
    }

    fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn bindings(&self) -> Vec<InputBinding> {
        self.paddles.iter().map(|p| p.binding).collect()
    }
}
