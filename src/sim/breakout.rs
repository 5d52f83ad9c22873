//! Brick-breaker world
//!
//! One paddle along the bottom edge, one ball and a grid of bricks. Missing
//! the ball puts it back on its spawn point; clearing the board sets up a
//! fresh random layout straight away. There is no terminal state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bounce::{deflect_off_paddle, reflect_axis, reflect_off_face};
use super::collision::{ball_touches_floor_paddle, first_hit};
use super::geometry::Rect;
use super::input::{InputBinding, TickInput};
use super::motion::{Axis, EdgeCrossing, drive_paddle, step};
use super::state::{Ball, Brick, BrickColor, Color, Entity, EntityKind, GameEvent, GamePhase, Paddle};
use super::tick::{Hud, Simulation};
use crate::error::Result;
use crate::settings::{BreakoutSettings, Field};

/// Distance from the bottom edge to the ball's spawn point
const BALL_SPAWN_LIFT: f32 = 20.0;
/// Distance from the bottom edge to the paddle's center
const PADDLE_LIFT: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct BreakoutWorld {
    settings: BreakoutSettings,
    field: Field,
    rng: Pcg32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major: cell (column, row) lives at `column * rows + row`
    bricks: Vec<Brick>,
    levels_cleared: u32,
    events: Vec<GameEvent>,
}

impl BreakoutWorld {
    /// Validate settings and set up the first level
    pub fn setup(settings: &BreakoutSettings, field: Field, seed: u64) -> Result<Self> {
        settings.validate(&field)?;

        let paddle = Paddle::new(
            Rect::from_center_size(Vec2::ZERO, settings.paddle_size),
            settings.paddle_speed,
            settings.binding,
        );
        let mut world = Self {
            settings: settings.clone(),
            field,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball {
                rect: Rect::from_center_size(Vec2::ZERO, settings.ball_size),
                vel: Vec2::ZERO,
            },
            paddle,
            bricks: Vec::with_capacity(settings.columns * settings.rows),
            levels_cleared: 0,
            events: Vec::new(),
        };
        world.reset_level();
        log::info!(
            "Breakout ready: {}x{} bricks, field {}x{}",
            settings.columns,
            settings.rows,
            field.width,
            field.height
        );
        Ok(world)
    }

    /// New random brick layout; ball and paddle back to their spawn points
    fn reset_level(&mut self) {
        let count = self.settings.columns * self.settings.rows;
        let rng = &mut self.rng;
        self.bricks.clear();
        self.bricks.extend((0..count).map(|_| Brick {
            color: BrickColor::from_class(rng.random_range(0..BrickColor::COUNT)),
            alive: true,
        }));

        self.ball.rect.center = self.ball_spawn();
        self.ball.vel = self.settings.ball_velocity;
        self.paddle.rect.center = Vec2::new(self.field.width / 2.0, self.field.height - PADDLE_LIFT);
        self.paddle.vel = Vec2::ZERO;
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field.width / 2.0, self.field.height - BALL_SPAWN_LIFT)
    }

    pub fn columns(&self) -> usize {
        self.settings.columns
    }

    pub fn rows(&self) -> usize {
        self.settings.rows
    }

    pub fn brick(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.settings.columns || row >= self.settings.rows {
            return None;
        }
        self.bricks.get(column * self.settings.rows + row)
    }

    /// Screen rectangle of grid cell (column, row)
    pub fn brick_rect(&self, column: usize, row: usize) -> Rect {
        let size = self.settings.brick_size;
        let top_left = self.settings.brick_offset + Vec2::new(column as f32, row as f32) * size;
        Rect::from_top_left(top_left, size)
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }

    /// Alive bricks in scan order (column outer, row inner)
    fn alive_bricks(&self) -> impl Iterator<Item = ((usize, usize), Rect)> + '_ {
        let rows = self.settings.rows;
        self.bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.alive)
            .map(move |(i, _)| {
                let cell = (i / rows, i % rows);
                (cell, self.brick_rect(cell.0, cell.1))
            })
    }

    fn update_paddle(&mut self, input: &TickInput, dt: f32) {
        self.paddle.vel = drive_paddle(
            &mut self.paddle.rect,
            &input.player(0),
            Axis::Horizontal,
            self.paddle.speed,
            &self.field,
            dt,
        );
    }

    /// Edge handling. All three tests use the post-move position and are
    /// applied together; a wall bounce leaves the position alone.
    fn update_walls(&mut self) {
        let edges = EdgeCrossing::of(self.ball.rect.center, &self.field);
        if edges.bottom {
            self.ball.rect.center = self.ball_spawn();
            self.ball.vel = self.settings.ball_velocity;
            self.events.push(GameEvent::BallMissed);
            log::debug!("Ball missed, respawning");
        }
        if edges.top {
            self.ball.vel = reflect_axis(self.ball.vel, Axis::Vertical);
        }
        if edges.horizontal() {
            self.ball.vel = reflect_axis(self.ball.vel, Axis::Horizontal);
        }
    }

    /// At most one brick per tick
    fn update_bricks(&mut self) {
        let Some(hit) = first_hit(&self.ball.rect, self.alive_bricks()) else {
            return;
        };
        let (column, row) = hit.key;
        let index = column * self.settings.rows + row;
        self.bricks[index].alive = false;
        self.ball.vel = reflect_off_face(self.ball.vel, hit.face);
        self.paddle.score += 1;
        self.events.push(GameEvent::BrickDestroyed {
            column,
            row,
            face: hit.face,
        });
    }

    fn update_paddle_contact(&mut self) {
        if ball_touches_floor_paddle(&self.ball.rect, &self.paddle.rect) {
            self.ball.vel = deflect_off_paddle(
                self.ball.vel,
                &self.ball.rect,
                &self.paddle.rect,
                self.settings.ball_velocity,
                self.settings.paddle_boost,
            );
            self.events.push(GameEvent::PaddleHit { player: 0 });
        }
    }
}

impl Simulation for BreakoutWorld {
    fn update(&mut self, dt: f32, input: &TickInput) {
        self.events.clear();

        self.update_paddle(input, dt);
        step(&mut self.ball.rect, self.ball.vel, dt);

        self.update_walls();
        self.update_bricks();
        self.update_paddle_contact();

        if self.alive_count() == 0 {
            self.levels_cleared += 1;
            self.events.push(GameEvent::LevelCleared);
            log::info!("Board cleared ({} so far), new layout", self.levels_cleared);
            self.reset_level();
        }
    }

    fn phase(&self) -> GamePhase {
        GamePhase::Playing
    }

    fn entities(&self) -> Vec<Entity> {
        let mut out = Vec::with_capacity(self.bricks.len() + 2);
        let rows = self.settings.rows;
        out.extend(self.bricks.iter().enumerate().map(|(i, brick)| Entity {
            kind: EntityKind::Brick {
                color: brick.color,
                alive: brick.alive,
            },
            rect: self.brick_rect(i / rows, i % rows),
            vel: Vec2::ZERO,
            color: brick.color.color(),
        }));
        out.push(Entity {
            kind: EntityKind::Paddle {
                score: self.paddle.score,
            },
            rect: self.paddle.rect,
            vel: self.paddle.vel,
            color: Color::White,
        });
        out.push(Entity::from(&self.ball));
        out
    }

    fn hud(&self) -> Hud {
        Hud {
            scores: vec![self.paddle.score],
            lives: None,
            kills: None,
            phase: GamePhase::Playing,
        }
    }

    fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn bindings(&self) -> Vec<InputBinding> {
        vec![self.paddle.binding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Face;
    use crate::sim::input::Controls;

    fn world_with_board(columns: usize, rows: usize) -> BreakoutWorld {
        let settings = BreakoutSettings {
            columns,
            rows,
            ..Default::default()
        };
        BreakoutWorld::setup(&settings, Field::default(), 1).expect("valid settings")
    }

    #[test]
    fn test_setup_places_everything() {
        let world = world_with_board(12, 13);
        assert_eq!(world.alive_count(), 156);
        assert_eq!(world.ball.rect.center, Vec2::new(400.0, 430.0));
        assert_eq!(world.ball.vel, Vec2::new(50.0, -25.0));
        assert_eq!(world.paddle.rect.center, Vec2::new(400.0, 440.0));
        assert_eq!(world.brick_rect(1, 2).min(), Vec2::new(80.0, 64.0));
    }

    #[test]
    fn test_single_brick_cleared_on_seventh_tick() {
        let mut world = world_with_board(1, 1);
        // Brick (0,0) spans x 16..80, y 16..40. Ball rises 1px per tick and
        // first touches the brick's bottom edge when its center reaches y=45.
        world.ball.rect.center = Vec2::new(48.0, 52.0);
        world.ball.vel = Vec2::new(0.0, -4.0);
        let dt = 0.25;

        for _ in 0..6 {
            world.update(dt, &TickInput::default());
            assert!(world.events().is_empty());
            assert!(world.brick(0, 0).unwrap().alive);
        }

        world.update(dt, &TickInput::default());
        assert_eq!(
            world.events(),
            &[
                GameEvent::BrickDestroyed {
                    column: 0,
                    row: 0,
                    face: Face::Bottom
                },
                GameEvent::LevelCleared
            ]
        );
        // Level set up again before the next tick
        assert!(world.brick(0, 0).unwrap().alive);
        assert_eq!(world.ball.rect.center, world.ball_spawn());
        assert_eq!(world.ball.vel, Vec2::new(50.0, -25.0));
        assert_eq!(world.levels_cleared(), 1);
        assert_eq!(world.paddle.score, 1);
    }

    #[test]
    fn test_brick_hit_flips_vertical_only() {
        let mut world = world_with_board(2, 1);
        world.ball.rect.center = Vec2::new(48.0, 46.0);
        world.ball.vel = Vec2::new(8.0, -4.0);
        world.update(0.25, &TickInput::default());

        assert!(!world.brick(0, 0).unwrap().alive);
        assert!(world.brick(1, 0).unwrap().alive);
        assert_eq!(world.ball.vel, Vec2::new(8.0, 4.0));
    }

    #[test]
    fn test_one_brick_per_tick() {
        let mut world = world_with_board(2, 1);
        // Straddles the boundary between the two bricks at x=80
        world.ball.rect.center = Vec2::new(80.0, 28.0);
        world.ball.vel = Vec2::ZERO;
        world.update(0.25, &TickInput::default());
        assert_eq!(world.alive_count(), 1);
        assert!(!world.brick(0, 0).unwrap().alive);

        world.update(0.25, &TickInput::default());
        assert!(world.events().contains(&GameEvent::LevelCleared));
    }

    #[test]
    fn test_miss_resets_ball() {
        let mut world = world_with_board(12, 13);
        world.ball.rect.center = Vec2::new(200.0, 449.0);
        world.ball.vel = Vec2::new(10.0, 8.0);
        world.update(0.25, &TickInput::default());

        assert_eq!(world.events(), &[GameEvent::BallMissed]);
        assert_eq!(world.ball.rect.center, world.ball_spawn());
        assert_eq!(world.ball.vel, Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_top_wall_flips_without_correction() {
        let mut world = world_with_board(1, 1);
        world.ball.rect.center = Vec2::new(600.0, 1.0);
        world.ball.vel = Vec2::new(4.0, -8.0);
        world.update(0.25, &TickInput::default());

        assert_eq!(world.ball.rect.center, Vec2::new(601.0, -1.0));
        assert_eq!(world.ball.vel, Vec2::new(4.0, 8.0));
    }

    #[test]
    fn test_paddle_bounce_speeds_up() {
        let mut world = world_with_board(12, 13);
        world.ball.rect.center = Vec2::new(410.0, 436.0);
        world.ball.vel = Vec2::new(0.0, 40.0);
        world.update(0.05, &TickInput::default());

        assert_eq!(world.events(), &[GameEvent::PaddleHit { player: 0 }]);
        assert!(world.ball.vel.y < 0.0);
        assert!(world.ball.vel.x > 0.0);
        assert!((world.ball.vel.length() - 44.0).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_stays_on_field() {
        let mut world = world_with_board(12, 13);
        let right = TickInput::solo(Controls {
            move_right: true,
            ..Default::default()
        });
        for _ in 0..600 {
            world.update(1.0 / 60.0, &right);
            assert!(world.paddle.rect.right() <= 800.0);
        }
        assert_eq!(world.paddle.rect.right(), 800.0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = world_with_board(12, 13);
        let b = world_with_board(12, 13);
        assert_eq!(a.bricks, b.bricks);
    }
}
