//! Vertical shooter world
//!
//! The ship slides along the bottom edge and fires bullets upward from a
//! fixed-size pool. Enemies drop in from above on a spawn timer; an enemy
//! that falls off the bottom is recycled to a new column instead of being
//! freed. Reaching the kill target wins, running out of lives loses, and
//! either outcome freezes the world.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{first_hit, overlaps};
use super::geometry::Rect;
use super::input::{InputBinding, TickInput};
use super::motion::{Axis, drive_paddle, step};
use super::pool::{Handle, Pool};
use super::state::{Color, Entity, EntityKind, GameEvent, GamePhase, Paddle, Projectile};
use super::tick::{Hud, Simulation};
use super::timer::{Cooldown, Interval};
use crate::consts::ENEMY_SPAWN_Y;
use crate::error::Result;
use crate::settings::{Field, ShooterSettings};

/// Distance from the bottom edge to the ship's spawn point
const SHIP_LIFT: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct ShooterWorld {
    settings: ShooterSettings,
    field: Field,
    rng: Pcg32,
    pub ship: Paddle,
    pub bullets: Pool<Projectile>,
    pub enemies: Pool<Projectile>,
    fire_cooldown: Cooldown,
    spawn_timer: Interval,
    enemies_to_spawn: u32,
    kills: u32,
    lives: u8,
    phase: GamePhase,
    events: Vec<GameEvent>,
}

impl ShooterWorld {
    pub fn setup(settings: &ShooterSettings, field: Field, seed: u64) -> Result<Self> {
        settings.validate(&field)?;

        let bullet_vel = Vec2::new(0.0, -settings.bullet_speed);
        let bullets = Pool::new("bullets", settings.max_bullets, |_| {
            Projectile::new(settings.bullet_size, bullet_vel, Color::Orange)
        })?;
        let enemy_vel = Vec2::new(0.0, settings.enemy_speed);
        let enemies = Pool::new("enemies", settings.max_enemies, |_| {
            Projectile::new(settings.enemy_size, enemy_vel, Color::Blue)
        })?;

        let spawn = Self::ship_spawn(&field);
        let world = Self {
            settings: settings.clone(),
            field,
            rng: Pcg32::seed_from_u64(seed),
            ship: Paddle::new(
                Rect::from_center_size(spawn, settings.ship_size),
                settings.ship_speed,
                settings.binding,
            ),
            bullets,
            enemies,
            fire_cooldown: Cooldown::ready(),
            spawn_timer: Interval::new(settings.spawn_interval),
            enemies_to_spawn: settings.enemies_per_level,
            kills: 0,
            lives: settings.lives,
            phase: GamePhase::Playing,
            events: Vec::new(),
        };
        log::info!(
            "Shooter ready: {} enemies, {} lives, pools {}/{}",
            settings.enemies_per_level,
            settings.lives,
            settings.max_bullets,
            settings.max_enemies
        );
        Ok(world)
    }

    fn ship_spawn(field: &Field) -> Vec2 {
        Vec2::new(field.width / 2.0, field.height - SHIP_LIFT)
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn enemies_to_spawn(&self) -> u32 {
        self.enemies_to_spawn
    }

    /// Random whole-pixel column across the field, just above the top edge
    fn random_drop_point(&mut self) -> Vec2 {
        let columns = (self.field.width as u32).max(1);
        Vec2::new(self.rng.random_range(0..columns) as f32, ENEMY_SPAWN_Y)
    }

    fn enter(&mut self, phase: GamePhase) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = phase;
        match phase {
            GamePhase::Won => {
                self.events.push(GameEvent::Won);
                log::info!("All {} enemies destroyed, you won", self.kills);
            }
            GamePhase::GameOver => {
                self.events.push(GameEvent::GameOver);
                log::info!("Out of lives after {} kills", self.kills);
            }
            GamePhase::Playing => {}
        }
    }

    fn update_ship(&mut self, input: &TickInput, dt: f32) {
        let controls = input.player(0);
        self.ship.vel = drive_paddle(
            &mut self.ship.rect,
            &controls,
            Axis::Horizontal,
            self.ship.speed,
            &self.field,
            dt,
        );

        // The cooldown keeps counting even when not firing
        if self.fire_cooldown.tick(dt) && controls.shoot {
            match self.bullets.acquire() {
                Some(handle) => {
                    self.fire_cooldown.reset(self.settings.bullet_cooldown);
                    let ship = self.ship.rect;
                    self.bullets[handle].rect.center =
                        Vec2::new(ship.center.x, ship.center.y + ship.half_extent.y / 2.0);
                    self.events.push(GameEvent::BulletFired);
                }
                None => log::trace!("Bullet pool exhausted, shot dropped"),
            }
        }
    }

    fn update_bullets(&mut self, dt: f32) {
        let mut spent = Vec::new();
        for (handle, bullet) in self.bullets.iter_active_mut() {
            step(&mut bullet.rect, bullet.vel, dt);
            if bullet.rect.bottom() <= 0.0 {
                spent.push(handle);
            }
        }
        for handle in spent {
            self.bullets.release(handle);
        }
    }

    /// Move one enemy and resolve its collisions
    fn update_enemy(&mut self, handle: Handle, dt: f32) {
        let enemy = &mut self.enemies[handle];
        step(&mut enemy.rect, enemy.vel, dt);

        if enemy.rect.top() >= self.field.height {
            let drop = self.random_drop_point();
            self.enemies[handle].rect.center = drop;
            return;
        }

        let enemy_rect = self.enemies[handle].rect;
        let shot = first_hit(
            &enemy_rect,
            self.bullets.iter_active().map(|(h, b)| (h, b.rect)),
        );
        if let Some(hit) = shot {
            self.bullets.release(hit.key);
            self.enemies.release(handle);
            self.kills += 1;
            self.events.push(GameEvent::EnemyKilled { kills: self.kills });
            if self.kills >= self.settings.enemies_per_level {
                self.enter(GamePhase::Won);
            }
            return;
        }

        if overlaps(&self.ship.rect, &enemy_rect) {
            self.enemies.release(handle);
            self.ship.rect.center = Self::ship_spawn(&self.field);
            self.lives = self.lives.saturating_sub(1);
            self.events.push(GameEvent::PlayerHit { lives: self.lives });
            log::debug!("Ship hit, {} lives left", self.lives);
            if self.lives == 0 {
                self.enter(GamePhase::GameOver);
            }
        }
    }

    fn update_spawns(&mut self, dt: f32) {
        // The interval rewinds on every expiry, whether or not anything spawns
        let can_spawn = self.spawn_timer.tick(dt);
        if !can_spawn || self.enemies_to_spawn == 0 {
            return;
        }
        match self.enemies.acquire() {
            Some(handle) => {
                self.enemies_to_spawn -= 1;
                let drop = self.random_drop_point();
                self.enemies[handle].rect.center = drop;
                self.events.push(GameEvent::EnemySpawned);
            }
            None => log::trace!("Enemy pool exhausted, spawn dropped"),
        }
    }
}

impl Simulation for ShooterWorld {
    fn update(&mut self, dt: f32, input: &TickInput) {
        self.events.clear();
        if self.phase.is_terminal() {
            return;
        }

        self.update_ship(input, dt);
        self.update_bullets(dt);

        for handle in self.enemies.active_handles() {
            self.update_enemy(handle, dt);
            if self.phase.is_terminal() {
                return;
            }
        }

        self.update_spawns(dt);
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn entities(&self) -> Vec<Entity> {
        let mut out = Vec::with_capacity(1 + self.bullets.capacity() + self.enemies.capacity());
        out.push(Entity {
            kind: EntityKind::Paddle {
                score: self.ship.score,
            },
            rect: self.ship.rect,
            vel: self.ship.vel,
            color: Color::Black,
        });
        out.extend(self.bullets.iter().map(|b| Entity {
            kind: EntityKind::Bullet { active: b.active },
            rect: b.rect,
            vel: b.vel,
            color: b.color,
        }));
        out.extend(self.enemies.iter().map(|e| Entity {
            kind: EntityKind::Enemy { active: e.active },
            rect: e.rect,
            vel: e.vel,
            color: e.color,
        }));
        out
    }

    fn hud(&self) -> Hud {
        Hud {
            scores: Vec::new(),
            lives: Some(self.lives),
            kills: Some(self.kills),
            phase: self.phase,
        }
    }

    fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn bindings(&self) -> Vec<InputBinding> {
        vec![self.ship.binding]
    }
}
