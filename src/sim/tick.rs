//! Per-frame simulation entry points
//!
//! Each world exposes the same two operations: `setup` (a constructor on the
//! concrete world) and [`Simulation::update`]. A frame is strictly: read
//! input, move, collide, update pools and game state. Rendering happens
//! after `update` returns and only reads `entities()` and `hud()`.

use serde::{Deserialize, Serialize};

use super::breakout::BreakoutWorld;
use super::input::{InputBinding, KeyState, TickInput};
use super::shooter::ShooterWorld;
use super::state::{Entity, GameEvent, GamePhase};
use super::volley::VolleyWorld;
use crate::error::Result;
use crate::settings::Settings;

/// Text-overlay data for the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// One score per paddle; empty for the shooter, which reports `kills`
    pub scores: Vec<u32>,
    pub lives: Option<u8>,
    pub kills: Option<u32>,
    pub phase: GamePhase,
}

/// A running game
pub trait Simulation {
    /// Advance by one frame. Never fails; terminal phases make it a no-op.
    fn update(&mut self, dt: f32, input: &TickInput);

    fn phase(&self) -> GamePhase;

    /// Snapshot of every entity, including inactive pool slots and dead bricks
    fn entities(&self) -> Vec<Entity>;

    fn hud(&self) -> Hud;

    /// What happened during the most recent `update`
    fn events(&self) -> &[GameEvent];

    /// Key bindings, one per player, for [`TickInput::poll`]
    fn bindings(&self) -> Vec<InputBinding>;
}

/// Which of the three games to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    Breakout,
    Volley,
    Shooter,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Breakout, GameKind::Volley, GameKind::Shooter];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Breakout => "breakout",
            GameKind::Volley => "volley",
            GameKind::Shooter => "shooter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakout" | "bricks" => Some(GameKind::Breakout),
            "volley" | "pong" => Some(GameKind::Volley),
            "shooter" | "invaders" => Some(GameKind::Shooter),
            _ => None,
        }
    }
}

/// Set up a fresh world of the given kind
pub fn setup(kind: GameKind, settings: &Settings) -> Result<Box<dyn Simulation>> {
    let field = settings.field;
    let sim: Box<dyn Simulation> = match kind {
        GameKind::Breakout => Box::new(BreakoutWorld::setup(&settings.breakout, field, settings.seed)?),
        GameKind::Volley => Box::new(VolleyWorld::setup(&settings.volley, field)?),
        GameKind::Shooter => Box::new(ShooterWorld::setup(&settings.shooter, field, settings.seed)?),
    };
    Ok(sim)
}

/// Advance one frame and log phase changes
pub fn tick<S: Simulation + ?Sized>(sim: &mut S, input: &TickInput, dt: f32) {
    let before = sim.phase();
    sim.update(dt, input);
    let after = sim.phase();
    if before != after {
        log::info!("Phase {:?} -> {:?}", before, after);
    }
}

/// Poll the key oracle with the world's own bindings, then advance one frame
pub fn tick_with_keys<S: Simulation + ?Sized>(sim: &mut S, keys: &impl KeyState, dt: f32) {
    let input = TickInput::poll(&sim.bindings(), keys);
    tick(sim, &input, dt);
}
