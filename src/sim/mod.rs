//! Simulation module
//!
//! All gameplay logic lives here. Everything is single-threaded and pure
//! with respect to I/O:
//! - One update per rendered frame, driven by the caller's frame delta
//! - Seeded RNG only
//! - Stable iteration order (grid order for bricks, slot order for pools)
//! - No rendering, windowing or keyboard dependencies

pub mod bounce;
pub mod breakout;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod pool;
pub mod shooter;
pub mod state;
pub mod tick;
pub mod timer;
pub mod volley;

pub use breakout::BreakoutWorld;
pub use collision::{Face, first_hit, overlaps, resolve_face};
pub use geometry::Rect;
pub use input::{Action, Controls, InputBinding, Key, KeyState, TickInput};
pub use pool::{Handle, Pool, Slot};
pub use shooter::ShooterWorld;
pub use state::{Entity, EntityKind, GameEvent, GamePhase};
pub use tick::{GameKind, Hud, Simulation, setup, tick, tick_with_keys};
pub use timer::{Cooldown, Interval};
pub use volley::VolleyWorld;
