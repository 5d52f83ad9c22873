//! Arcade Sim entry point
//!
//! Headless driver: runs one game at the fixed frame delta with an autopilot
//! holding keys, and logs the HUD once per simulated second.
//!
//! Usage: `arcade-sim [breakout|volley|shooter] [seconds] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::collections::HashSet;

    use arcade_sim::Settings;
    use arcade_sim::consts::FRAME_DT;
    use arcade_sim::sim::{
        Entity, EntityKind, GameKind, Key, Simulation, setup, tick_with_keys,
    };

    /// Paddles stop chasing once within this many pixels of the target
    const DEADZONE: f32 = 4.0;
    const FRAMES_PER_SECOND: u32 = 60;

    pub struct Options {
        pub kind: GameKind,
        pub seconds: u32,
        pub settings: Settings,
    }

    pub fn parse_args() -> Result<Options, String> {
        let mut args = std::env::args().skip(1);
        let kind = match args.next() {
            Some(name) => GameKind::from_str(&name).ok_or(format!("unknown game '{name}'"))?,
            None => GameKind::Breakout,
        };
        let seconds = match args.next() {
            Some(s) => s.parse().map_err(|e| format!("bad seconds '{s}': {e}"))?,
            None => 30,
        };
        let settings = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                Settings::from_json(&json).map_err(|e| e.to_string())?
            }
            None => Settings::default(),
        };
        Ok(Options {
            kind,
            seconds,
            settings,
        })
    }

    /// Frames to simulate, capped instead of wrapping for huge durations
    fn frame_budget(seconds: u32) -> u32 {
        seconds.saturating_mul(FRAMES_PER_SECOND)
    }

    fn steer(held: &mut HashSet<Key>, current: f32, target: f32, less: Option<Key>, more: Option<Key>) {
        let key = if target < current - DEADZONE {
            less
        } else if target > current + DEADZONE {
            more
        } else {
            None
        };
        held.extend(key);
    }

    /// Keys a simple bot would hold this frame
    fn autopilot(kind: GameKind, sim: &dyn Simulation) -> HashSet<Key> {
        let entities = sim.entities();
        let bindings = sim.bindings();
        let paddles: Vec<&Entity> = entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::Paddle { .. }))
            .collect();
        let ball = entities.iter().find(|e| e.kind == EntityKind::Ball);
        let mut held = HashSet::new();

        match kind {
            GameKind::Breakout => {
                if let (Some(ball), Some(paddle), Some(b)) = (ball, paddles.first(), bindings.first()) {
                    steer(&mut held, paddle.rect.center.x, ball.rect.center.x, b.left, b.right);
                }
            }
            GameKind::Volley => {
                if let Some(ball) = ball {
                    for (paddle, b) in paddles.iter().zip(&bindings) {
                        steer(&mut held, paddle.rect.center.y, ball.rect.center.y, b.up, b.down);
                    }
                }
            }
            GameKind::Shooter => {
                let lowest = entities
                    .iter()
                    .filter(|e| matches!(e.kind, EntityKind::Enemy { .. }) && e.is_visible())
                    .max_by(|a, b| a.rect.center.y.total_cmp(&b.rect.center.y));
                if let (Some(ship), Some(b)) = (paddles.first(), bindings.first()) {
                    if let Some(enemy) = lowest {
                        steer(&mut held, ship.rect.center.x, enemy.rect.center.x, b.left, b.right);
                    }
                    held.extend(b.shoot);
                }
            }
        }
        held
    }

    pub fn run(options: Options) -> Result<(), String> {
        let Options {
            kind,
            seconds,
            settings,
        } = options;
        let mut sim = setup(kind, &settings).map_err(|e| e.to_string())?;
        log::info!("Running {} for {}s", kind.as_str(), seconds);

        let frames = frame_budget(seconds);
        for frame in 0..frames {
            let held = autopilot(kind, sim.as_ref());
            tick_with_keys(sim.as_mut(), &|k: Key| held.contains(&k), FRAME_DT);

            for event in sim.events() {
                log::debug!("frame {frame}: {event:?}");
            }
            if frame % FRAMES_PER_SECOND == FRAMES_PER_SECOND - 1 {
                log::info!("t={}s {:?}", (frame + 1) / FRAMES_PER_SECOND, sim.hud());
            }
            if sim.phase().is_terminal() {
                log::info!("Finished at frame {frame}");
                break;
            }
        }

        let hud = serde_json::to_string(&sim.hud()).map_err(|e| e.to_string())?;
        println!("{hud}");
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_frame_budget_saturates() {
            assert_eq!(frame_budget(30), 1800);
            assert_eq!(frame_budget(u32::MAX), u32::MAX);
        }

        #[test]
        fn test_autopilot_fires_in_shooter() {
            let sim = setup(GameKind::Shooter, &Settings::default()).unwrap();
            let held = autopilot(GameKind::Shooter, sim.as_ref());
            assert!(held.contains(&Key::Space));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arcade Sim (headless) starting...");

    let result = headless::parse_args().and_then(headless::run);
    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Frontends embed the library directly on the web
}
