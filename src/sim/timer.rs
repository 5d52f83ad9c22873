//! Countdown timers for fire rate and spawn cadence
//!
//! Both count down by `dt` each tick. They differ in who rewinds them:
//! [`Cooldown`] stays ready until the caller calls `reset`, [`Interval`]
//! rewinds itself the tick it fires.

use serde::{Deserialize, Serialize};

/// Countdown that reports ready on every tick at or below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    /// A cooldown that is ready on its first tick
    pub fn ready() -> Self {
        Self::default()
    }

    /// Count down and report whether the guarded action is allowed
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }

    pub fn reset(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Countdown that fires once and rewinds to `period`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    remaining: f32,
    period: f32,
}

impl Interval {
    /// Fires on the first tick, then every `period` seconds
    pub fn new(period: f32) -> Self {
        Self {
            remaining: 0.0,
            period,
        }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_stays_ready_until_reset() {
        let mut cd = Cooldown::ready();
        assert!(cd.tick(0.1));
        assert!(cd.tick(0.1));
        cd.reset(0.3);
        assert_eq!(cd.remaining(), 0.3);
        assert!(!cd.tick(0.1));
        assert!(!cd.tick(0.1));
        assert!(cd.tick(0.1 + 1e-3));
        assert!(cd.tick(0.1));
    }

    #[test]
    fn test_interval_rewinds_itself() {
        let mut iv = Interval::new(1.0);
        assert_eq!(iv.remaining(), 0.0);
        assert!(iv.tick(0.25));
        assert_eq!(iv.remaining(), 1.0);
        assert!(!iv.tick(0.25));
        assert!(!iv.tick(0.25));
        assert!(!iv.tick(0.25));
        assert!(iv.tick(0.25));
        assert!(!iv.tick(0.25));
    }
}
