//! Input snapshot for a single tick
//!
//! The simulation never polls a keyboard. A frontend answers "is this key
//! held?" through [`KeyState`], and [`TickInput::poll`] turns each paddle's
//! [`InputBinding`] into logical [`Controls`].

use serde::{Deserialize, Serialize};

/// Physical keys the default bindings use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    I,
    K,
    Left,
    Right,
    Up,
    Down,
    Space,
}

/// Logical actions a paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Shoot,
}

/// Key-held oracle supplied by the frontend
pub trait KeyState {
    fn is_down(&self, key: Key) -> bool;
}

impl<F: Fn(Key) -> bool> KeyState for F {
    fn is_down(&self, key: Key) -> bool {
        self(key)
    }
}

/// Which key drives each action (unbound actions are never held)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    pub left: Option<Key>,
    pub right: Option<Key>,
    pub up: Option<Key>,
    pub down: Option<Key>,
    pub shoot: Option<Key>,
}

impl InputBinding {
    pub fn horizontal(left: Key, right: Key) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            ..Default::default()
        }
    }

    pub fn vertical(up: Key, down: Key) -> Self {
        Self {
            up: Some(up),
            down: Some(down),
            ..Default::default()
        }
    }

    pub fn with_shoot(mut self, key: Key) -> Self {
        self.shoot = Some(key);
        self
    }

    pub fn key_for(&self, action: Action) -> Option<Key> {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::MoveUp => self.up,
            Action::MoveDown => self.down,
            Action::Shoot => self.shoot,
        }
    }

    /// Resolve this binding against the oracle
    pub fn read(&self, keys: &impl KeyState) -> Controls {
        let held = |action| self.key_for(action).is_some_and(|k| keys.is_down(k));
        Controls {
            move_left: held(Action::MoveLeft),
            move_right: held(Action::MoveRight),
            move_up: held(Action::MoveUp),
            move_down: held(Action::MoveDown),
            shoot: held(Action::Shoot),
        }
    }
}

/// Logical actions held by one player this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub shoot: bool,
}

impl Controls {
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::MoveUp => self.move_up,
            Action::MoveDown => self.move_down,
            Action::Shoot => self.shoot,
        }
    }

    /// -1, 0 or +1 along x
    pub fn horizontal(&self) -> f32 {
        self.axis(Action::MoveLeft, Action::MoveRight)
    }

    /// -1, 0 or +1 along y (screen y grows downward)
    pub fn vertical(&self) -> f32 {
        self.axis(Action::MoveUp, Action::MoveDown)
    }

    fn axis(&self, negative: Action, positive: Action) -> f32 {
        self.is_held(positive) as i8 as f32 - self.is_held(negative) as i8 as f32
    }
}

/// Input commands for a single tick, one entry per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub players: [Controls; 2],
}

impl TickInput {
    /// Single-player input
    pub fn solo(controls: Controls) -> Self {
        Self {
            players: [controls, Controls::default()],
        }
    }

    pub fn pair(first: Controls, second: Controls) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// Poll the oracle for up to two bindings
    pub fn poll(bindings: &[InputBinding], keys: &impl KeyState) -> Self {
        let mut input = Self::default();
        for (slot, binding) in input.players.iter_mut().zip(bindings) {
            *slot = binding.read(keys);
        }
        input
    }

    pub fn player(&self, index: usize) -> Controls {
        self.players.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_maps_keys_to_actions() {
        let bindings = [
            InputBinding::vertical(Key::W, Key::S),
            InputBinding::vertical(Key::I, Key::K),
        ];
        let keys = |k: Key| matches!(k, Key::W | Key::K);
        let input = TickInput::poll(&bindings, &keys);

        assert!(input.players[0].move_up);
        assert!(!input.players[0].move_down);
        assert!(input.players[1].move_down);
        assert_eq!(input.players[0].vertical(), -1.0);
        assert_eq!(input.players[1].vertical(), 1.0);
    }

    #[test]
    fn test_unbound_action_never_held() {
        let binding = InputBinding::horizontal(Key::A, Key::D);
        let controls = binding.read(&|_: Key| true);
        assert!(controls.move_left && controls.move_right);
        assert!(!controls.shoot);
        assert_eq!(controls.horizontal(), 0.0);
    }

    #[test]
    fn test_arrow_binding_from_json() {
        let binding: InputBinding =
            serde_json::from_str(r#"{ "left": "Left", "right": "Right", "up": "Up", "down": "Down" }"#)
                .expect("valid binding");
        assert_eq!(binding.key_for(Action::MoveUp), Some(Key::Up));
        assert_eq!(binding.key_for(Action::Shoot), None);

        let controls = binding.read(&|k: Key| matches!(k, Key::Right | Key::Down));
        assert!(controls.is_held(Action::MoveRight));
        assert!(!controls.is_held(Action::MoveLeft));
        assert_eq!(controls.horizontal(), 1.0);
        assert_eq!(controls.vertical(), 1.0);
    }

    #[test]
    fn test_missing_player_defaults_to_idle() {
        let input = TickInput::default();
        assert_eq!(input.player(5), Controls::default());
    }
}
