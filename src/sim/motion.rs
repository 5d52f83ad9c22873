//! Motion integration
//!
//! Plain Euler steps, one per frame, no sub-stepping. Paddles are clamped to
//! the field by repositioning; balls are only tested against the field edges
//! here and the games decide what an edge means.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::input::Controls;
use crate::settings::Field;

/// Axis a paddle is constrained to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// `position + velocity * dt`
#[inline]
pub fn integrate(position: Vec2, velocity: Vec2, dt: f32) -> Vec2 {
    position + velocity * dt
}

/// Advance a rectangle by its velocity
#[inline]
pub fn step(rect: &mut Rect, velocity: Vec2, dt: f32) {
    rect.center = integrate(rect.center, velocity, dt);
}

/// Keep `rect` inside `[0, extent]` along `axis` by moving its center
///
/// Never panics on a rect larger than the field; it pins to the low edge.
pub fn clamp_to_field(rect: &mut Rect, axis: Axis, extent: f32) {
    let (c, half) = match axis {
        Axis::Horizontal => (&mut rect.center.x, rect.half_extent.x),
        Axis::Vertical => (&mut rect.center.y, rect.half_extent.y),
    };
    *c = c.min(extent - half).max(half);
}

/// Move a paddle from held controls, then clamp it
///
/// Returns the velocity applied this tick (zero when idle or when opposing
/// directions are both held).
pub fn drive_paddle(
    rect: &mut Rect,
    controls: &Controls,
    axis: Axis,
    speed: f32,
    field: &Field,
    dt: f32,
) -> Vec2 {
    let (velocity, extent) = match axis {
        Axis::Horizontal => (Vec2::new(controls.horizontal() * speed, 0.0), field.width),
        Axis::Vertical => (Vec2::new(0.0, controls.vertical() * speed), field.height),
    };
    step(rect, velocity, dt);
    clamp_to_field(rect, axis, extent);
    velocity
}

/// Which field edges a point has strictly crossed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeCrossing {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeCrossing {
    pub fn of(point: Vec2, field: &Field) -> Self {
        Self {
            left: point.x < 0.0,
            right: point.x > field.width,
            top: point.y < 0.0,
            bottom: point.y > field.height,
        }
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    pub fn any(&self) -> bool {
        self.horizontal() || self.vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_euler() {
        let p = integrate(Vec2::new(10.0, 10.0), Vec2::new(60.0, -30.0), 0.5);
        assert_eq!(p, Vec2::new(40.0, -5.0));
    }

    #[test]
    fn test_clamp_right_edge_repositions_center() {
        let mut paddle = Rect::from_center_size(Vec2::new(790.0, 440.0), Vec2::new(50.0, 5.0));
        clamp_to_field(&mut paddle, Axis::Horizontal, 800.0);
        assert_eq!(paddle.center.x, 775.0);
        assert_eq!(paddle.right(), 800.0);
    }

    #[test]
    fn test_drive_paddle_clamps_top() {
        let field = Field::new(800.0, 450.0);
        let mut paddle = Rect::from_center_size(Vec2::new(5.0, 26.0), Vec2::new(5.0, 50.0));
        let up = Controls {
            move_up: true,
            ..Default::default()
        };
        let vel = drive_paddle(&mut paddle, &up, Axis::Vertical, 100.0, &field, 0.1);
        assert_eq!(vel, Vec2::new(0.0, -100.0));
        assert_eq!(paddle.top(), 0.0);
        assert_eq!(paddle.center.x, 5.0);
    }

    #[test]
    fn test_drive_paddle_opposing_keys_cancel() {
        let field = Field::new(800.0, 450.0);
        let mut paddle = Rect::from_center_size(Vec2::new(400.0, 440.0), Vec2::new(50.0, 5.0));
        let both = Controls {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        drive_paddle(&mut paddle, &both, Axis::Horizontal, 100.0, &field, 1.0 / 60.0);
        assert_eq!(paddle.center.x, 400.0);
    }

    #[test]
    fn test_edge_crossing_is_strict() {
        let field = Field::new(800.0, 450.0);
        assert!(!EdgeCrossing::of(Vec2::new(0.0, 450.0), &field).any());
        let e = EdgeCrossing::of(Vec2::new(-0.1, 451.0), &field);
        assert!(e.left && e.bottom && !e.right && !e.top);
    }
}
