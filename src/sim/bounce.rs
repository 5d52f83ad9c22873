//! Post-collision velocity response
//!
//! Walls and bricks reflect one component. The brick-breaker paddle steers
//! the ball by where it was struck and speeds it up on every hit.

use glam::Vec2;

use super::collision::Face;
use super::geometry::Rect;
use super::motion::Axis;

/// Negate the velocity component along `axis` (elastic wall bounce)
#[inline]
pub fn reflect_axis(velocity: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(-velocity.x, velocity.y),
        Axis::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}

/// Reflect off the struck face of an obstacle
///
/// Top/Bottom flip `y`, Left/Right flip `x`, and only when the ball is moving
/// into that face. A ball already heading away keeps its velocity.
pub fn reflect_off_face(velocity: Vec2, face: Face) -> Vec2 {
    let into_face = match face {
        Face::Top => velocity.y > 0.0,
        Face::Bottom => velocity.y < 0.0,
        Face::Left => velocity.x > 0.0,
        Face::Right => velocity.x < 0.0,
    };
    if !into_face {
        return velocity;
    }
    if face.is_vertical() {
        reflect_axis(velocity, Axis::Vertical)
    } else {
        reflect_axis(velocity, Axis::Horizontal)
    }
}

/// Brick-breaker paddle deflection
///
/// The horizontal component is `reference.x` scaled by the hit offset from
/// the paddle center (-1 at the left edge, +1 at the right), the vertical
/// component flips, and the result is rescaled to the incoming speed times
/// `boost`. There is no speed cap.
pub fn deflect_off_paddle(
    velocity: Vec2,
    ball: &Rect,
    paddle: &Rect,
    reference: Vec2,
    boost: f32,
) -> Vec2 {
    let speed = velocity.length();
    let offset = (ball.center.x - paddle.center.x) / paddle.half_extent.x;
    let steered = Vec2::new(reference.x * offset, -velocity.y);
    steered.normalize_or_zero() * speed * boost
}

/// Volley paddle return: horizontal component negated, nothing else changes
#[inline]
pub fn return_volley(velocity: Vec2) -> Vec2 {
    reflect_axis(velocity, Axis::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_reflect_off_top_flips_only_y() {
        let v = reflect_off_face(Vec2::new(30.0, 40.0), Face::Top);
        assert_eq!(v, Vec2::new(30.0, -40.0));
    }

    #[test]
    fn test_reflect_off_right_flips_only_x() {
        let v = reflect_off_face(Vec2::new(-30.0, 40.0), Face::Right);
        assert_eq!(v, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_reflect_ignores_receding_ball() {
        // Moving up while "hitting" the top face: already leaving
        let v = Vec2::new(30.0, -40.0);
        assert_eq!(reflect_off_face(v, Face::Top), v);
        assert_eq!(reflect_off_face(Vec2::new(10.0, 5.0), Face::Right), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_center_hit_goes_straight_up_faster() {
        let paddle = Rect::from_center_size(Vec2::new(400.0, 440.0), Vec2::new(50.0, 5.0));
        let ball = Rect::from_center_size(Vec2::new(400.0, 438.0), Vec2::splat(10.0));
        let v = Vec2::new(30.0, 40.0); // speed 50
        let out = deflect_off_paddle(v, &ball, &paddle, Vec2::new(50.0, -25.0), 1.1);
        assert!(out.x.abs() < EPS);
        assert!((out.y - (-55.0)).abs() < EPS);
    }

    #[test]
    fn test_edge_hit_angles_outward() {
        let paddle = Rect::from_center_size(Vec2::new(400.0, 440.0), Vec2::new(50.0, 5.0));
        let ball = Rect::from_center_size(Vec2::new(425.0, 438.0), Vec2::splat(10.0));
        let v = Vec2::new(0.0, 50.0);
        let out = deflect_off_paddle(v, &ball, &paddle, Vec2::new(50.0, -25.0), 1.1);
        // offset = +1 -> x = 50, y = -50 -> 45 degrees up-right
        assert!(out.x > 0.0 && out.y < 0.0);
        assert!((out.x + out.y).abs() < EPS);
        assert!((out.length() - 55.0).abs() < EPS);
    }

    #[test]
    fn test_volley_return_keeps_speed() {
        let v = return_volley(Vec2::new(-50.0, 25.0));
        assert_eq!(v, Vec2::new(50.0, 25.0));
    }
}
