//! Collision detection for axis-aligned boxes
//!
//! Detection is pure: nothing here mutates entities. Callers decide what a
//! hit means (destroy a brick, flip a velocity, release a pool slot).

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Side of a rectangle through which a collision occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Left,
    Top,
    Right,
    Bottom,
}

impl Face {
    /// Top and Bottom hits reflect the vertical velocity component
    pub fn is_vertical(self) -> bool {
        matches!(self, Face::Top | Face::Bottom)
    }
}

/// First obstacle hit during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<K> {
    pub key: K,
    pub face: Face,
}

/// AABB overlap test. Bounds are inclusive: touching edges count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let hit_x = a.right() >= b.left() && b.right() >= a.left();
    let hit_y = a.bottom() >= b.top() && b.bottom() >= a.top();
    hit_x && hit_y
}

/// Classify which face of `stationary` the `moving` box struck
///
/// Assumes the two boxes overlap. The axis with the larger shared span
/// decides: a wide, shallow overlap is a Top/Bottom hit, a tall, narrow one
/// is Left/Right. Equal spans resolve to Left/Right.
pub fn resolve_face(moving: &Rect, stationary: &Rect) -> Face {
    let (a_min, a_max) = (moving.min(), moving.max());
    let (b_min, b_max) = (stationary.min(), stationary.max());
    let x_overlap = a_max.x.min(b_max.x) - a_min.x.max(b_min.x);
    let y_overlap = a_max.y.min(b_max.y) - a_min.y.max(b_min.y);

    if x_overlap > y_overlap {
        if moving.center.y > stationary.center.y {
            Face::Bottom
        } else {
            Face::Top
        }
    } else if moving.center.x > stationary.center.x {
        Face::Right
    } else {
        Face::Left
    }
}

/// Scan obstacles in order and stop at the first overlap
///
/// At most one obstacle is reported per call, even when `moving` overlaps
/// several of them.
pub fn first_hit<K, I>(moving: &Rect, obstacles: I) -> Option<Hit<K>>
where
    I: IntoIterator<Item = (K, Rect)>,
{
    obstacles
        .into_iter()
        .find(|(_, rect)| overlaps(moving, rect))
        .map(|(key, rect)| Hit {
            key,
            face: resolve_face(moving, &rect),
        })
}

/// Brick-breaker paddle contact
///
/// The ball touches once its center has dropped to the paddle's top edge and
/// its left edge lies within the paddle's horizontal span. Only the upper
/// half of the ball counts, so this is not a full box overlap.
pub fn ball_touches_floor_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.center.y >= paddle.top() && ball.left() >= paddle.left() && ball.left() <= paddle.right()
}

/// Volley paddle contact
///
/// The ball's center must lie in the band starting at the paddle's center
/// and extending one full paddle width toward +x, and within the paddle's
/// vertical span.
pub fn ball_touches_side_paddle(ball: &Rect, paddle: &Rect) -> bool {
    let c = ball.center;
    let in_x = c.x >= paddle.center.x && c.x <= paddle.center.x + paddle.size().x;
    let in_y = c.y >= paddle.top() && c.y <= paddle.bottom();
    in_x && in_y
}
