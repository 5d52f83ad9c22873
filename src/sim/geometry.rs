//! Axis-aligned rectangle geometry
//!
//! Every shape in the games is an axis-aligned box stored as a center and a
//! half extent. Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (center + half extent)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    /// Half width / half height, both >= 0
    pub half_extent: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        debug_assert!(
            half_extent.x >= 0.0 && half_extent.y >= 0.0,
            "negative half extent {half_extent}"
        );
        Self {
            center,
            half_extent,
        }
    }

    /// Build from a center and a full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size / 2.0)
    }

    /// Build from a top-left corner and a full size
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left + size / 2.0, size / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extent * 2.0
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extent.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extent.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extent.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extent.y
    }

    /// Same rectangle moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            half_extent: self.half_extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::from_top_left(Vec2::new(16.0, 16.0), Vec2::new(64.0, 24.0));
        assert_eq!(r.center, Vec2::new(48.0, 28.0));
        assert_eq!(r.left(), 16.0);
        assert_eq!(r.right(), 80.0);
        assert_eq!(r.top(), 16.0);
        assert_eq!(r.bottom(), 40.0);
        assert_eq!(r.size(), Vec2::new(64.0, 24.0));
    }

    #[test]
    fn test_translated_keeps_extent() {
        let r = Rect::from_center_size(Vec2::ZERO, Vec2::splat(10.0));
        let moved = r.translated(Vec2::new(3.0, -4.0));
        assert_eq!(moved.center, Vec2::new(3.0, -4.0));
        assert_eq!(moved.half_extent, r.half_extent);
        assert_eq!(moved.min(), Vec2::new(-2.0, -9.0));
    }
}
