//! Board geometry primitives
//!
//! Points and vectors are `glam::Vec2`. Entities store normalized
//! coordinates and convert them to board-space with the current `BoardSize`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the playable interior in board-space units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: f32,
    pub height: f32,
}

impl BoardSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once a resize has given the board a positive area
    #[inline]
    pub fn is_established(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert a normalized point to board-space
    #[inline]
    pub fn to_board(&self, normalized: Vec2) -> Vec2 {
        normalized * self.as_vec2()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} x {:.1}", self.width, self.height)
    }
}

/// Axis-aligned rectangle in board-space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Closest point of the rectangle to `point` (the point itself if inside)
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_established() {
        assert!(!BoardSize::ZERO.is_established());
        assert!(!BoardSize::new(300.0, 0.0).is_established());
        assert!(BoardSize::new(300.0, 600.0).is_established());
    }

    #[test]
    fn test_to_board() {
        let board = BoardSize::new(400.0, 800.0);
        assert_eq!(board.to_board(Vec2::new(0.5, 0.25)), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_closest_point() {
        let rect = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
        assert_eq!(rect.left(), 80.0);
        assert_eq!(rect.bottom(), 60.0);

        // Inside stays put
        let inside = Vec2::new(90.0, 55.0);
        assert_eq!(rect.closest_point(inside), inside);

        // Outside a corner snaps to the corner
        assert_eq!(rect.closest_point(Vec2::new(0.0, 0.0)), Vec2::new(80.0, 40.0));

        // Outside an edge projects onto it
        assert_eq!(rect.closest_point(Vec2::new(100.0, 90.0)), Vec2::new(100.0, 60.0));
    }
}
