//! Paddles anchored to the top and bottom edges
//!
//! Both paddles share one data layout; the side only decides which edge the
//! board-space rectangle hangs from.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::circle_rect_collision;
use super::error::SimError;
use super::geometry::{BoardSize, Rect};

/// Which edge a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    Top,
    Bottom,
}

impl PaddleSide {
    /// Vertical center of a paddle on this side
    pub fn center_y(self, board: BoardSize, padding: f32, height: f32) -> f32 {
        match self {
            PaddleSide::Top => padding + height / 2.0,
            PaddleSide::Bottom => board.height - padding - height / 2.0,
        }
    }

    /// Top edge of the drawn paddle on this side
    pub fn draw_y(self, board: BoardSize, padding: f32, height: f32) -> f32 {
        match self {
            PaddleSide::Top => padding,
            PaddleSide::Bottom => board.height - height - padding,
        }
    }
}

/// A player paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    side: PaddleSide,
    width: f32,
    height: f32,
    /// Gap to the anchored edge (and the side margin when drawn)
    padding: f32,
    corner_radius: f32,
    /// Normalized horizontal center; not clamped
    pos: f32,
}

impl Paddle {
    pub fn new(side: PaddleSide, width: f32, height: f32, padding: f32) -> Self {
        Self {
            side,
            width,
            height,
            padding,
            corner_radius: height / 2.0,
            pos: 0.5,
        }
    }

    pub fn side(&self) -> PaddleSide {
        self.side
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn position(&self) -> f32 {
        self.pos
    }

    /// Set the normalized horizontal position (caller decides on clamping)
    pub fn set_position(&mut self, pos: f32) {
        self.pos = pos;
    }

    pub fn position_on_board(&self, board: BoardSize) -> Vec2 {
        Vec2::new(
            self.pos * board.width,
            self.side.center_y(board, self.padding, self.height),
        )
    }

    /// Collision rectangle, centered on the unclamped position
    pub fn bounds(&self, board: BoardSize) -> Rect {
        Rect::from_center(
            self.position_on_board(board),
            Vec2::new(self.width, self.height),
        )
    }

    /// Drawn rectangle
    ///
    /// The draw x keeps the paddle off the side margins, unlike `bounds`.
    /// The two can disagree near the edges and the collision box wins.
    pub fn draw_rect(&self, board: BoardSize) -> Rect {
        let min_x = self.padding;
        let max_x = (board.width - self.width - self.padding).max(min_x);
        let x = (self.pos * board.width - self.width / 2.0).clamp(min_x, max_x);
        let y = self.side.draw_y(board, self.padding, self.height);
        Rect::from_top_left(Vec2::new(x, y), Vec2::new(self.width, self.height))
    }

    pub fn detect_collision(&self, ball: &Ball, board: BoardSize) -> Result<bool, SimError> {
        if !board.is_established() {
            return Err(SimError::BoardSizeNotSet {
                width: board.width,
                height: board.height,
            });
        }

        Ok(circle_rect_collision(
            ball.position_on_board(board),
            ball.radius(),
            &self.bounds(board),
        ))
    }
}
