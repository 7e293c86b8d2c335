//! The board frame

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::circle_frame_collision;
use super::error::SimError;
use super::geometry::BoardSize;

/// Static play-field boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    stroke_width: f32,
    corner_radius: f32,
}

impl Wall {
    pub fn new(stroke_width: f32, corner_radius: f32) -> Self {
        Self {
            stroke_width,
            corner_radius,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// True when the ball touches or crosses any of the four edges
    pub fn detect_collision(&self, ball: &Ball, board: BoardSize) -> Result<bool, SimError> {
        if !board.is_established() {
            return Err(SimError::BoardSizeNotSet {
                width: board.width,
                height: board.height,
            });
        }

        Ok(circle_frame_collision(
            ball.position_on_board(board),
            ball.radius(),
            board,
        ))
    }
}
