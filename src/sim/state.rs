//! Game state and session entities
//!
//! `GameState` owns the board size, the wall, the ball and both paddles.
//! Entities never hold a board size of their own; every geometry query gets
//! the authoritative one passed in.

use serde::Serialize;

use super::ball::Ball;
use super::geometry::BoardSize;
use super::paddle::{Paddle, PaddleSide};
use super::snapshot::DebugSnapshot;
use super::wall::Wall;
use crate::settings::GameConfig;

/// Complete state of one game session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Paddle hits so far
    pub(crate) score: u64,
    /// Normalized pointer x (bottom paddle follows it, top paddle mirrors it)
    pub(crate) player_position: f32,
    /// Playable interior, set on every tick
    pub(crate) board: BoardSize,
    pub(crate) wall: Wall,
    pub(crate) ball: Ball,
    pub(crate) top_paddle: Paddle,
    pub(crate) bottom_paddle: Paddle,
}

impl GameState {
    /// Create a new session from validated geometry
    pub fn new(config: &GameConfig) -> Self {
        log::info!(
            "New game: wall {}/{}, ball {}, paddle {}x{} (padding {})",
            config.wall_width,
            config.wall_corner_radius,
            config.ball_diameter,
            config.paddle_width,
            config.paddle_height,
            config.paddle_padding,
        );

        let paddle = |side| {
            Paddle::new(
                side,
                config.paddle_width,
                config.paddle_height,
                config.paddle_padding,
            )
        };

        Self {
            score: 0,
            player_position: 0.5,
            board: BoardSize::ZERO,
            wall: Wall::new(config.wall_width, config.wall_corner_radius),
            ball: Ball::new(config.ball_diameter / 2.0, config.ball_max_speed),
            top_paddle: paddle(PaddleSide::Top),
            bottom_paddle: paddle(PaddleSide::Bottom),
        }
    }

    /// Set the board from the host's drawable size
    ///
    /// The playable interior is the frame minus the wall stroke on each side.
    pub fn resize(&mut self, frame_width: f32, frame_height: f32) {
        let inset = self.wall.stroke_width() * 2.0;
        self.set_board_size(BoardSize::new(
            (frame_width - inset).max(0.0),
            (frame_height - inset).max(0.0),
        ));
    }

    /// Set the playable interior directly
    pub fn set_board_size(&mut self, board: BoardSize) {
        self.board = board;
    }

    /// Apply a pointer-move sample (board-space x)
    ///
    /// Last sample wins. The result is not clamped, so a pointer outside the
    /// canvas pushes the paddles past the edges.
    pub fn report_pointer_x(&mut self, x: f32) {
        if self.board.width == 0.0 {
            log::debug!("Ignoring pointer x={x} before the board has a width");
            return;
        }

        self.player_position = x / self.board.width;
        self.top_paddle.set_position(1.0 - self.player_position);
        self.bottom_paddle.set_position(self.player_position);
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn player_position(&self) -> f32 {
        self.player_position
    }

    pub fn board_size(&self) -> BoardSize {
        self.board
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Mutable ball access for scenario setup
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn top_paddle(&self) -> &Paddle {
        &self.top_paddle
    }

    pub fn bottom_paddle(&self) -> &Paddle {
        &self.bottom_paddle
    }

    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        match side {
            PaddleSide::Top => &self.top_paddle,
            PaddleSide::Bottom => &self.bottom_paddle,
        }
    }

    /// Read-only copy of the raw state for diagnostics
    pub fn snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            board_size: self.board,
            ball_position: self.ball.position_on_board(self.board),
            ball_velocity: self.ball.velocity(),
            ball_speed: self.ball.speed(),
            top_paddle_position: self.top_paddle.position_on_board(self.board),
            bottom_paddle_position: self.bottom_paddle.position_on_board(self.board),
            player_position: self.player_position,
            score: self.score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
