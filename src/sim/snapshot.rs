//! Debug snapshot for diagnostic overlays

use glam::Vec2;
use serde::Serialize;

use super::geometry::BoardSize;

/// Raw state at one instant, all positions in board-space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugSnapshot {
    pub board_size: BoardSize,
    pub ball_position: Vec2,
    pub ball_velocity: Vec2,
    pub ball_speed: f32,
    pub top_paddle_position: Vec2,
    pub bottom_paddle_position: Vec2,
    pub player_position: f32,
    pub score: u64,
}

impl DebugSnapshot {
    /// Multi-line overlay text, one field per line
    pub fn overlay_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board size: {}", self.board_size)?;
        writeln!(
            f,
            "Ball position: ({:.1}, {:.1})",
            self.ball_position.x, self.ball_position.y
        )?;
        writeln!(
            f,
            "Ball velocity: ({:.2}, {:.2})",
            self.ball_velocity.x, self.ball_velocity.y
        )?;
        writeln!(f, "Ball speed: {:.1}", self.ball_speed)?;
        writeln!(
            f,
            "Top paddle position: ({:.1}, {:.1})",
            self.top_paddle_position.x, self.top_paddle_position.y
        )?;
        writeln!(
            f,
            "Bottom paddle position: ({:.1}, {:.1})",
            self.bottom_paddle_position.x, self.bottom_paddle_position.y
        )?;
        writeln!(f, "Player position: {:.3}", self.player_position)?;
        write!(f, "Score: {}", self.score)
    }
}
