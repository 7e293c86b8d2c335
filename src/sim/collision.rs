//! Collision detection and response for the rectangular board
//!
//! Two tests cover everything on the field: a ball against a paddle's
//! axis-aligned box, and a ball against the inside of the board frame.

use glam::Vec2;

use super::geometry::{BoardSize, Rect};
use crate::consts::{PADDLE_ANGLE_DIVISOR, PADDLE_MAX_ANGLE};

/// Circle vs axis-aligned rectangle
///
/// Clamps the circle center into the rectangle to find the nearest point,
/// then compares the distance to that point against the radius. Tangent
/// contact (distance == radius) is not a hit.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance(closest) < radius
}

/// Circle vs the inside of the board frame
///
/// Touching an edge counts as a hit on all four sides.
pub fn circle_frame_collision(center: Vec2, radius: f32, board: BoardSize) -> bool {
    center.x - radius <= 0.0
        || center.x + radius >= board.width
        || center.y - radius <= 0.0
        || center.y + radius >= board.height
}

/// Velocity after a paddle hit
///
/// The horizontal component is replaced by an angle proportional to how far
/// off-center the ball struck (45 at the paddle's outer reach, scaled down by
/// 10); the vertical component flips sign.
pub fn paddle_deflection(
    ball_center_x: f32,
    paddle_center_x: f32,
    paddle_width: f32,
    ball_radius: f32,
    velocity: Vec2,
) -> Vec2 {
    let distance = ball_center_x - paddle_center_x;
    let max_distance = paddle_width / 2.0 + ball_radius;
    let angle = (distance / max_distance) * PADDLE_MAX_ANGLE;
    Vec2::new(angle / PADDLE_ANGLE_DIVISOR, -velocity.y)
}

/// Reflect only the horizontal component (wall response)
#[inline]
pub fn reflect_horizontal(velocity: Vec2) -> Vec2 {
    Vec2::new(-velocity.x, velocity.y)
}
