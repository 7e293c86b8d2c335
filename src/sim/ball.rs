//! The ball entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::BoardSize;
use crate::consts::*;

/// A ball entity
///
/// Position is normalized to the board; velocity is in board-space units per
/// tick and gets divided by the board size on every integration step, so the
/// same velocity covers fewer normalized units on a larger board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    radius: f32,
    max_speed: f32,
    pos: Vec2,
    vel: Vec2,
    speed: f32,
}

impl Ball {
    pub fn new(radius: f32, max_speed: f32) -> Self {
        Self {
            radius,
            max_speed,
            pos: Vec2::splat(0.5),
            vel: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
            speed: BALL_START_SPEED,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Normalized position
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Place the ball at a normalized position
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn position_on_board(&self, board: BoardSize) -> Vec2 {
        board.to_board(self.pos)
    }

    /// Advance one tick
    ///
    /// A board with a zero dimension would divide by zero and poison the
    /// position with NaN for the rest of the session, so the step is skipped.
    pub fn integrate(&mut self, board: BoardSize) {
        if board.width == 0.0 || board.height == 0.0 {
            log::trace!("Skipping ball integration on degenerate board {board}");
            return;
        }
        let effective = self.vel / board.as_vec2();
        self.pos += effective * self.speed;
    }

    /// Speed up after a paddle hit
    pub fn on_paddle_hit(&mut self) {
        self.speed = (self.speed + BALL_SPEED_STEP).min(self.max_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball() -> Ball {
        Ball::new(16.0, BALL_MAX_SPEED)
    }

    #[test]
    fn test_initial_state() {
        let ball = ball();
        assert_eq!(ball.position(), Vec2::new(0.5, 0.5));
        assert_eq!(ball.velocity(), Vec2::new(0.1, 5.0));
        assert_eq!(ball.speed(), 1.0);
    }

    #[test]
    fn test_integration_scaling() {
        let mut ball = ball();
        ball.integrate(BoardSize::new(400.0, 800.0));

        let delta = ball.position() - Vec2::splat(0.5);
        assert!((delta.x - 0.00025).abs() < 1e-6);
        assert!((delta.y - 0.00625).abs() < 1e-6);
    }

    #[test]
    fn test_integration_uses_speed() {
        let mut ball = ball();
        for _ in 0..10 {
            ball.on_paddle_hit();
        }
        ball.set_velocity(Vec2::new(0.0, 10.0));
        ball.integrate(BoardSize::new(100.0, 100.0));
        // 10/100 * 2.0
        assert!((ball.position().y - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_integration_skipped_on_zero_board() {
        let mut ball = ball();
        ball.integrate(BoardSize::ZERO);
        ball.integrate(BoardSize::new(400.0, 0.0));
        ball.integrate(BoardSize::new(0.0, 800.0));
        assert_eq!(ball.position(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_position_on_board() {
        let mut ball = ball();
        ball.set_position(Vec2::new(0.25, 0.75));
        assert_eq!(
            ball.position_on_board(BoardSize::new(400.0, 800.0)),
            Vec2::new(100.0, 600.0)
        );
    }

    #[test]
    fn test_speed_caps_after_many_hits() {
        let mut ball = ball();
        for _ in 0..60 {
            ball.on_paddle_hit();
        }
        assert_eq!(ball.speed(), 6.0);
    }

    proptest! {
        #[test]
        fn prop_speed_monotonic_and_capped(hits in 0usize..200) {
            let mut ball = ball();
            let mut last = ball.speed();
            for _ in 0..hits {
                ball.on_paddle_hit();
                prop_assert!(ball.speed() >= last);
                prop_assert!(ball.speed() <= BALL_MAX_SPEED);
                last = ball.speed();
            }
        }

        #[test]
        fn prop_integration_stays_finite(
            w in prop_oneof![Just(0.0f32), 1.0f32..4000.0],
            h in prop_oneof![Just(0.0f32), 1.0f32..4000.0],
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
        ) {
            let mut ball = ball();
            ball.set_velocity(Vec2::new(vx, vy));
            for _ in 0..100 {
                ball.integrate(BoardSize::new(w, h));
            }
            prop_assert!(ball.position().is_finite());
        }
    }
}
