//! Per-tick simulation step
//!
//! One tick runs a fixed sequence: resize, collision resolution, then a
//! single integration step. Motion is tied to the tick cadence, not to
//! wall-clock time.

use serde::Serialize;

use super::collision::{paddle_deflection, reflect_horizontal};
use super::error::SimError;
use super::paddle::PaddleSide;
use super::state::GameState;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// The ball struck a paddle and was redirected
    PaddleHit { side: PaddleSide },
    /// The ball touched the frame; horizontal velocity was reflected
    WallHit,
    /// Score after a tick with at least one paddle hit
    Scored { score: u64 },
}

/// Advance the game by one tick
///
/// `frame_width`/`frame_height` are the host's drawable size; the playable
/// board is that minus the wall stroke. Fails without touching velocity,
/// speed or score when the board has no area.
pub fn tick(
    state: &mut GameState,
    frame_width: f32,
    frame_height: f32,
) -> Result<Vec<GameEvent>, SimError> {
    state.resize(frame_width, frame_height);

    let events = resolve_collisions(state)?;

    state.ball.integrate(state.board);

    Ok(events)
}

/// Test and respond to collisions in a fixed order
///
/// Top paddle, bottom paddle, then the wall. Each response overwrites the
/// velocity left by the previous one. A paddle hit (from either side) scores
/// once and speeds the ball up once; a wall hit alone does neither.
pub fn resolve_collisions(state: &mut GameState) -> Result<Vec<GameEvent>, SimError> {
    let board = state.board;
    let mut events = Vec::new();
    let mut paddle_collision = false;

    for side in [PaddleSide::Top, PaddleSide::Bottom] {
        let paddle = state.paddle(side);
        if !paddle.detect_collision(&state.ball, board)? {
            continue;
        }

        let ball_center = state.ball.position_on_board(board);
        let paddle_center = paddle.position_on_board(board);
        let velocity = paddle_deflection(
            ball_center.x,
            paddle_center.x,
            paddle.width(),
            state.ball.radius(),
            state.ball.velocity(),
        );
        state.ball.set_velocity(velocity);

        log::debug!(
            "{side:?} paddle hit at x offset {:.1}, new velocity ({:.2}, {:.2})",
            ball_center.x - paddle_center.x,
            velocity.x,
            velocity.y
        );
        events.push(GameEvent::PaddleHit { side });
        paddle_collision = true;
    }

    if state.wall.detect_collision(&state.ball, board)? {
        let velocity = reflect_horizontal(state.ball.velocity());
        state.ball.set_velocity(velocity);
        log::trace!("Wall hit, new velocity ({:.2}, {:.2})", velocity.x, velocity.y);
        events.push(GameEvent::WallHit);
    }

    if paddle_collision {
        state.ball.on_paddle_hit();
        state.score += 1;
        log::debug!("Score {} (ball speed {:.1})", state.score, state.ball.speed());
        events.push(GameEvent::Scored { score: state.score });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::{BoardSize, SimError};
    use glam::Vec2;

    /// Frame that yields a 300x600 board with the default 4-unit wall
    const FRAME: (f32, f32) = (308.0, 608.0);

    fn state() -> GameState {
        GameState::new(&GameConfig::default())
    }

    #[test]
    fn test_tick_before_board_fails() {
        let mut state = state();
        let err = tick(&mut state, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            SimError::BoardSizeNotSet {
                width: 0.0,
                height: 0.0
            }
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.ball().velocity(), Vec2::new(0.1, 5.0));
        assert_eq!(state.ball().position(), Vec2::splat(0.5));
    }

    #[test]
    fn test_resolve_without_resize_fails() {
        let mut state = state();
        assert!(resolve_collisions(&mut state).is_err());
    }

    #[test]
    fn test_free_flight_moves_ball() {
        let mut state = state();
        let events = tick(&mut state, FRAME.0, FRAME.1).unwrap();
        assert!(events.is_empty());
        assert_eq!(state.board_size(), BoardSize::new(300.0, 600.0));

        let moved = state.ball().position_on_board(state.board_size());
        assert!((moved.x - 150.1).abs() < 1e-3);
        assert!((moved.y - 305.0).abs() < 1e-3);
    }

    #[test]
    fn test_wall_hit_does_not_score() {
        let mut state = state();
        state.ball_mut().set_position(Vec2::new(10.0 / 300.0, 0.5));
        state.ball_mut().set_velocity(Vec2::new(-3.0, 0.5));

        let events = tick(&mut state, FRAME.0, FRAME.1).unwrap();
        assert_eq!(events, vec![GameEvent::WallHit]);
        assert_eq!(state.ball().velocity(), Vec2::new(3.0, 0.5));
        assert_eq!(state.score(), 0);
        assert_eq!(state.ball().speed(), 1.0);
    }

    #[test]
    fn test_top_paddle_center_hit() {
        let mut state = state();
        // Top paddle spans y 16..48 on a 600 board
        state.ball_mut().set_position(Vec2::new(0.5, 56.0 / 600.0));
        state.ball_mut().set_velocity(Vec2::new(1.5, -5.0));

        let events = tick(&mut state, FRAME.0, FRAME.1).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::PaddleHit {
                    side: PaddleSide::Top
                },
                GameEvent::Scored { score: 1 },
            ]
        );
        assert_eq!(state.ball().velocity(), Vec2::new(0.0, 5.0));
        assert!((state.ball().speed() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_and_wall_same_tick_scores_once() {
        let mut state = state();
        state.resize(FRAME.0, FRAME.1);
        // Pointer at the left edge: bottom paddle centered on x=0
        state.report_pointer_x(0.0);
        state.ball_mut().set_position(Vec2::new(10.0 / 300.0, 570.0 / 600.0));

        let events = tick(&mut state, FRAME.0, FRAME.1).unwrap();
        assert!(events.contains(&GameEvent::PaddleHit {
            side: PaddleSide::Bottom
        }));
        assert!(events.contains(&GameEvent::WallHit));
        assert_eq!(state.score(), 1);

        // Deflected right (positive x offset), then the wall flips it back
        let v = state.ball().velocity();
        assert!(v.x < 0.0);
        assert_eq!(v.y, -5.0);
    }

    #[test]
    fn test_bottom_paddle_scenario() {
        let mut state = state();
        state.ball_mut().set_position(Vec2::new(0.5, 0.95));
        let start_vy = state.ball().velocity().y;
        assert!(start_vy > 0.0);

        let mut hit = false;
        for _ in 0..10 {
            let events = tick(&mut state, FRAME.0, FRAME.1).unwrap();
            if events.contains(&GameEvent::PaddleHit {
                side: PaddleSide::Bottom,
            }) {
                hit = true;
                break;
            }
        }

        assert!(hit);
        assert_eq!(state.score(), 1);
        assert!(state.ball().velocity().y < 0.0);
        assert_eq!(state.ball().velocity().x, 0.0);
    }

    #[test]
    fn test_approach_then_bounce() {
        let mut state = state();
        // 40 units above the bottom paddle's collision reach
        state.ball_mut().set_position(Vec2::new(0.5, 0.85));
        state.ball_mut().set_velocity(Vec2::new(0.0, 5.0));

        let mut ticks = 0;
        while state.score() == 0 {
            tick(&mut state, FRAME.0, FRAME.1).unwrap();
            ticks += 1;
            assert!(ticks < 100, "ball never reached the paddle");
        }

        assert!(ticks > 1);
        assert!(state.ball().velocity().y < 0.0);

        // Moving away now, no further scoring for a while
        let score = state.score();
        for _ in 0..20 {
            tick(&mut state, FRAME.0, FRAME.1).unwrap();
        }
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_tick_cadence_on_resized_board() {
        let mut state = state();
        tick(&mut state, 408.0, 808.0).unwrap();

        let delta = state.ball().position() - Vec2::splat(0.5);
        assert!((delta.x - 0.1 / 400.0).abs() < 1e-6);
        assert!((delta.y - 5.0 / 800.0).abs() < 1e-6);
    }
}
