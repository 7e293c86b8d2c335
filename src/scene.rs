//! Draw list for the host's rendering surface
//!
//! The simulation works in board-space (the interior inside the wall
//! stroke). A `Scene` shifts everything into canvas-space by the wall width
//! so the host can draw the shapes as-is.

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// Shape colors
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const DEBUG: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Width used for debug outlines
pub const HAIRLINE: f32 = 1.0;
/// Arm length of a debug center cross
pub const CENTER_INDICATOR_SIZE: f32 = 20.0;
const CENTER_INDICATOR_STROKE: f32 = 2.0;

/// A drawable primitive in canvas-space
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    RoundRect {
        rect: Rect,
        corner_radius: f32,
        color: [f32; 4],
    },
    /// Outline centered on the rectangle's edges
    RoundRectStroke {
        rect: Rect,
        corner_radius: f32,
        stroke_width: f32,
        color: [f32; 4],
    },
    Line {
        start: Vec2,
        end: Vec2,
        width: f32,
        color: [f32; 4],
    },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    /// Centered score label
    pub score_text: String,
}

impl Scene {
    /// Build the draw list from the current state
    pub fn build(state: &GameState, debug: bool) -> Self {
        let board = state.board_size();
        let wall = state.wall();
        let stroke = wall.stroke_width();
        let origin = Vec2::splat(stroke);
        let mut shapes = Vec::with_capacity(if debug { 16 } else { 4 });

        // Wall stroke sits just outside the board
        let frame = Rect::from_top_left(
            Vec2::splat(stroke / 2.0),
            board.as_vec2() + Vec2::splat(stroke),
        );
        shapes.push(Shape::RoundRectStroke {
            rect: frame,
            corner_radius: wall.corner_radius(),
            stroke_width: stroke,
            color: colors::WHITE,
        });
        if debug {
            let board_rect = Rect::from_top_left(origin, board.as_vec2());
            shapes.push(outline(board_rect));
        }

        let ball = state.ball();
        let ball_center = origin + ball.position_on_board(board);
        shapes.push(Shape::Circle {
            center: ball_center,
            radius: ball.radius(),
            color: colors::WHITE,
        });
        if debug {
            push_center_indicator(&mut shapes, ball_center);
        }

        for paddle in [state.top_paddle(), state.bottom_paddle()] {
            let drawn = paddle.draw_rect(board);
            let rect = Rect::from_top_left(origin + drawn.min, drawn.size());
            shapes.push(Shape::RoundRect {
                rect,
                corner_radius: paddle.corner_radius(),
                color: colors::WHITE,
            });
            if debug {
                push_center_indicator(&mut shapes, rect.center());
                shapes.push(outline(rect));
            }
        }

        Self {
            shapes,
            score_text: state.score().to_string(),
        }
    }
}

fn outline(rect: Rect) -> Shape {
    Shape::RoundRectStroke {
        rect,
        corner_radius: 0.0,
        stroke_width: HAIRLINE,
        color: colors::DEBUG,
    }
}

fn push_center_indicator(shapes: &mut Vec<Shape>, at: Vec2) {
    let half = CENTER_INDICATOR_SIZE / 2.0;
    shapes.push(Shape::Line {
        start: at - Vec2::new(half, 0.0),
        end: at + Vec2::new(half, 0.0),
        width: CENTER_INDICATOR_STROKE,
        color: colors::DEBUG,
    });
    shapes.push(Shape::Line {
        start: at - Vec2::new(0.0, half),
        end: at + Vec2::new(0.0, half),
        width: CENTER_INDICATOR_STROKE,
        color: colors::DEBUG,
    });
}
