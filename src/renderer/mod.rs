//! CPU tessellation of scenes
//!
//! Turns a `Scene` into one colored triangle list. The host owns the surface
//! and uploads the vertices however it likes.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::scene::{Scene, Shape};

/// Segments for a full circle
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Segments per rounded corner
pub const CORNER_SEGMENTS: u32 = 8;

/// Tessellate a single shape
pub fn tessellate_shape(shape: &Shape) -> Vec<Vertex> {
    match shape {
        Shape::Circle {
            center,
            radius,
            color,
        } => shapes::circle(*center, *radius, *color, CIRCLE_SEGMENTS),
        Shape::RoundRect {
            rect,
            corner_radius,
            color,
        } => {
            if *corner_radius <= 0.0 {
                shapes::rect(rect, *color)
            } else {
                shapes::rounded_rect(rect, *corner_radius, *color, CORNER_SEGMENTS)
            }
        }
        Shape::RoundRectStroke {
            rect,
            corner_radius,
            stroke_width,
            color,
        } => shapes::rounded_rect_stroke(rect, *corner_radius, *stroke_width, *color, CORNER_SEGMENTS),
        Shape::Line {
            start,
            end,
            width,
            color,
        } => shapes::line(*start, *end, *width, *color),
    }
}

/// Tessellate a whole scene, back to front
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    scene.shapes.iter().flat_map(tessellate_shape).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BoardSize, GameState};

    #[test]
    fn test_tessellate_scene() {
        let mut state = GameState::default();
        state.set_board_size(BoardSize::new(300.0, 600.0));
        let scene = Scene::build(&state, false);

        let verts = tessellate(&scene);
        let wall = 4 * (CORNER_SEGMENTS as usize + 1) * 6;
        let ball = CIRCLE_SEGMENTS as usize * 3;
        let paddle = 4 * (CORNER_SEGMENTS as usize + 1) * 3;
        assert_eq!(verts.len(), wall + ball + 2 * paddle);
        assert_eq!(verts.len() % 3, 0);

        // Everything lands on the canvas (board plus wall on each side)
        for v in &verts {
            assert!(v.position[0] >= -1e-3 && v.position[0] <= 308.0 + 1e-3);
            assert!(v.position[1] >= -1e-3 && v.position[1] <= 608.0 + 1e-3);
        }
    }

    #[test]
    fn test_square_round_rect_uses_plain_rect() {
        let shape = Shape::RoundRect {
            rect: crate::sim::Rect::from_top_left(glam::Vec2::ZERO, glam::Vec2::ONE),
            corner_radius: 0.0,
            color: [1.0; 4],
        };
        assert_eq!(tessellate_shape(&shape).len(), 6);
    }
}
