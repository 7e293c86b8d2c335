//! Shape generation for 2D primitives
//!
//! Every function returns a triangle list.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (rect.min, rect.max);
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Outline points of a rounded rectangle, clockwise (y down) from the top edge
///
/// Always `4 * (segments_per_corner + 1)` points so two outlines with the
/// same segment count can be stitched together.
pub fn rounded_rect_outline(rect: &Rect, radius: f32, segments_per_corner: u32) -> Vec<Vec2> {
    let half = rect.size() / 2.0;
    let r = radius.clamp(0.0, half.x.min(half.y));
    let (min, max) = (rect.min, rect.max);

    let corners = [
        (Vec2::new(max.x - r, min.y + r), -FRAC_PI_2),
        (Vec2::new(max.x - r, max.y - r), 0.0),
        (Vec2::new(min.x + r, max.y - r), FRAC_PI_2),
        (Vec2::new(min.x + r, min.y + r), PI),
    ];

    let mut points = Vec::with_capacity(4 * (segments_per_corner as usize + 1));
    for (center, start) in corners {
        for i in 0..=segments_per_corner {
            let theta = start + (i as f32 / segments_per_corner.max(1) as f32) * FRAC_PI_2;
            points.push(center + Vec2::new(theta.cos(), theta.sin()) * r);
        }
    }
    points
}

/// Generate vertices for a filled rounded rectangle (fan from the center)
pub fn rounded_rect(
    rect: &Rect,
    radius: f32,
    color: [f32; 4],
    segments_per_corner: u32,
) -> Vec<Vertex> {
    let center = rect.center();
    let outline = rounded_rect_outline(rect, radius, segments_per_corner);
    let mut vertices = Vec::with_capacity(outline.len() * 3);

    for i in 0..outline.len() {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a rounded rectangle outline centered on its edges
pub fn rounded_rect_stroke(
    rect: &Rect,
    radius: f32,
    stroke_width: f32,
    color: [f32; 4],
    segments_per_corner: u32,
) -> Vec<Vertex> {
    let half_stroke = stroke_width / 2.0;
    let outer_rect = Rect::from_center(rect.center(), rect.size() + Vec2::splat(stroke_width));
    let inner_rect = Rect::from_center(
        rect.center(),
        (rect.size() - Vec2::splat(stroke_width)).max(Vec2::ZERO),
    );

    let outer = rounded_rect_outline(&outer_rect, radius + half_stroke, segments_per_corner);
    let inner = rounded_rect_outline(
        &inner_rect,
        (radius - half_stroke).max(0.0),
        segments_per_corner,
    );

    let mut vertices = Vec::with_capacity(outer.len() * 6);
    for i in 0..outer.len() {
        let j = (i + 1) % outer.len();

        // Two triangles per segment
        vertices.push(Vertex::new(inner[i].x, inner[i].y, color));
        vertices.push(Vertex::new(outer[i].x, outer[i].y, color));
        vertices.push(Vertex::new(inner[j].x, inner[j].y, color));

        vertices.push(Vertex::new(inner[j].x, inner[j].y, color));
        vertices.push(Vertex::new(outer[i].x, outer[i].y, color));
        vertices.push(Vertex::new(outer[j].x, outer[j].y, color));
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = start + perp;
    let a2 = start - perp;
    let b1 = end + perp;
    let b2 = end - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}
