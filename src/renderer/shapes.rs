use std::f32::consts::PI;

use glam::Vec2;

use super::draw::Vertex;

fn vertex(p: Vec2, color: [f32; 4]) -> Vertex {
    Vertex {
        position: [p.x, p.y],
        color,
    }
}

/// Filled circle as a triangle list.
pub fn circle(pos: Vec2, color: [f32; 4], r: f32, res: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(3 * res);
    let a = 2.0 * PI / res as f32;

    for i in 0..res {
        let i = i as f32;
        shape.push(vertex(pos, color));
        shape.push(vertex(
            pos + Vec2::new(r * f32::sin(a * i), r * f32::cos(a * i)),
            color,
        ));
        shape.push(vertex(
            pos + Vec2::new(r * f32::sin(a * (i + 1.0)), r * f32::cos(a * (i + 1.0))),
            color,
        ));
    }

    shape
}

/// A line of the given thickness, as two triangles.
pub fn line(p1: Vec2, p2: Vec2, color: [f32; 4], thickness: f32) -> Vec<Vertex> {
    let dir = (p2 - p1).normalize_or_zero();
    if dir == Vec2::ZERO {
        return vec![];
    }
    let n = dir.perp() * (thickness / 2.0);

    vec![
        vertex(p1 + n, color),
        vertex(p2 + n, color),
        vertex(p1 - n, color),
        vertex(p1 - n, color),
        vertex(p2 + n, color),
        vertex(p2 - n, color),
    ]
}

/// Triangle fan over a convex polygon.
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return vec![];
    }

    let mut shape = Vec::with_capacity(3 * (points.len() - 2));
    for i in 1..points.len() - 1 {
        shape.push(vertex(points[0], color));
        shape.push(vertex(points[i], color));
        shape.push(vertex(points[i + 1], color));
    }
    shape
}
