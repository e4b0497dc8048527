//! Shape generation for 2D primitives
//!
//! Everything is tessellated into triangle lists; lines become thin quads.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Append a single triangle
pub fn triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Append a quad given its four corners in winding order
pub fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    triangle(out, a, b, c, color);
    triangle(out, a, c, d, color);
}

/// Append an axis-aligned rectangle from its lower-left corner
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    quad(
        out,
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ],
        color,
    );
}

/// Append a filled circle as a triangle fan around the center
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Append a filled ellipse
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = center + Vec2::new(theta1.cos() * radii.x, theta1.sin() * radii.y);
        let p2 = center + Vec2::new(theta2.cos() * radii.x, theta2.sin() * radii.y);
        triangle(out, center, p1, p2, color);
    }
}

/// Append a line segment of the given width
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(out, [from + perp, from - perp, to - perp, to + perp], color);
}

/// Append a circle outline (the closed line loop of a ring)
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) {
    let inner_radius = radius - width / 2.0;
    let outer_radius = radius + width / 2.0;
    out.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let (d1, d2) = (
            Vec2::new(theta1.cos(), theta1.sin()),
            Vec2::new(theta2.cos(), theta2.sin()),
        );

        quad(
            out,
            [
                center + d1 * inner_radius,
                center + d1 * outer_radius,
                center + d2 * outer_radius,
                center + d2 * inner_radius,
            ],
            color,
        );
    }
}

/// Append a square dot centered on `center`
pub fn point(out: &mut Vec<Vertex>, center: Vec2, size: f32, color: [f32; 4]) {
    let h = size / 2.0;
    rect(out, center.x - h, center.y - h, size, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::ZERO, 10.0, [1.0; 4], 24);
        assert_eq!(out.len(), 24 * 3);
        for v in &out {
            let p = Vec2::from(v.position);
            assert!(p.length() <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&mut out, 0.0, 0.0, 4.0, 2.0, [1.0; 4]);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 0.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 2.0);
    }

    #[test]
    fn test_degenerate_line_is_skipped() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]);
        assert!(out.is_empty());

        line(&mut out, Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|v| v.position[1].abs() <= 1.0 + 1e-5));
    }

    #[test]
    fn test_ring_stays_in_band() {
        let mut out = Vec::new();
        ring(&mut out, Vec2::ZERO, 14.0, 2.0, [1.0; 4], 24);
        assert_eq!(out.len(), 24 * 6);
        for v in &out {
            let r = Vec2::from(v.position).length();
            assert!((13.0 - 1e-3..=15.0 + 1e-3).contains(&r));
        }
    }
}
