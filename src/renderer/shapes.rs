//! Shape generation for 2D primitives
//!
//! Screen space: origin top-left, y grows downward, units are pixels.

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering the axis-aligned box `[min, max]`
///
/// Degenerate boxes (zero or negative extent) produce no vertices.
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if max.x <= min.x || max.y <= min.y {
        return Vec::new();
    }
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Box from top-left corner and size
#[inline]
pub fn rect_at(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    rect(origin, origin + size, color)
}

/// Horizontal line as a thin box centred on `y`
pub fn hline(y: f32, x0: f32, x1: f32, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = thickness / 2.0;
    rect(Vec2::new(x0, y - half), Vec2::new(x1, y + half), color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 5.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 3.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 5.0);
    }

    #[test]
    fn test_empty_rect() {
        assert!(rect(Vec2::ZERO, Vec2::new(0.0, 10.0), [1.0; 4]).is_empty());
        assert!(rect_at(Vec2::ZERO, Vec2::new(10.0, -1.0), [1.0; 4]).is_empty());
    }
}
