//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.518, 0.769, 0.8, 1.0];
    pub const GROUND: [f32; 4] = [0.87, 0.84, 0.58, 1.0];
    pub const GROUND_LINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const AVATAR: [f32; 4] = [0.96, 0.925, 0.196, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.055, 0.388, 0.035, 1.0];
    /// Tint applied to the avatar once the episode has ended
    pub const CRASHED: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
}
