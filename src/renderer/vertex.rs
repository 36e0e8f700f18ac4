//! Vertex types for fallback 2D rendering

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

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors used when an asset is unavailable
pub mod colors {
    pub const SKY: [f32; 4] = [0.68, 0.85, 0.9, 1.0]; // lightblue
    pub const OBSTACLE: [f32; 4] = [0.0, 0.5, 0.0, 1.0]; // green
    pub const GROUND: [f32; 4] = [0.65, 0.16, 0.16, 1.0]; // brown
    pub const BODY: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // yellow
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
