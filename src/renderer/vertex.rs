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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.22, 0.42, 0.85, 1.0];
    pub const GROUND: [f32; 4] = [0.2, 0.55, 0.25, 1.0];
    pub const WATER: [f32; 4] = [0.1, 0.4, 0.7, 1.0];
    pub const WATER_GLINT: [f32; 4] = [0.6, 0.8, 1.0, 0.5];

    pub const HILL_FAR: [f32; 4] = [0.3, 0.5, 0.55, 1.0];
    pub const HILL_NEAR: [f32; 4] = [0.25, 0.6, 0.3, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.85];
    pub const REED: [f32; 4] = [0.35, 0.45, 0.15, 1.0];
    pub const REED_TIP: [f32; 4] = [0.45, 0.3, 0.15, 1.0];

    pub const SUN: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
    pub const SUN_RAY: [f32; 4] = [1.0, 0.7, 0.1, 1.0];

    pub const DUCK_BODY: [f32; 4] = [0.9, 0.7, 0.2, 1.0];
    pub const DUCK_HEAD: [f32; 4] = [0.2, 0.7, 0.2, 1.0];
    pub const DUCK_BEAK: [f32; 4] = [0.95, 0.5, 0.05, 1.0];
    pub const DUCK_WING: [f32; 4] = [0.4, 0.3, 0.2, 1.0];

    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CROSSHAIR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
