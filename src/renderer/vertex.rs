//! Vertex type for 3D rendering

use bytemuck::{Pod, Zeroable};

/// 3D vertex with position, normal and color
///
/// A zero normal marks unlit geometry; the shader skips the Lambert term
/// for it (the sky dome uses a flat, unshaded material).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
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
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Player cube, 0xff0000
    pub const PLAYER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Obstacle icosahedron, 0x137704
    pub const OBSTACLE: [f32; 4] = [0.075, 0.467, 0.016, 1.0];
    /// Floor plane, 0x21d006
    pub const FLOOR: [f32; 4] = [0.129, 0.816, 0.024, 1.0];
    /// Sky dome, 0x82a3ff
    pub const SKY: [f32; 4] = [0.510, 0.639, 1.0, 1.0];
    /// Cloud palette: 0xFFFFFF, 0xEFD2DA, 0xC1EDED, 0xCCC9DE
    pub const CLOUDS: [[f32; 4]; 4] = [
        [1.0, 1.0, 1.0, 1.0],
        [0.937, 0.824, 0.855, 1.0],
        [0.757, 0.929, 0.929, 1.0],
        [0.800, 0.788, 0.871, 1.0],
    ];
}
