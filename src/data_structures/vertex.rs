//! Per-vertex records and their GPU buffer layouts.

use std::mem;

/// A vertex type that can describe its own buffer layout to a pipeline.
pub trait Vertex: bytemuck::Pod {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Position and diffuse colour, for untextured shapes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColourVertex {
    pub position: [f32; 3],
    pub colour: [f32; 4],
}

impl ColourVertex {
    pub const fn new(position: [f32; 3], colour: [f32; 4]) -> Self {
        Self { position, colour }
    }
}

impl Vertex for ColourVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ColourVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Position, diffuse colour and one set of texture coordinates.
///
/// The diffuse colour is multiplied with the texel, so white leaves the
/// texture untouched.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub colour: [f32; 4],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub const fn new(position: [f32; 3], colour: [f32; 4], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            colour,
            tex_coords,
        }
    }

    /// A white vertex, i.e. one that shows the bound texture as is.
    pub const fn white(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self::new(position, WHITE, tex_coords)
    }
}

impl Vertex for TexturedVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TexturedVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 7]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Decode a packed `0xAARRGGBB` diffuse colour.
///
/// The colour channels are authored in sRGB and converted to linear floats,
/// since the surface is sRGB and re-encodes on write. Alpha stays linear.
pub fn argb(packed: u32) -> [f32; 4] {
    let channel = |shift: u32| ((packed >> shift) & 0xff) as u8;
    [
        srgb_to_linear(channel(16)),
        srgb_to_linear(channel(8)),
        srgb_to_linear(channel(0)),
        channel(24) as f32 / 255.0,
    ]
}

fn srgb_to_linear(value: u8) -> f32 {
    let c = value as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
