//! Static geometry and its per-frame placement.
//!
//! A [`Shape`] is a vertex buffer uploaded once and drawn as one or more
//! triangle strips. A [`Placement`] is the world matrix of one drawn object,
//! kept in its own uniform buffer and rewritten every frame.

use std::ops::Range;

use anyhow::{Result, ensure};
use cgmath::{Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::data_structures::vertex::Vertex;

/// A vertex buffer plus the strips to draw from it.
#[derive(Debug)]
pub struct Shape {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub strips: Vec<Range<u32>>,
}

impl Shape {
    /// Upload `vertices` once. Every strip must lie inside the vertex array
    /// and hold at least one triangle.
    pub fn new<V: Vertex>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        strips: Vec<Range<u32>>,
    ) -> Result<Self> {
        let vertex_count = vertices.len() as u32;
        check_strips(vertex_count, &strips)?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            vertex_buffer,
            vertex_count,
            strips,
        })
    }

    /// One strip covering all vertices.
    pub fn single_strip<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Result<Self> {
        Self::new(device, label, vertices, vec![0..vertices.len() as u32])
    }
}

/// Validate strip ranges against a vertex count.
pub fn check_strips(vertex_count: u32, strips: &[Range<u32>]) -> Result<()> {
    ensure!(!strips.is_empty(), "a shape needs at least one strip");
    for strip in strips {
        ensure!(
            strip.end <= vertex_count,
            "strip {strip:?} exceeds the {vertex_count} vertices of the shape"
        );
        ensure!(strip.len() >= 3, "strip {strip:?} holds no triangle");
    }
    Ok(())
}

/// Consecutive strips of `len` vertices each, e.g. the faces of a cube.
/// Trailing vertices that do not fill a strip are left out.
pub fn strips_of(vertex_count: u32, len: u32) -> Vec<Range<u32>> {
    if len == 0 {
        return Vec::new();
    }
    (0..vertex_count / len)
        .map(|i| i * len..(i + 1) * len)
        .collect()
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub world: [[f32; 4]; 4],
}

/// The world matrix of one drawn object.
#[derive(Debug)]
pub struct Placement {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl Placement {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} World Buffer")),
            contents: bytemuck::cast_slice(&[ModelUniform {
                world: Matrix4::<f32>::identity().into(),
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{label} world_bind_group")),
        });
        Self { buffer, bind_group }
    }

    /// Queue the upload of a new world matrix for the next frame.
    pub fn set(&self, queue: &wgpu::Queue, world: Matrix4<f32>) {
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[ModelUniform {
                world: world.into(),
            }]),
        );
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("world_bind_group_layout"),
    })
}
