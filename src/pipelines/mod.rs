//! Render pipelines, one per fixed-function state combination the
//! tutorials use.
//!
//! - `basic`: the shared builder and the vertex-colour pipeline
//! - `textured`: opaque texture x diffuse
//! - `transparent`: alpha-blended texture x diffuse, back and front face passes

pub mod basic;
pub mod textured;
pub mod transparent;

use crate::render::Pass;

/// All pipelines, built once at start-up.
#[derive(Debug)]
pub struct Pipelines {
    pub coloured: wgpu::RenderPipeline,
    pub textured: wgpu::RenderPipeline,
    pub blended_back: wgpu::RenderPipeline,
    pub blended_front: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera: &wgpu::BindGroupLayout,
        world: &wgpu::BindGroupLayout,
        texture: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            coloured: basic::mk_coloured_pipeline(device, config, camera, world),
            textured: textured::mk_textured_pipeline(device, config, camera, world, texture),
            blended_back: transparent::mk_blended_pipeline(
                device,
                config,
                camera,
                world,
                texture,
                wgpu::Face::Front,
            ),
            blended_front: transparent::mk_blended_pipeline(
                device,
                config,
                camera,
                world,
                texture,
                wgpu::Face::Back,
            ),
        }
    }

    pub fn get(&self, pass: Pass) -> &wgpu::RenderPipeline {
        match pass {
            Pass::Coloured => &self.coloured,
            Pass::Textured => &self.textured,
            Pass::BlendedBack => &self.blended_back,
            Pass::BlendedFront => &self.blended_front,
        }
    }
}
