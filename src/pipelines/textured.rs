use crate::{
    data_structures::vertex::{TexturedVertex, Vertex},
    pipelines::basic::{depth_tested, mk_render_pipeline},
};

pub(crate) fn mk_textured_layout(
    device: &wgpu::Device,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    world_bind_group_layout: &wgpu::BindGroupLayout,
    texture_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::PipelineLayout {
    device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Textured Pipeline Layout"),
        bind_group_layouts: &[
            camera_bind_group_layout,
            world_bind_group_layout,
            texture_bind_group_layout,
        ],
        push_constant_ranges: &[],
    })
}

pub(crate) fn textured_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Textured Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("textured.wgsl").into()),
    }
}

/// Opaque textured geometry: texel times diffuse colour, depth tested,
/// both faces drawn.
pub fn mk_textured_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    world_bind_group_layout: &wgpu::BindGroupLayout,
    texture_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = mk_textured_layout(
        device,
        camera_bind_group_layout,
        world_bind_group_layout,
        texture_bind_group_layout,
    );
    mk_render_pipeline(
        device,
        &layout,
        "Textured Pipeline",
        config.format,
        Some(wgpu::BlendState::REPLACE),
        depth_tested(),
        None,
        &[TexturedVertex::desc()],
        textured_shader(),
    )
}
