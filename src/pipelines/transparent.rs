use crate::{
    data_structures::vertex::{TexturedVertex, Vertex},
    pipelines::{
        basic::{depth_tested, mk_render_pipeline},
        textured::{mk_textured_layout, textured_shader},
    },
};

/**
 * Alpha-blended textured geometry, `src * a + dst * (1 - a)`.
 *
 * A closed transparent object is drawn twice: first with front faces culled
 * so its far side lands in the frame, then with back faces culled so the near
 * side blends over it. `cull` selects which of the two passes this is.
 */
pub fn mk_blended_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    world_bind_group_layout: &wgpu::BindGroupLayout,
    texture_bind_group_layout: &wgpu::BindGroupLayout,
    cull: wgpu::Face,
) -> wgpu::RenderPipeline {
    let layout = mk_textured_layout(
        device,
        camera_bind_group_layout,
        world_bind_group_layout,
        texture_bind_group_layout,
    );
    let label = match cull {
        wgpu::Face::Front => "Blended Back Faces Pipeline",
        wgpu::Face::Back => "Blended Front Faces Pipeline",
    };
    mk_render_pipeline(
        device,
        &layout,
        label,
        config.format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        depth_tested(),
        Some(cull),
        &[TexturedVertex::desc()],
        textured_shader(),
    )
}
