//! Render composition and pipeline batching.
//!
//! Scenes describe what to draw each frame as a [`Render`] tree. The frame
//! loop flattens the trees of all flows into one batch per pipeline and draws
//! the batches in a fixed order: vertex-coloured shapes, opaque textured
//! shapes, then alpha-blended shapes (far faces first, near faces second).
//!
//! # Key types
//!
//! - [`RenderTree<D>`] is the enum describing render operations, [`Render<'a>`]
//!   its form over GPU draws
//! - [`Pass`] is one pipeline pass, [`Pass::ORDER`] the order they run in
//! - [`Draw<'a>`] borrows one shape, its placement and optionally a texture
//!

use std::ops::Range;

use wgpu::RenderPass;

use crate::{
    context::Context,
    data_structures::shape::{Placement, Shape},
};

/// One draw: a vertex buffer, the strips to draw from it, a world matrix
/// and, for textured pipelines, the bound texture.
#[derive(Clone)]
pub struct Draw<'a> {
    pub vertex: &'a wgpu::Buffer,
    pub strips: &'a [Range<u32>],
    pub placement: &'a wgpu::BindGroup,
    pub texture: Option<&'a wgpu::BindGroup>,
}

impl<'a> Draw<'a> {
    pub fn new(shape: &'a Shape, placement: &'a Placement) -> Self {
        Self {
            vertex: &shape.vertex_buffer,
            strips: &shape.strips,
            placement: &placement.bind_group,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: &'a wgpu::BindGroup) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Specifies how a scene object should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Coloured(D)` renders vertex-coloured geometry in submission order
/// - `Textured(D)` renders opaque textured geometry
/// - `Blended(D)` renders alpha-blended textured geometry
/// - `Composed(Vec<RenderTree>)` recursively renders a composition of renders
///
pub enum RenderTree<D> {
    None,
    Coloured(D),
    Textured(D),
    Blended(D),
    Composed(Vec<RenderTree<D>>),
}

/// What a flow hands to the frame loop.
pub type Render<'a> = RenderTree<Draw<'a>>;

/// One pipeline pass of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Coloured,
    Textured,
    /// Blended far faces, front faces culled.
    BlendedBack,
    /// Blended near faces, back faces culled.
    BlendedFront,
}

impl Pass {
    /// Encoding order within a frame. Blended draws go through both
    /// blended passes.
    pub const ORDER: [Pass; 4] = [
        Pass::Coloured,
        Pass::Textured,
        Pass::BlendedBack,
        Pass::BlendedFront,
    ];

    pub fn is_textured(self) -> bool {
        self != Pass::Coloured
    }
}

/// Draws sorted by pipeline.
pub struct Batches<D> {
    pub coloured: Vec<D>,
    pub textured: Vec<D>,
    pub blended: Vec<D>,
}

impl<D> Default for Batches<D> {
    fn default() -> Self {
        Self {
            coloured: Vec::new(),
            textured: Vec::new(),
            blended: Vec::new(),
        }
    }
}

impl<D> Batches<D> {
    /// The draws encoded during `pass`.
    pub fn draws(&self, pass: Pass) -> &[D] {
        match pass {
            Pass::Coloured => &self.coloured,
            Pass::Textured => &self.textured,
            Pass::BlendedBack | Pass::BlendedFront => &self.blended,
        }
    }
}

impl<D> RenderTree<D> {
    /// Flatten this render tree into `batches`, keeping submission order
    /// within each pipeline.
    pub fn set_pipelines(self, batches: &mut Batches<D>) {
        match self {
            RenderTree::Coloured(draw) => batches.coloured.push(draw),
            RenderTree::Textured(draw) => batches.textured.push(draw),
            RenderTree::Blended(draw) => batches.blended.push(draw),
            RenderTree::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(batches)),
            RenderTree::None => (),
        }
    }
}

/// Encode all batches into `render_pass`.
pub(crate) fn draw_batches(
    ctx: &Context,
    render_pass: &mut RenderPass<'_>,
    batches: &Batches<Draw<'_>>,
) {
    for pass in Pass::ORDER {
        render_pass.set_pipeline(ctx.pipelines.get(pass));
        render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
        for draw in batches.draws(pass) {
            if pass.is_textured() && !bind_texture(render_pass, draw) {
                continue;
            }
            draw_strips(render_pass, draw);
        }
    }
}

fn bind_texture(render_pass: &mut RenderPass<'_>, draw: &Draw<'_>) -> bool {
    match draw.texture {
        Some(texture) => {
            render_pass.set_bind_group(2, texture, &[]);
            true
        }
        None => {
            log::warn!("you attempted to draw textured geometry without a texture");
            false
        }
    }
}

fn draw_strips(render_pass: &mut RenderPass<'_>, draw: &Draw<'_>) {
    render_pass.set_bind_group(1, draw.placement, &[]);
    render_pass.set_vertex_buffer(0, draw.vertex.slice(..));
    for strip in draw.strips {
        render_pass.draw(strip.clone(), 0..1);
    }
}
