//! "Tutorial 03: Matrices": eight vertex-coloured triangles, each spun by its
//! own chain of rotations, translations and scales. All spin angles are
//! derived from the time since start and complete one turn per second.

use cgmath::Rad;
use instant::Duration;

use crate::{
    context::{Context, InitContext},
    data_structures::{
        shape::{Placement, Shape},
        vertex::{ColourVertex, argb},
    },
    flow::{FlowConstructor, GraphicsFlow, WindowSettings},
    render::{Draw, Render},
    transform::{Step, compose, spin_angle},
};

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;

pub const TRIANGLE_COUNT: usize = 8;

const BASE: [[f32; 3]; 3] = [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]];

/// Packed `0xAARRGGBB` colour of each corner. Alpha is ignored when drawing.
pub const COLOURS: [[u32; 3]; TRIANGLE_COUNT] = [
    [0x0058FA58, 0x000040FF, 0x00FF00FF],
    [0x00FE2E64, 0x000B610B, 0x00610B0B],
    [0x00FF0000, 0x0000BFFF, 0x00D7DF01],
    [0x00F5A9F2, 0x00DA81F5, 0x008A0829],
    [0x008181F7, 0x002ECCFA, 0x00F5A9A9],
    [0x0058FAAC, 0x0058D3F7, 0x000B4C5F],
    [0x00FE642E, 0x00F3F781, 0x00FACC2E],
    [0x00610B0B, 0x00DF0101, 0x00F78181],
];

/// Corner positions of triangle `index`.
pub fn positions(index: usize) -> [[f32; 3]; 3] {
    let mut corners = BASE;
    if index == TRIANGLE_COUNT - 1 {
        corners[1] = [1.0, -2.0, 0.0];
    }
    corners
}

pub fn vertices(index: usize) -> [ColourVertex; 3] {
    let corners = positions(index);
    let colours = COLOURS[index];
    [0, 1, 2].map(|i| ColourVertex::new(corners[i], argb(colours[i])))
}

/// The transform recipe of every triangle for spin angle `a`, first step
/// applied first.
pub fn recipes(a: Rad<f32>) -> [Vec<Step>; TRIANGLE_COUNT] {
    use Step::*;
    let two = Rad(2.0);
    [
        vec![RotateX(two), Translate(3.0, 0.0, 0.0), RotateX(a), Scale(0.35), RotateY(a)],
        vec![RotateX(a), RotateY(a), Scale(0.5), Translate(0.0, 0.0, 0.0)],
        vec![RotateX(-a), Translate(-3.0, 0.0, 0.0), RotateX(two), Scale(0.45), RotateY(-a)],
        vec![
            RotateX(a + two),
            RotateX(-a),
            Translate(3.0, 3.0, 5.0),
            Scale(0.25),
            RotateY(a),
            RotateY(a),
            RotateZ(two),
        ],
        vec![
            RotateX(two - a),
            RotateX(a),
            Translate(-3.0, -3.0, -5.0),
            Scale(0.25),
            RotateY(-a),
            RotateZ(two),
            RotateY(-a),
        ],
        vec![RotateZ(-a), RotateY(a), Translate(0.0, 3.0, 0.0), Scale(0.4), RotateY(a), RotateX(a)],
        vec![RotateZ(a), RotateY(-a), Translate(0.0, -3.0, 0.0), Scale(0.43), RotateY(-a), RotateX(-a)],
        vec![Scale(0.2), Translate(1.0, 1.0, 1.0), RotateX(-a), RotateZ(-a)],
    ]
}

pub fn settings() -> WindowSettings {
    WindowSettings {
        title: String::from("Tutorial 03: Matrices"),
        width: 1200,
        height: 900,
        x: 100,
        y: 100,
    }
}

struct Triangle {
    shape: Shape,
    placement: Placement,
}

pub struct Matrices {
    triangles: Vec<Triangle>,
    elapsed: Duration,
}

impl Matrices {
    pub async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let mut triangles = Vec::with_capacity(TRIANGLE_COUNT);
        for index in 0..TRIANGLE_COUNT {
            let label = format!("Triangle {}", index + 1);
            let shape = Shape::single_strip(&ctx.device, &label, &vertices(index))?;
            let placement = Placement::new(&ctx.device, &ctx.world_bind_group_layout, &label);
            triangles.push(Triangle { shape, placement });
        }
        let mut matrices = Self {
            triangles,
            elapsed: Duration::ZERO,
        };
        matrices.place(&ctx.queue);
        Ok(matrices)
    }

    fn place(&self, queue: &wgpu::Queue) {
        let recipes = recipes(spin_angle(self.elapsed));
        for (triangle, recipe) in self.triangles.iter().zip(recipes) {
            triangle.placement.set(queue, compose(&recipe));
        }
    }
}

impl<S> GraphicsFlow<S> for Matrices {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) {
        ctx.clear_colour = wgpu::Color::BLACK;
    }

    fn on_update(&mut self, ctx: &Context, _: &mut S, dt: Duration) {
        self.elapsed += dt;
        self.place(&ctx.queue);
    }

    fn on_window_events(&mut self, _: &Context, _: &mut S, _: &winit::event::WindowEvent) {}

    fn on_render(&self) -> Render<'_> {
        Render::Composed(
            self.triangles
                .iter()
                .map(|t| Render::Coloured(Draw::new(&t.shape, &t.placement)))
                .collect(),
        )
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut S,
        _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        Ok(ImageTestResult::Passed)
    }
}

pub fn flow<S: 'static>() -> FlowConstructor<S> {
    Box::new(|ctx| {
        Box::pin(async move {
            let flow: Box<dyn GraphicsFlow<S>> = Box::new(Matrices::new(ctx).await?);
            Ok(flow)
        })
    })
}

pub fn run() -> anyhow::Result<()> {
    crate::flow::run::<()>(settings(), vec![flow()])
}
