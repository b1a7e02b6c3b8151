//! Alpha blending: a textured cube spun about all three axes. With blending
//! on, the far faces are drawn first and the near faces over them so the
//! texture's transparent parts show the inside of the cube. `B` toggles
//! between blended and opaque drawing.

use instant::Duration;
use winit::{event::WindowEvent, keyboard::KeyCode};

use crate::{
    context::{Context, InitContext},
    data_structures::{
        animation::Spin,
        shape::{Placement, Shape, strips_of},
        vertex::TexturedVertex,
    },
    flow::{FlowConstructor, GraphicsFlow, WindowSettings},
    render::{Draw, Render},
    resources,
    scenes::key_press,
    transform::{Step, compose},
};

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;

pub const TEXTURE_FILE: &str = "Zero.png";

/// Yaw, pitch and roll rates in degrees per second.
pub const SPIN_RATES: [f32; 3] = [60.6, 61.2, 61.8];

/// Vertices per cube face.
pub const FACE_LEN: u32 = 4;

const fn v(position: [f32; 3], tex_coords: [f32; 2]) -> TexturedVertex {
    TexturedVertex::white(position, tex_coords)
}

/// Six faces of the `[-1, 1]` cube, one 4 vertex strip each.
pub const CUBE: [TexturedVertex; 24] = [
    // -Z
    v([-1.0, 1.0, -1.0], [0.0, 0.0]),
    v([1.0, 1.0, -1.0], [1.0, 0.0]),
    v([-1.0, -1.0, -1.0], [0.0, 1.0]),
    v([1.0, -1.0, -1.0], [1.0, 1.0]),
    // +Z
    v([-1.0, 1.0, 1.0], [0.0, 0.0]),
    v([-1.0, -1.0, 1.0], [1.0, 0.0]),
    v([1.0, 1.0, 1.0], [0.0, 1.0]),
    v([1.0, -1.0, 1.0], [1.0, 1.0]),
    // +Y
    v([-1.0, 1.0, 1.0], [0.0, 0.0]),
    v([1.0, 1.0, 1.0], [1.0, 0.0]),
    v([-1.0, 1.0, -1.0], [0.0, 1.0]),
    v([1.0, 1.0, -1.0], [1.0, 1.0]),
    // -Y
    v([-1.0, -1.0, 1.0], [0.0, 0.0]),
    v([-1.0, -1.0, -1.0], [1.0, 0.0]),
    v([1.0, -1.0, 1.0], [0.0, 1.0]),
    v([1.0, -1.0, -1.0], [1.0, 1.0]),
    // +X
    v([1.0, 1.0, -1.0], [0.0, 0.0]),
    v([1.0, 1.0, 1.0], [1.0, 0.0]),
    v([1.0, -1.0, -1.0], [0.0, 1.0]),
    v([1.0, -1.0, 1.0], [1.0, 1.0]),
    // -X
    v([-1.0, 1.0, -1.0], [1.0, 0.0]),
    v([-1.0, -1.0, -1.0], [1.0, 1.0]),
    v([-1.0, 1.0, 1.0], [0.0, 0.0]),
    v([-1.0, -1.0, 1.0], [0.0, 1.0]),
];

/// World transform for the current spin.
pub fn recipe(spin: &Spin) -> Vec<Step> {
    vec![spin.rotation(), Step::Translate(0.0, 0.0, 0.0)]
}

pub fn settings() -> WindowSettings {
    WindowSettings {
        title: String::from("Tutorial 05: Textures"),
        width: 900,
        height: 900,
        x: 100,
        y: 100,
    }
}

pub struct Blending {
    cube: Shape,
    placement: Placement,
    texture_bind_group: wgpu::BindGroup,
    spin: Spin,
    pub blend: bool,
}

impl Blending {
    pub async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let cube = Shape::new(
            &ctx.device,
            "Cube",
            &CUBE,
            strips_of(CUBE.len() as u32, FACE_LEN),
        )?;
        let placement = Placement::new(&ctx.device, &ctx.world_bind_group_layout, "Cube");
        let texture = resources::load_texture_or_blank(TEXTURE_FILE, &ctx.device, &ctx.queue).await;
        let texture_bind_group = resources::texture_bind_group(
            &ctx.device,
            &ctx.texture_bind_group_layout,
            &texture,
            TEXTURE_FILE,
        );

        Ok(Self {
            cube,
            placement,
            texture_bind_group,
            spin: Spin::new(SPIN_RATES),
            blend: true,
        })
    }
}

impl<S> GraphicsFlow<S> for Blending {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) {
        ctx.clear_colour = wgpu::Color::WHITE;
        self.placement.set(&ctx.queue, compose(&recipe(&self.spin)));
    }

    fn on_update(&mut self, ctx: &Context, _: &mut S, dt: Duration) {
        self.spin.step(dt);
        self.placement.set(&ctx.queue, compose(&recipe(&self.spin)));
    }

    fn on_window_events(&mut self, _: &Context, _: &mut S, event: &WindowEvent) {
        if let Some((KeyCode::KeyB, false)) = key_press(event) {
            self.blend = !self.blend;
            log::info!("alpha blending {}", if self.blend { "on" } else { "off" });
        }
    }

    fn on_render(&self) -> Render<'_> {
        let draw = Draw::new(&self.cube, &self.placement).with_texture(&self.texture_bind_group);
        if self.blend {
            Render::Blended(draw)
        } else {
            Render::Textured(draw)
        }
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
            let flow: Box<dyn GraphicsFlow<S>> = Box::new(Blending::new(ctx).await?);
            Ok(flow)
        })
    })
}

pub fn run() -> anyhow::Result<()> {
    crate::flow::run::<()>(settings(), vec![flow()])
}
