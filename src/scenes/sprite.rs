//! "Tutorial 05: Textures": a white unit quad showing a 34 frame animation.
//! The arrow keys move the quad one unit per press, key repeat included.

use cgmath::Matrix4;
use futures::future::join_all;
use instant::Duration;
use winit::{event::WindowEvent, keyboard::KeyCode};

use crate::{
    context::{Context, InitContext},
    data_structures::{
        animation::FrameCycle,
        shape::{Placement, Shape},
        vertex::TexturedVertex,
    },
    flow::{FlowConstructor, GraphicsFlow, WindowSettings},
    render::{Draw, Render},
    resources,
    scenes::key_press,
};

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;

/// Rendered frames each animation frame stays on screen.
pub const FRAMES_PER_TEXTURE: u32 = 12;

/// Frame counts of the three animation rows `1-*`, `2-*` and `3-*`.
const ROWS: [u32; 3] = [11, 11, 12];

/// Unit quad with its lower left corner at the origin, drawn as one strip.
pub const QUAD: [TexturedVertex; 4] = [
    TexturedVertex::white([0.0, 1.0, 0.0], [0.0, 0.0]),
    TexturedVertex::white([1.0, 1.0, 0.0], [1.0, 0.0]),
    TexturedVertex::white([0.0, 0.0, 0.0], [0.0, 1.0]),
    TexturedVertex::white([1.0, 0.0, 0.0], [1.0, 1.0]),
];

/// Asset names of all animation frames in playback order.
pub fn texture_files() -> Vec<String> {
    ROWS.iter()
        .zip(1..)
        .flat_map(|(&count, row)| (1..=count).map(move |frame| format!("{row}-{frame}.png")))
        .collect()
}

/// Apply an arrow key to the quad offset. Returns whether the key moved it.
pub fn nudge(offset: &mut [f32; 2], key: KeyCode) -> bool {
    match key {
        KeyCode::ArrowUp => offset[1] += 1.0,
        KeyCode::ArrowDown => offset[1] -= 1.0,
        KeyCode::ArrowLeft => offset[0] -= 1.0,
        KeyCode::ArrowRight => offset[0] += 1.0,
        _ => return false,
    }
    true
}

pub fn world(offset: [f32; 2]) -> Matrix4<f32> {
    Matrix4::from_translation([offset[0], offset[1], 0.0].into())
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

pub struct Sprite {
    quad: Shape,
    placement: Placement,
    frames: Vec<wgpu::BindGroup>,
    cycle: FrameCycle,
    offset: [f32; 2],
}

impl Sprite {
    pub async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let quad = Shape::single_strip(&ctx.device, "Sprite", &QUAD)?;
        let placement = Placement::new(&ctx.device, &ctx.world_bind_group_layout, "Sprite");

        let files = texture_files();
        let textures = join_all(
            files
                .iter()
                .map(|file| resources::load_texture_or_blank(file, &ctx.device, &ctx.queue)),
        )
        .await;
        let frames: Vec<_> = textures
            .iter()
            .zip(&files)
            .map(|(texture, file)| {
                resources::texture_bind_group(
                    &ctx.device,
                    &ctx.texture_bind_group_layout,
                    texture,
                    file,
                )
            })
            .collect();
        log::info!("sprite loaded {} animation frames", frames.len());

        Ok(Self {
            quad,
            placement,
            cycle: FrameCycle::new(FRAMES_PER_TEXTURE, frames.len()),
            frames,
            offset: [0.0; 2],
        })
    }
}

impl<S> GraphicsFlow<S> for Sprite {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) {
        ctx.clear_colour = wgpu::Color::WHITE;
        self.placement.set(&ctx.queue, world(self.offset));
    }

    fn on_update(&mut self, _: &Context, _: &mut S, _: Duration) {
        self.cycle.advance();
    }

    fn on_window_events(&mut self, ctx: &Context, _: &mut S, event: &WindowEvent) {
        if let Some((key, _)) = key_press(event)
            && nudge(&mut self.offset, key)
        {
            self.placement.set(&ctx.queue, world(self.offset));
        }
    }

    fn on_render(&self) -> Render<'_> {
        match self.frames.get(self.cycle.index()) {
            Some(frame) => {
                Render::Textured(Draw::new(&self.quad, &self.placement).with_texture(frame))
            }
            None => Render::None,
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
            let flow: Box<dyn GraphicsFlow<S>> = Box::new(Sprite::new(ctx).await?);
            Ok(flow)
        })
    })
}

pub fn run() -> anyhow::Result<()> {
    crate::flow::run::<()>(settings(), vec![flow()])
}
