use fixfn::{
    WindowEvent,
    context::Context,
    flow::{GraphicsFlow, ImageTestResult},
    render::Render,
};
use instant::Duration;

pub(crate) type TestImage = image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>;

/// Counts the frames rendered so far.
#[derive(Default)]
pub(crate) struct FrameCounter(pub(crate) u32);

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

pub(crate) type Validate =
    fn(&Context, &FrameCounter, &mut TestImage) -> Result<ImageTestResult, anyhow::Error>;

/// Wraps an optional scene flow: `setup` configures the context once and
/// `validate` inspects every rendered frame until it passes.
pub(crate) struct TestRender {
    pub(crate) setup: fn(&mut Context),
    pub(crate) flow: Option<Box<dyn GraphicsFlow<FrameCounter>>>,
    pub(crate) validate: Validate,
}

impl TestRender {
    pub(crate) fn new(
        flow: Option<Box<dyn GraphicsFlow<FrameCounter>>>,
        setup: fn(&mut Context),
        validate: Validate,
    ) -> Self {
        Self {
            setup,
            flow,
            validate,
        }
    }
}

impl GraphicsFlow<FrameCounter> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, state: &mut FrameCounter) {
        if let Some(flow) = &mut self.flow {
            flow.on_init(ctx, state);
        }
        (self.setup)(ctx);
    }

    fn on_update(&mut self, ctx: &Context, state: &mut FrameCounter, dt: Duration) {
        state.progress();
        if let Some(flow) = &mut self.flow {
            flow.on_update(ctx, state, dt);
        }
    }

    fn on_window_events(&mut self, ctx: &Context, state: &mut FrameCounter, event: &WindowEvent) {
        if let Some(flow) = &mut self.flow {
            flow.on_window_events(ctx, state, event);
        }
    }

    fn on_render(&self) -> Render<'_> {
        match &self.flow {
            Some(flow) => flow.on_render(),
            None => Render::None,
        }
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut TestImage,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

pub(crate) fn f_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Pixel at a fraction of the image size, `(0.5, 0.5)` being the centre.
pub(crate) fn pixel_at(texture: &TestImage, fx: f32, fy: f32) -> image::Rgba<u8> {
    let x = ((texture.width() as f32 * fx) as u32).min(texture.width() - 1);
    let y = ((texture.height() as f32 * fy) as u32).min(texture.height() - 1);
    *texture.get_pixel(x, y)
}

pub(crate) fn corners(texture: &TestImage) -> [image::Rgba<u8>; 4] {
    [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)].map(|(fx, fy)| pixel_at(texture, fx, fy))
}

pub(crate) fn is_black(pixel: &image::Rgba<u8>) -> bool {
    pixel.0[..3] == [0, 0, 0]
}

pub(crate) fn is_white(pixel: &image::Rgba<u8>) -> bool {
    pixel.0[..3].iter().all(|c| *c >= 250)
}

#[macro_export]
macro_rules! golden_image_test {
    ($settings:expr, $constructor:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use fixfn::flow::{FlowConstructor, GraphicsFlow};
        let constructor: FlowConstructor<FrameCounter> = Box::new(|ctx| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<FrameCounter>> = Box::new($constructor(ctx).await?);
                Ok(g_flow)
            })
        });

        fixfn::flow::run($settings, vec![constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
