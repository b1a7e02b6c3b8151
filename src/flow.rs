//! Flow control and application event loop.
//!
//! A "flow" is one self-contained scene: it loads its resources once, reacts
//! to window input, advances its animation every frame and describes what to
//! draw as a [`Render`] tree. [`run`] opens the window, builds the GPU
//! [`Context`], constructs all flows and drives them until the window closes.
//!
//! # User-facing types
//!
//! - [`WindowSettings`] is the title, size and position of the window
//! - [`GraphicsFlow<S>`] is the trait for scenes that handle events and rendering
//! - [`FlowConstructor<S>`] builds a flow asynchronously from an [`InitContext`]
//!
//! # Lifecycle Flow
//!
//! The event loop follows this pattern each frame:
//! 1. Collect window events and pass them to `on_window_events`
//! 2. Call every flow's `on_render()` and batch the results per pipeline
//! 3. Render to the frame buffer and present
//! 4. Call `on_update` with the time since the previous frame
//! 5. Upload the camera uniform and request the next redraw

use std::{fmt::Debug, iter, pin::Pin, sync::Arc};

use instant::{Duration, Instant};

#[cfg(feature = "integration-tests")]
use tokio::runtime::Runtime;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::{Context, InitContext},
    data_structures::texture::Texture,
    render::{self, Batches, Render},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initial window configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("fixfn"),
            width: 900,
            height: 900,
            x: 100,
            y: 100,
        }
    }
}

#[cfg(feature = "integration-tests")]
pub enum ImageTestResult {
    Passed,
    Waiting,
    Failed,
}

/// Trait for implementing a renderable scene.
///
/// # Lifecycle
///
/// 1. `on_init()` is called once after all flows were constructed; configure
///    the context (clear colour, camera) here
/// 2. `on_window_events()` is called for each winit window event
/// 3. `on_render()` is called each frame and specifies how to render `self`
/// 4. `on_update()` is called after every rendered frame
///
pub trait GraphicsFlow<S> {
    /// Initialize the flow and configure the context.
    ///
    /// This is the only place to modify the Context and configure things such as the
    /// background colour or camera position.
    fn on_init(&mut self, ctx: &mut Context, state: &mut S);

    /// Update state every frame.
    ///
    /// Called every frame with the elapsed time `dt`. Use for animations and
    /// for writing per-frame world matrices through `ctx.queue`.
    fn on_update(&mut self, ctx: &Context, state: &mut S, dt: Duration);

    /// Handle window events (keyboard, window resizing, etc.).
    fn on_window_events(&mut self, ctx: &Context, state: &mut S, event: &WindowEvent);

    /// Return renderable objects for this flow.
    ///
    /// Called each frame. The engine batches all flows' renders per pipeline.
    fn on_render(&self) -> Render<'_>;

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut S,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>;
}

// Dummy impl to make wasm work
impl<State> Debug for dyn GraphicsFlow<State> + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GraphicsFlow")
    }
}

/// Type alias for a flow constructor (factory function).
///
/// A flow constructor takes an `InitContext` and asynchronously returns a
/// boxed `GraphicsFlow`. This is where textures and vertex buffers are loaded.
pub type FlowConstructor<S> = Box<
    dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = anyhow::Result<Box<dyn GraphicsFlow<S>>>>>>,
>;

/// Application state bundle: GPU context, app state, and surface status.
#[derive(Debug)]
pub struct AppState<State: 'static> {
    pub(crate) ctx: Context,
    state: State,
    is_surface_configured: bool,
}

impl<State: Default> AppState<State> {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = Context::new(window).await?;
        Ok(Self {
            ctx,
            state: State::default(),
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_texture(&self, extent3d: wgpu::Extent3d) -> wgpu::Texture {
        self.ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Golden Image Test Output Texture"),
            size: extent3d,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.ctx.config.format,
            usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_depth_texture(&self, extent3d: wgpu::Extent3d) -> wgpu::Texture {
        self.ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Golden Image Test Depth Texture"),
            size: extent3d,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Texture::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    /// Size of the readback image. Rows are copied with a 256 byte alignment,
    /// so both sides are rounded up to the next multiple of 256.
    #[cfg(feature = "integration-tests")]
    fn get_width_height(&self) -> (u32, u32) {
        let round_up = |v: u32| v.div_ceil(256).max(1) * 256;
        (round_up(self.ctx.config.width), round_up(self.ctx.config.height))
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_3d_extent(&self) -> wgpu::Extent3d {
        let (width, height) = self.get_width_height();
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        }
    }

    fn render(
        &mut self,
        graphics_flows: &[Box<dyn GraphicsFlow<State>>],
        #[cfg(feature = "integration-tests")] async_runtime: &Runtime,
        #[cfg(feature = "integration-tests")] event_loop: &winit::event_loop::EventLoopProxy<
            FlowEvent<State>,
        >,
    ) -> Result<(), wgpu::SurfaceError> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        #[cfg(not(feature = "integration-tests"))]
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        #[cfg(feature = "integration-tests")]
        let (tex, depth) = {
            let extent3d = self.get_test_3d_extent();
            (
                self.get_test_texture(extent3d),
                self.get_test_depth_texture(extent3d),
            )
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    #[cfg(feature = "integration-tests")]
                    view: &tex.create_view(&wgpu::TextureViewDescriptor::default()),
                    #[cfg(not(feature = "integration-tests"))]
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    #[cfg(feature = "integration-tests")]
                    view: &depth.create_view(&wgpu::TextureViewDescriptor::default()),
                    #[cfg(not(feature = "integration-tests"))]
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let mut batches = Batches::default();
            graphics_flows
                .iter()
                .for_each(|flow| flow.on_render().set_pipelines(&mut batches));
            render::draw_batches(&self.ctx, &mut render_pass, &batches);
        }

        #[cfg(feature = "integration-tests")]
        let output_buffer = {
            let u32_size = std::mem::size_of::<u32>() as u32;
            let (width, height) = self.get_width_height();
            let output_buffer = self.ctx.device.create_buffer(&wgpu::BufferDescriptor {
                size: (u32_size * width * height) as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
                label: Some("Golden Image Test Readback"),
                mapped_at_creation: false,
            });
            encoder.copy_texture_to_buffer(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &tex,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                },
                wgpu::TexelCopyBufferInfo {
                    buffer: &output_buffer,
                    layout: wgpu::TexelCopyBufferLayout {
                        offset: 0,
                        bytes_per_row: Some(u32_size * width),
                        rows_per_image: Some(height),
                    },
                },
                self.get_test_3d_extent(),
            );
            output_buffer
        };

        self.ctx.queue.submit(iter::once(encoder.finish()));

        #[cfg(feature = "integration-tests")]
        {
            let (width, height) = self.get_width_height();
            let buffer_slice = output_buffer.slice(..);
            let mapped = async_runtime.block_on(async {
                let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
                buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
                    let _ = tx.send(result);
                });
                if let Err(e) = self.ctx.device.poll(wgpu::PollType::wait_indefinitely()) {
                    log::error!("Polling the device for the test image failed: {e}");
                }
                rx.receive().await
            });
            match mapped {
                Some(Ok(())) => {
                    let data = buffer_slice.get_mapped_range();
                    let mut img =
                        image::ImageBuffer::<image::Rgba<u8>, _>::from_raw(width, height, data)
                            .expect("readback buffer matches the padded test extent");
                    let state = &mut self.state;
                    let all_passed = graphics_flows
                        .iter()
                        .map(|flow| flow.render_to_texture(&self.ctx, state, &mut img))
                        .map(|res| match res {
                            Err(e) => panic!("{}", e),
                            Ok(ImageTestResult::Passed) => true,
                            Ok(ImageTestResult::Failed) => panic!("Assertion failed"),
                            Ok(ImageTestResult::Waiting) => false,
                        })
                        .fold(true, |acc, passed| acc && passed);
                    if all_passed {
                        event_loop.send_event(FlowEvent::Exit).expect(
                            "All assertions passed but the winit event-loop could not safely exit",
                        )
                    }
                }
                other => panic!("Mapping the test image failed: {other:?}"),
            }
        }

        output.present();
        Ok(())
    }
}

pub struct App<State: 'static> {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[cfg_attr(
        not(any(feature = "integration-tests", target_arch = "wasm32")),
        allow(dead_code)
    )]
    proxy: winit::event_loop::EventLoopProxy<FlowEvent<State>>,
    settings: WindowSettings,
    state: Option<AppState<State>>,
    // This will hold the fully initialized flows once they are ready.
    graphics_flows: Vec<Box<dyn GraphicsFlow<State>>>,
    // We use Option to `take()` the constructors after use.
    constructors: Option<Vec<FlowConstructor<State>>>,
    startup_error: Option<anyhow::Error>,
    last_time: Instant,
}

impl<State: 'static + Default> App<State> {
    fn new(
        event_loop: &EventLoop<FlowEvent<State>>,
        settings: WindowSettings,
        constructors: Vec<FlowConstructor<State>>,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            settings,
            state: None,
            graphics_flows: Vec::new(),
            constructors: Some(constructors),
            startup_error: None,
            last_time: Instant::now(),
        })
    }

    fn init_flows(&mut self) {
        let Some(app_state) = self.state.as_mut() else {
            return;
        };
        let size = app_state.ctx.window.inner_size();
        app_state.resize(size.width, size.height);
        self.graphics_flows
            .iter_mut()
            .for_each(|flow| flow.on_init(&mut app_state.ctx, &mut app_state.state));
        app_state.ctx.write_camera();
        self.last_time = Instant::now();
        app_state.ctx.window.request_redraw();
    }

    fn abort(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("Start-up failed: {error:#}");
        self.startup_error = Some(error);
        event_loop.exit();
    }
}

pub(crate) enum FlowEvent<State: 'static> {
    #[allow(dead_code)]
    Initialized {
        state: AppState<State>,
        flows: Vec<Box<dyn GraphicsFlow<State>>>,
    },
    #[allow(dead_code)]
    Failed(anyhow::Error),
    #[allow(dead_code)]
    Exit,
}

impl<State> Debug for FlowEvent<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { state: _, flows } => {
                f.debug_struct("Initialized").field("flows", flows).finish()
            }
            Self::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
            Self::Exit => f.write_str("Exit"),
        }
    }
}

async fn init<State: Default + 'static>(
    window: Arc<Window>,
    constructors: Vec<FlowConstructor<State>>,
) -> anyhow::Result<(AppState<State>, Vec<Box<dyn GraphicsFlow<State>>>)> {
    let app_state = AppState::new(window).await?;
    log::info!("constructing {} flow(s)", constructors.len());
    let flow_futures: Vec<_> = constructors
        .into_iter()
        // The clone in into() leverages the internal Arcs of Device and Queue and thus only clones the ref
        .map(|constructor| constructor((&app_state.ctx).into()))
        .collect();
    let flows = futures::future::join_all(flow_futures)
        .await
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((app_state, flows))
}

impl<State: 'static + Default> ApplicationHandler<FlowEvent<State>> for App<State> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(constructors) = self.constructors.take() else {
            // Already initialized, e.g. a second resume on mobile platforms.
            return;
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height))
            .with_position(PhysicalPosition::new(self.settings.x, self.settings.y));

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.abort(event_loop, e.into()),
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init(window, constructors)) {
                Ok((app_state, flows)) => {
                    self.state = Some(app_state);
                    self.graphics_flows = flows;
                    self.init_flows();
                }
                Err(e) => self.abort(event_loop, e),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let event = match init(window, constructors).await {
                    Ok((state, flows)) => FlowEvent::Initialized { state, flows },
                    Err(e) => FlowEvent::Failed(e),
                };
                assert!(proxy.send_event(event).is_ok());
            });
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: FlowEvent<State>) {
        match event {
            FlowEvent::Initialized { state, flows } => {
                // This is the message from our wasm `spawn_local`
                self.state = Some(state);
                self.graphics_flows = flows;
                self.init_flows();
            }
            FlowEvent::Failed(e) => self.abort(event_loop, e),
            FlowEvent::Exit => event_loop.exit(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        self.graphics_flows
            .iter_mut()
            .for_each(|f| f.on_window_events(&state.ctx, &mut state.state, &event));

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                match state.render(
                    &self.graphics_flows,
                    #[cfg(feature = "integration-tests")]
                    &self.async_runtime,
                    #[cfg(feature = "integration-tests")]
                    &self.proxy,
                ) {
                    Ok(_) => {
                        self.graphics_flows
                            .iter_mut()
                            .for_each(|f| f.on_update(&state.ctx, &mut state.state, dt));
                        state.ctx.write_camera();
                    }
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
                // invoke main render loop
                state.ctx.window.request_redraw();
            }
            _ => {}
        }
    }
}

/// Open a window configured by `settings`, construct all flows and run the
/// event loop until the window is closed.
pub fn run<State: 'static + Default>(
    settings: WindowSettings,
    constructors: Vec<FlowConstructor<State>>,
) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    #[cfg(all(feature = "integration-tests", target_os = "linux"))]
    let event_loop: EventLoop<FlowEvent<State>> = {
        use winit::platform::wayland::EventLoopBuilderExtWayland;

        winit::event_loop::EventLoop::with_user_event()
            .with_any_thread(true)
            .build()?
    };

    #[cfg(all(feature = "integration-tests", target_os = "windows"))]
    let event_loop: EventLoop<FlowEvent<State>> = {
        use winit::platform::windows::EventLoopBuilderExtWindows;

        winit::event_loop::EventLoop::with_user_event()
            .with_any_thread(true)
            .build()?
    };

    #[cfg(any(
        not(feature = "integration-tests"),
        not(any(target_os = "linux", target_os = "windows"))
    ))]
    let event_loop: EventLoop<FlowEvent<State>> = EventLoop::with_user_event().build()?;

    log::info!("opening \"{}\"", settings.title);
    let mut app: App<State> = App::new(&event_loop, settings, constructors)?;

    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
