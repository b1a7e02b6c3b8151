//! fixfn
//!
//! Fixed-function style rendering tutorials on top of wgpu. Every demo follows
//! the same recipe: create a device, upload static geometry and textures once,
//! then recompute a few world matrices per frame and issue a fixed sequence of
//! draw calls. This crate holds the shared plumbing so each demo only states
//! its geometry, its transform recipes and its texture cycling.
//!
//! High-level modules
//! - `camera`: left-handed look-at view and perspective projection
//! - `context`: window, device, queue, surface and pipelines
//! - `data_structures`: vertices, shapes, textures and frame counters
//! - `flow`: the event loop and the per-demo `GraphicsFlow` trait
//! - `pipelines`: coloured, textured and alpha-blended pipelines
//! - `render`: draw batching per pipeline
//! - `resources`: asset loading and texture bind groups
//! - `scenes`: the matrices, sprite and blending tutorials
//! - `transform`: canned matrix steps and their composition
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scenes;
pub mod transform;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::WindowEvent;
pub use winit::keyboard::{KeyCode, PhysicalKey};
