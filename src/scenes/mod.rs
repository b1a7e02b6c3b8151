//! The three tutorial programs.
//!
//! - `matrices`: eight vertex-coloured triangles, each with its own spin recipe
//! - `sprite`: a textured quad moved by the arrow keys, cycling 34 frames
//! - `blending`: a spinning textured cube drawn with alpha blending
//!
//! Each module exposes the scene's geometry and recipes as plain data, a
//! `settings()` for the window, a `flow()` constructor and a `run()` that
//! opens the scene on its own.

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

pub mod blending;
pub mod matrices;
pub mod sprite;

/// A key press, as `(key, is_repeat)`. Releases and unmapped keys are `None`.
pub fn key_press(event: &WindowEvent) -> Option<(KeyCode, bool)> {
    match event {
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    repeat,
                    ..
                },
            ..
        } => Some((*code, *repeat)),
        _ => None,
    }
}
