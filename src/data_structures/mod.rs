//! Engine data structures: vertices, shapes, textures and frame counters.
//!
//! - `vertex` holds the per-vertex records and their GPU buffer layouts
//! - `shape` is a static vertex buffer drawn as a list of triangle strips
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `animation` drives texture cycling and time-based spinning

pub mod animation;
pub mod shape;
pub mod texture;
pub mod vertex;
