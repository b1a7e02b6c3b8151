//! Loading of external files: images from the `assets/` directory.

pub mod texture;

pub use texture::{
    load_binary, load_texture, load_texture_or_blank, texture_bind_group, texture_bind_group_layout,
};
