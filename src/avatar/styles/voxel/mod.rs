//! Flat, blocky faces built from four traits and a colour palette.

pub mod palettes;
pub mod render;
pub mod traits;

pub use render::render;
pub use traits::{select_traits, VoxelTraits};

use super::{RenderOptions, StyleMetadata};

pub const METADATA: StyleMetadata = StyleMetadata {
    name: "voxel",
    version: "1.0.0",
    defaults: RenderOptions {
        size: Some(render::SIZE_DEFAULT),
        radius: Some(0),
    },
};
