//! Generative styles and the name based registry that dispatches to them.

use serde::{Deserialize, Serialize};

use super::error::AvatarError;

pub mod voxel;

/// Presentation options shared by every style. They never influence trait
/// selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub size: Option<u32>,
    pub radius: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub defaults: RenderOptions,
}

pub type StyleRenderer = fn(&str, &RenderOptions) -> Result<String, AvatarError>;

pub struct Style {
    pub metadata: StyleMetadata,
    pub render: StyleRenderer,
}

static STYLES: &[Style] = &[Style {
    metadata: voxel::METADATA,
    render: voxel::render,
}];

/// Look a style up by name, ignoring case.
pub fn get_style(name: &str) -> Option<&'static Style> {
    STYLES
        .iter()
        .find(|style| style.metadata.name.eq_ignore_ascii_case(name))
}

pub fn styles() -> impl Iterator<Item = &'static StyleMetadata> {
    STYLES.iter().map(|style| &style.metadata)
}

/// Render `seed` with the style registered under `name`.
pub fn render_style(name: &str, seed: &str, options: &RenderOptions) -> Result<String, AvatarError> {
    let style = get_style(name).ok_or_else(|| AvatarError::UnknownStyle(name.to_string()))?;
    (style.render)(seed, options)
}
