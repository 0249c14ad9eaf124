use std::sync::LazyLock;

use regex::Regex;

use super::{
    palettes::{Palette, PALETTES},
    traits::{select_traits, BackgroundMotif, EyeStyle, HeadForm, MouthStyle},
};
use crate::avatar::{error::AvatarError, styles::RenderOptions};

pub const SIZE_MIN: u32 = 16;
pub const SIZE_MAX: u32 = 512;
pub const SIZE_DEFAULT: u32 = 64;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

fn head_path(form: HeadForm) -> &'static str {
    match form {
        HeadForm::Round => "M 50 15 A 35 35 0 1 1 49.99 15",
        HeadForm::Square => "M 15 15 L 85 15 L 85 85 L 15 85 Z",
        HeadForm::Block => "M 20 20 L 80 20 L 80 80 L 20 80 Z",
    }
}

fn eyes(style: EyeStyle, fg: &str) -> String {
    match style {
        EyeStyle::Dots => format!(
            r#"<circle cx="35" cy="45" r="5" fill="{fg}"/><circle cx="65" cy="45" r="5" fill="{fg}"/>"#
        ),
        EyeStyle::Curve => format!(
            r#"<path d="M 25 45 Q 35 38 45 45" fill="none" stroke="{fg}" stroke-width="3"/><path d="M 55 45 Q 65 38 75 45" fill="none" stroke="{fg}" stroke-width="3"/>"#
        ),
        EyeStyle::Oval => format!(
            r#"<ellipse cx="35" cy="45" rx="6" ry="4" fill="{fg}"/><ellipse cx="65" cy="45" rx="6" ry="4" fill="{fg}"/>"#
        ),
    }
}

fn mouth(style: MouthStyle, fg: &str) -> String {
    match style {
        MouthStyle::Line => {
            format!(r#"<line x1="35" y1="65" x2="65" y2="65" stroke="{fg}" stroke-width="2"/>"#)
        }
        MouthStyle::Smile => format!(
            r#"<path d="M 35 60 Q 50 75 65 60" fill="none" stroke="{fg}" stroke-width="2"/>"#
        ),
        MouthStyle::Neutral => {
            format!(r#"<rect x="40" y="62" width="20" height="4" rx="1" fill="{fg}"/>"#)
        }
    }
}

// Drawn between the background fill and the head.
fn motif(motif: BackgroundMotif, accent: &str) -> String {
    match motif {
        BackgroundMotif::Solid => String::new(),
        BackgroundMotif::Grid => format!(
            r#"<path d="M 0 25 H 100 M 0 50 H 100 M 0 75 H 100 M 25 0 V 100 M 50 0 V 100 M 75 0 V 100" fill="none" stroke="{accent}" stroke-width="0.5" opacity="0.4"/>"#
        ),
        BackgroundMotif::Dots => format!(
            r#"<g fill="{accent}" opacity="0.4"><circle cx="10" cy="10" r="3"/><circle cx="90" cy="10" r="3"/><circle cx="10" cy="90" r="3"/><circle cx="90" cy="90" r="3"/></g>"#
        ),
    }
}

/// Clip-path id for `seed`: the seed with every non-word character removed.
pub fn clip_id(seed: &str) -> String {
    format!("clip-{}", NON_WORD.replace_all(seed, ""))
}

pub fn clamp_size(size: Option<u32>) -> u32 {
    size.unwrap_or(SIZE_DEFAULT).clamp(SIZE_MIN, SIZE_MAX)
}

/// Render the voxel avatar for `seed` as a standalone SVG document.
pub fn render(seed: &str, options: &RenderOptions) -> Result<String, AvatarError> {
    let size = clamp_size(options.size);
    let radius = options.radius.unwrap_or(0);

    let traits = select_traits(seed)?;
    let Palette {
        background,
        foreground,
        accent,
    } = PALETTES[traits.palette_index];

    let (clip_attr, clip_defs) = if radius > 0 {
        let id = clip_id(seed);
        (
            format!(r#" clip-path="url(#{id})""#),
            format!(
                r#"<defs><clipPath id="{id}"><rect width="100" height="100" rx="{radius}" ry="{radius}"/></clipPath></defs>"#
            ),
        )
    } else {
        (String::new(), String::new())
    };

    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="{size}" height="{size}"{clip_attr}>"#,
            "\n{clip_defs}\n",
            r#"<rect width="100" height="100" fill="{background}"/>"#,
            "\n{motif}\n",
            r#"<g fill="{accent}"><path d="{head}"/></g>"#,
            "\n",
            r#"<g fill="{foreground}" stroke="{foreground}">{eyes}{mouth}</g>"#,
            "\n</svg>"
        ),
        size = size,
        clip_attr = clip_attr,
        clip_defs = clip_defs,
        background = background,
        motif = motif(traits.background_motif, accent),
        accent = accent,
        head = head_path(traits.head_form),
        foreground = foreground,
        eyes = eyes(traits.eye_style, foreground),
        mouth = mouth(traits.mouth_style, foreground),
    ))
}
