use serde::Serialize;

use super::palettes::PALETTES;
use crate::avatar::{error::AvatarError, seed::SeededRandom};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadForm {
    Round,
    Square,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    Dots,
    Curve,
    Oval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthStyle {
    Line,
    Smile,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMotif {
    Solid,
    Grid,
    Dots,
}

const HEAD_FORMS: [HeadForm; 3] = [HeadForm::Round, HeadForm::Square, HeadForm::Block];
const EYE_STYLES: [EyeStyle; 3] = [EyeStyle::Dots, EyeStyle::Curve, EyeStyle::Oval];
const MOUTH_STYLES: [MouthStyle; 3] = [MouthStyle::Line, MouthStyle::Smile, MouthStyle::Neutral];
const BACKGROUND_MOTIFS: [BackgroundMotif; 3] = [
    BackgroundMotif::Solid,
    BackgroundMotif::Grid,
    BackgroundMotif::Dots,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoxelTraits {
    pub head_form: HeadForm,
    pub eye_style: EyeStyle,
    pub mouth_style: MouthStyle,
    pub background_motif: BackgroundMotif,
    pub palette_index: usize,
}

/// Derive the trait record for `seed`.
///
/// Draw order is fixed: head, eyes, mouth, background, palette. Reordering
/// the draws reassigns every existing avatar.
pub fn select_traits(seed: &str) -> Result<VoxelTraits, AvatarError> {
    let mut rng = SeededRandom::new(seed);

    Ok(VoxelTraits {
        head_form: *rng.pick(&HEAD_FORMS)?,
        eye_style: *rng.pick(&EYE_STYLES)?,
        mouth_style: *rng.pick(&MOUTH_STYLES)?,
        background_motif: *rng.pick(&BACKGROUND_MOTIFS)?,
        palette_index: rng.index(PALETTES.len())?,
    })
}
