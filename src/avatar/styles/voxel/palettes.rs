/// One colour row of the voxel style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
}

const fn palette(background: &'static str, foreground: &'static str, accent: &'static str) -> Palette {
    Palette {
        background,
        foreground,
        accent,
    }
}

pub const PALETTES: [Palette; 5] = [
    palette("#6366f1", "#f8fafc", "#e2e8f0"),
    palette("#22c55e", "#f0fdf4", "#bbf7d0"),
    palette("#f59e0b", "#fffbeb", "#fde68a"),
    palette("#ec4899", "#fdf2f8", "#fbcfe8"),
    palette("#0ea5e9", "#f0f9ff", "#bae6fd"),
];
