use super::{
    error::AvatarError,
    manifest::Manifest,
    pool::{select_filename, select_pool_index},
};

pub const DEFAULT_CDN_BASE: &str = "https://cdn.jsdelivr.net/gh/coppermare/avatarsverse";
pub const DEFAULT_CATEGORY: &str = "voxel";
pub const DEFAULT_TAG: &str = "main";

/// Served when a category has no manifest entry.
pub const FALLBACK_FILENAME: &str = "1.png";

/// Inputs for a pool-mode CDN URL.
#[derive(Debug, Clone, Copy)]
pub struct AvatarUrl<'a> {
    pub seed: &'a str,
    pub category: &'a str,
    /// Explicit pool size. Selects the legacy `{n}.png` naming and bypasses
    /// the manifest.
    pub total: Option<i64>,
    /// `main` for the latest assets or a release such as `1.0.0`.
    pub tag: &'a str,
}

impl<'a> AvatarUrl<'a> {
    pub fn new(seed: &'a str) -> Self {
        Self {
            seed,
            category: DEFAULT_CATEGORY,
            total: None,
            tag: DEFAULT_TAG,
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = category;
        self
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn tag(mut self, tag: &'a str) -> Self {
        self.tag = tag;
        self
    }

    /// `{cdn_base}@{tag}/avatars/{category}/{file}`
    pub fn build(&self, cdn_base: &str, manifest: &Manifest) -> Result<String, AvatarError> {
        if self.seed.is_empty() {
            return Err(AvatarError::invalid_argument("seed is required"));
        }

        let filename = match self.total {
            Some(total) => format!("{}.png", select_pool_index(self.seed, total)?),
            None => select_filename(self.seed, manifest.files(self.category))
                .unwrap_or(FALLBACK_FILENAME)
                .to_string(),
        };

        Ok(format!(
            "{}@{}/avatars/{}/{}",
            cdn_base.trim_end_matches('/'),
            self.tag,
            self.category,
            filename
        ))
    }
}
