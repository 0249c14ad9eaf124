use std::path::PathBuf;

use crate::avatar::{manifest::MANIFEST_FILE_NAME, url::DEFAULT_CDN_BASE};

#[derive(clap::Parser, Debug, Clone)]
pub struct AppConfig {
    // App configs
    #[clap(long, env, default_value = "127.0.0.1")]
    pub app_host: String,

    #[clap(long, env, default_value_t = 8080)]
    pub app_port: u16,

    /// Root of the pre-built assets, one subdirectory per category
    #[clap(long, env, default_value = "avatars")]
    pub avatars_dir: PathBuf,

    /// Defaults to `avatars.json` inside `avatars_dir`
    #[clap(long, env)]
    pub manifest_path: Option<PathBuf>,

    #[clap(long, env, default_value = DEFAULT_CDN_BASE)]
    pub cdn_base: String,
}

impl AppConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| self.avatars_dir.join(MANIFEST_FILE_NAME))
    }
}
