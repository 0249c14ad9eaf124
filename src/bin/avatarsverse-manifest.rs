//! Scan `{avatars_dir}/{category}/*.png` and write the manifest the server
//! loads at startup.

use std::path::PathBuf;

use anyhow::Context;
use avatarsverse::{
    avatar::{manifest::MANIFEST_FILE_NAME, Manifest},
    telemetry::{build_telemetry, register_telemetry},
};
use clap::Parser;

#[derive(Parser)]
#[clap(about = "Generate the avatar manifest from the assets directory")]
struct ManifestConfig {
    #[clap(long, env, default_value = "avatars")]
    avatars_dir: PathBuf,

    /// Defaults to `avatars.json` inside `avatars_dir`
    #[clap(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let telemetry = build_telemetry(
        env!("CARGO_BIN_NAME").into(),
        "info".into(),
        std::io::stderr,
    );
    register_telemetry(telemetry);

    let config = ManifestConfig::parse();
    let output = config
        .output
        .unwrap_or_else(|| config.avatars_dir.join(MANIFEST_FILE_NAME));

    let manifest = Manifest::generate(&config.avatars_dir)
        .with_context(|| format!("failed to scan {}", config.avatars_dir.display()))?;

    for (category, entry) in manifest.categories() {
        let preview = entry.files.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
        tracing::info!(category, count = entry.count, preview = %preview, "scanned category");
    }

    manifest
        .write_to(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        path = %output.display(),
        total = manifest.total(),
        categories = manifest.categories().count(),
        "updated avatar manifest"
    );

    Ok(())
}
