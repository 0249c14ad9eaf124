use avatarsverse::{
    app::Application,
    avatar::Manifest,
    config::AppConfig,
    telemetry::{build_telemetry, register_telemetry},
};
use clap::Parser;
use std::{fs, path::Path, sync::LazyLock};
use tempfile::TempDir;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub avatars_dir: TempDir,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn options(&self, path: &str) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, &format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("failed to execute request")
    }
}

/// `voxel` with three PNGs and a stray text file, `pixel` with one JPEG,
/// an empty `draft` category and a hidden directory.
fn seed_assets(root: &Path) {
    let voxel = root.join("voxel");
    fs::create_dir_all(&voxel).unwrap();
    for name in ["10.png", "2.png", "1.png"] {
        fs::write(voxel.join(name), PNG_BYTES).unwrap();
    }
    fs::write(voxel.join("notes.txt"), b"ignored").unwrap();

    let pixel = root.join("pixel");
    fs::create_dir_all(&pixel).unwrap();
    fs::write(pixel.join("a.jpg"), b"jpeg").unwrap();

    fs::create_dir_all(root.join("draft")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(true).await
}

/// Spawn with or without a generated manifest next to the assets.
pub async fn spawn_app_with(write_manifest: bool) -> TestApp {
    LazyLock::force(&TELEMETRY);

    let avatars_dir = tempfile::tempdir().expect("failed to create assets dir");
    seed_assets(avatars_dir.path());

    if write_manifest {
        let manifest = Manifest::generate(avatars_dir.path()).unwrap();
        manifest
            .write_to(&avatars_dir.path().join("avatars.json"))
            .unwrap();
    }

    // Randomise configuration to ensure test isolation
    let app_config = {
        let mut c = AppConfig::parse_from(["avatarsverse"]);

        c.avatars_dir = avatars_dir.path().to_path_buf();
        c.manifest_path = None;
        c.app_host = "127.0.0.1".into();
        c.cdn_base = "https://cdn.example.com/avatars".into();

        // Use a random OS port
        c.app_port = 0;

        c
    };

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let app = Application::build(app_config).await.unwrap();

    let test_app = TestApp {
        address: format!("http://127.0.0.1:{}", &app.port),
        api_client,
        avatars_dir,
    };

    _ = tokio::spawn(app.run_until_stopped());

    test_app
}
