use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use uuid::Uuid;

use axum::{extract::MatchedPath, http::Request};
use tower_http::trace::TraceLayer;
use tracing::info_span;

pub mod error;
pub mod headers;
pub mod params;

use crate::{
    avatar::manifest::{Manifest, ManifestError},
    config::AppConfig,
    routes::{avatar, avatars, docs, health_check, url},
};

pub struct Application {
    listener: TcpListener,
    pub port: u16,
    app: Router,
}

/// Shared request state. The manifest is loaded once in [`Application::build`]
/// and never written afterwards.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<AppConfig>,
    pub manifest: Arc<Manifest>,
}

impl Application {
    pub async fn build(config: AppConfig) -> Result<Self, anyhow::Error> {
        // Connection
        let addr = format!("{}:{}", config.app_host, config.app_port);
        let listener = TcpListener::bind(addr).await?;
        let port = listener.local_addr()?.port();

        // Manifest
        let manifest = load_manifest(&config)?;

        let api_context = ApiContext {
            config: Arc::new(config),
            manifest: Arc::new(manifest),
        };

        let app = build_routes(api_context);

        Ok(Self {
            port,
            listener,
            app,
        })
    }

    /// Used in main, run the app
    pub async fn run_gracefully(
        self,
        close_rx: tokio::sync::oneshot::Receiver<()>,
    ) -> std::io::Result<()> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async move {
                _ = close_rx.await;
            })
            .await
    }

    /// Useful for tests
    /// Don't use in main
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.app).await
    }
}

/// A missing manifest is not fatal: URL building then falls back to the
/// default file for every category.
pub fn load_manifest(config: &AppConfig) -> Result<Manifest, ManifestError> {
    let path = config.manifest_path();

    match Manifest::load(&path) {
        Ok(manifest) => {
            tracing::info!(
                path = %path.display(),
                categories = manifest.categories().count(),
                total = manifest.total(),
                "loaded avatar manifest"
            );
            Ok(manifest)
        }
        Err(ManifestError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "avatar manifest not found, using empty manifest");
            Ok(Manifest::default())
        }
        Err(e) => Err(e),
    }
}

fn build_routes(api_context: ApiContext) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(docs::router())
        .merge(avatar::router())
        .merge(avatars::router())
        .merge(url::router())
        .with_state(api_context)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    let request_id = Uuid::new_v4();

                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str);

                    info_span!(
                        "http_request",
                        method = ?req.method(),
                        matched_path,
                        request_id = ?request_id,
                    )
                })
                .on_failure(()),
        )
}
