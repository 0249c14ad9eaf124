use tokio::task::JoinHandle;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Default filter when `RUST_LOG` is unset.
///
/// axum logs rejections from built-in extractors with the `axum::rejection`
/// target, at `TRACE` level.
pub fn default_filter() -> String {
    format!(
        "{}=info,tower_http=info,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}

/// Compose a bunyan JSON subscriber writing to `sink`.
pub fn build_telemetry<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register telemetry as global default to process span data.
///
/// It should only be called once
pub fn register_telemetry(subscriber: impl Subscriber + Send + Sync) {
    set_global_default(subscriber).expect("failed to set tracing subscriber");
}

pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = tracing::Span::current();
    tokio::task::spawn_blocking(move || current_span.in_scope(f))
}
