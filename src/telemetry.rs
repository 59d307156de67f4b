/// Tracing initialization
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to info-level output for this crate.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatherly_server=info,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
