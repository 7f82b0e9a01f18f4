use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a stderr logger filtered by `RUST_LOG` (default `info`).
///
/// Hosts call this once at startup; the library itself never installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
