use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at service startup.
///
/// JSON output; `RUST_LOG` wins when set, otherwise `default_directive` applies.
/// Subsequent calls are silently ignored.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}

/// Default filter for a service: verbose in debug mode.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}
