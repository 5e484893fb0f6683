//! Logging utilities
//!
//! Tracing subscriber initialization shared by the CLI and tests.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Initialize the tracing subscriber with the specified log level
///
/// Respects `RUST_LOG` when set; otherwise falls back to `log_level`.
/// JSON output is meant for machine consumption of the diagnostics;
/// the default format targets terminals.
pub fn init_tracing(log_level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if json {
        let layer = fmt::layer().json().with_filter(filter);
        tracing_subscriber::registry().with(layer).init();
    } else {
        let layer = fmt::layer().with_writer(std::io::stderr).with_filter(filter);
        tracing_subscriber::registry().with(layer).init();
    }
}
