//! Logging configuration
//!
//! Structured logging to stderr, filterable with `RUST_LOG`. Stderr keeps
//! the TUI's alternate screen and the CLI's stdout output clean.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// Defaults to `warn` so normal play is silent; set `RUST_LOG=debug` to see
/// session milestones (including the chosen secret).
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,reqwest=error"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
