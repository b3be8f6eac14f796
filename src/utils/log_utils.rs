use crate::config::DEFAULT_LOG_FILTER;
use std::io;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber. `log` records are forwarded to it.
///
/// Everything goes to stderr so stdout only carries the summary.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
