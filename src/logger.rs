//! Logger initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the crate and the given
/// binary are logged at `default_level`, with `tower_http` at debug.
pub fn setup_logger(name: &str, default_level: &str) {
    let directives = format!(
        "{}={default_level},{}={default_level},tower_http=debug",
        name.replace('-', "_"),
        env!("CARGO_PKG_NAME").replace('-', "_"),
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
