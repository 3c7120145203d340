//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SchemaConfig;

/// Install the global subscriber.
///
/// Verbose mode forces `debug`; otherwise `RUST_LOG` wins over the configured
/// level. Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(config: &SchemaConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    // A subscriber may already be installed (e.g. by tests); keep it
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    tracing::debug!(service = %config.service_name, "tracing initialized");
}
