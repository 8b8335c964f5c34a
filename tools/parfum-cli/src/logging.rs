//! Tracing subscriber setup.

use parfum_storefront::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured filter; `--verbose` raises the
/// default to `debug`. Logs go to stderr so rendered HTML and JSON on stdout
/// stay clean.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        config.filter.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}
