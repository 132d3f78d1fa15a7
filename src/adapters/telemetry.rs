//! Tracing initialization.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

static INIT: Once = Once::new();

/// Builds the filter: `RUST_LOG` when set and valid, else the configured one.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Installs the global subscriber, writing to stderr.
///
/// Idempotent. A subscriber installed elsewhere first is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = env_filter(config);
        let registry = tracing_subscriber::registry().with(filter);

        let result = match config.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .try_init(),
        };

        if let Err(err) = result {
            eprintln!("tracing already initialised: {}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("still logging");
    }
}
