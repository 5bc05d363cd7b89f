//! Tracing setup
//!
//! `RUST_LOG` wins when set; otherwise the configured fallback filter is used.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// Returns an error if a global subscriber was already installed.
pub fn init_tracing(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
