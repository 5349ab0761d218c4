//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Initialize the tracing subscriber: `RUST_LOG` wins, the configured level
/// is the fallback. With the `otel` feature enabled, `telemetry::init`
/// replaces this and adds the export layer.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
