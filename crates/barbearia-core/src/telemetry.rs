//! Tracing setup

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over the configured level. Safe to call more than once;
/// later calls leave the first subscriber in place.
pub fn init_tracing(config: &LoggingConfig) {
    let level = &config.level;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "barbearia_core={},barbearia_services={}",
            level, level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };

    if result.is_err() {
        debug!("Tracing subscriber already installed");
    }
}
