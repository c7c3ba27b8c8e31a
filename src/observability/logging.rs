//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Derive the filter from config, letting `RUST_LOG` override it
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Crate and tower-http spans share the configured level

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Default filter directives for `config`.
pub fn default_directives(config: &ObservabilityConfig) -> String {
    format!(
        "resourceful={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let config = ObservabilityConfig {
            log_level: "debug".into(),
        };
        assert_eq!(
            default_directives(&config),
            "resourceful=debug,tower_http=debug"
        );
    }
}
