//! Tracing setup for the advisor service.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Failures while installing the tracing stack.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{directive}' is not a valid tracing directive")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("global tracing subscriber could not be installed: {0}")]
    SubscriberInstall(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber: compact single-line output, no ANSI so
/// hosted log collectors stay readable.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::SubscriberInstall)
}

/// `RUST_LOG` wins when set; the configured level is the fallback.
fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        directive: config.log_level.clone(),
        source,
    })
}
