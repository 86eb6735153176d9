//! Tracing subscriber setup for the screening service.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{AppEnvironment, TelemetryConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("log filter directive '{directive}' does not parse")]
    Directive {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("a tracing subscriber is already installed")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn parse_directive(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Directive {
        directive: directive.to_string(),
        source,
    })
}

/// Install the global subscriber. `RUST_LOG` wins when set; otherwise the
/// configured directive applies. Production output is compact and ansi-free
/// for log shippers; development keeps targets and colour for a terminal.
pub fn init(environment: AppEnvironment, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_directive(&config.directive())?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if environment.is_production() {
        builder
            .compact()
            .with_target(false)
            .with_ansi(false)
            .try_init()
    } else {
        builder.try_init()
    }
    .map_err(TelemetryError::Install)
}
