//! Runtime configuration sourced from `SCREENING_*` environment variables.
//! A local `.env` file is honoured when present.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Deployment stage; selects logging defaults and output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Level applied when `SCREENING_LOG_LEVEL` is unset. Development runs
    /// chatty so scoring decisions show up while iterating on the catalog.
    fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test | Self::Production => "info",
        }
    }
}

/// Top-level configuration for the screening service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env::var("SCREENING_ENV").unwrap_or_default());

        let ip = match env::var("SCREENING_HOST") {
            Ok(raw) => parse_host(&raw)?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match env::var("SCREENING_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("SCREENING_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            server: ServerConfig { ip, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// HTTP server binding, validated at load time so a typo'd host fails on
/// startup instead of at bind.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }

    /// Apply a command-line host override, with the same validation as the
    /// environment path.
    pub fn set_host(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.ip = parse_host(raw)?;
        Ok(())
    }
}

fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    if raw.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    raw.parse().map_err(|source| ConfigError::InvalidHost {
        value: raw.to_string(),
        source,
    })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    /// Full filter directive: the configured level for this service, with the
    /// HTTP stack held at warn so per-request noise stays out of screening
    /// logs.
    pub fn directive(&self) -> String {
        format!("{},hyper=warn,tower=warn", self.log_level)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCREENING_PORT value '{value}' is not a valid port number")]
    InvalidPort { value: String },
    #[error("SCREENING_HOST value '{value}' is neither 'localhost' nor an IP address")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
