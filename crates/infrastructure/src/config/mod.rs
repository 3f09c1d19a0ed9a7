//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, `IPMA_PROXY_*` environment variables (`__` separates
//! nested keys, e.g. `IPMA_PROXY_SERVER__PORT`), and finally the plain
//! `PORT` and `APP_ENV` variables.

mod server;

use integration_ipma::IpmaConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use server::{LogFormat, ServerConfig};

/// Plain variable overriding `server.port`
pub const PORT_VAR: &str = "PORT";

/// Plain variable overriding `environment`
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

const ENV_PREFIX: &str = "IPMA_PROXY";

/// Application environment (development or production)
///
/// Controls log verbosity and whether internal error details are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - verbose logs, error details exposed
    #[default]
    Development,
    /// Production environment - info logs, generic internal errors
    Production,
}

impl Environment {
    /// Tracing filter used when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Development => {
                "ipma_proxy_server=debug,presentation_http=debug,integration_ipma=debug,tower_http=debug"
            },
            Self::Production => "info",
        }
    }

    /// Whether internal error details may appear in responses
    #[must_use]
    pub const fn exposes_error_details(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// IPMA upstream configuration
    #[serde(default)]
    pub ipma: IpmaConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            "config",
            Self::env_source(None),
            std::env::var(PORT_VAR).ok(),
            std::env::var(ENVIRONMENT_VAR).ok(),
        )
    }

    /// Prefixed environment source; `vars` replaces the process environment
    fn env_source(vars: Option<config::Map<String, String>>) -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars)
    }

    fn load_from(
        file: &str,
        env: config::Environment,
        port: Option<String>,
        environment: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let environment = environment
            .map(|raw| raw.parse::<Environment>().map(|e| e.to_string()))
            .transpose()
            .map_err(config::ConfigError::Message)?;

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with prefixed environment variables
            .add_source(env)
            // Conventional plain variables win
            .set_override_option("server.port", port)?
            .set_override_option("environment", environment)?;

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            environment = %config.environment,
            port = config.server.port,
            "Configuration sources merged"
        );
        Ok(config)
    }
}
