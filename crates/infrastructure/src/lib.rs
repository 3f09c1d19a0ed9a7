//! Infrastructure layer - process configuration and logging
//!
//! Loads the application configuration once at startup and installs the
//! tracing subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, Environment, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
