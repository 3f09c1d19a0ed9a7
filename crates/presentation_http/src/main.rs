//! IPMA proxy HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use infrastructure::{AppConfig, init_logging};
use integration_ipma::{IpmaClient, WeatherDataClient};
use presentation_http::{AppState, create_app, set_expose_internal_errors};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the environment can pick the filter.
    // Any bad value aborts startup.
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(
        config.environment.default_log_filter(),
        config.server.log_format,
    )?;

    info!(
        "IPMA proxy v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.ipma.base_url,
        timeout_secs = config.ipma.timeout_secs,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.environment.exposes_error_details());

    let client = IpmaClient::new(config.ipma.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize IPMA client: {e}"))?;
    let weather: Arc<dyn WeatherDataClient> = Arc::new(client);

    let app = create_app(AppState::new(weather));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Keep waiting on the other signal if this handler cannot be installed
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
