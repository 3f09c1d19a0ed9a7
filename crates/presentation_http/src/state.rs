//! Application state shared across handlers

use std::sync::Arc;

use integration_ipma::WeatherDataClient;

/// Shared application state
///
/// Holds no mutable data; cloning only bumps the client's reference count.
#[derive(Clone)]
pub struct AppState {
    /// Upstream weather data source
    pub weather: Arc<dyn WeatherDataClient>,
}

impl AppState {
    /// Create state around a weather data client
    pub fn new(weather: Arc<dyn WeatherDataClient>) -> Self {
        Self { weather }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather", &"<WeatherDataClient>")
            .finish()
    }
}
