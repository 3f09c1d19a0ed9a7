//! Route definitions

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error, handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Web UI and API description
        .route("/", get(handlers::info::index))
        .route("/api", get(handlers::info::api_info))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather data
        .route("/distritos", get(handlers::districts::list_districts))
        .route("/localidades", get(handlers::localities::list_localities))
        .route("/previsao", get(handlers::forecast::forecast_by_query))
        .route(
            "/previsao/{locality_id}",
            get(handlers::forecast::forecast_by_path),
        )
        // JSON bodies for unknown paths and methods
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        // Attach state
        .with_state(state)
}

/// Router with the middleware stack the server runs with
///
/// Layers, outermost first: request tracing, permissive CORS, panic recovery.
pub fn create_app(state: AppState) -> Router {
    create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .layer(CatchPanicLayer::custom(error::panic_response)),
    )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
