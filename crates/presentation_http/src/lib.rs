//! IPMA proxy HTTP presentation layer
//!
//! This crate provides the browser-facing HTTP API: district, locality and
//! forecast routes plus the static web UI.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use routes::{create_app, create_router};
pub use state::AppState;
