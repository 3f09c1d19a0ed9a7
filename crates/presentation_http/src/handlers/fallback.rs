//! Fallback handlers for unknown paths and unsupported methods

use crate::error::ApiError;

/// Any path without a route
pub async fn not_found() -> ApiError {
    ApiError::EndpointNotFound
}

/// A known path requested with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
