//! API error handling
//!
//! Every failure is rendered as `{"error": ..., "message": ...}` with the
//! matching status code. In production mode, internal errors return a
//! generic message without details.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// In production environments, this should be set to `false` so that panic
/// payloads and other internal messages never reach the client.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

const GENERIC_INTERNAL_MESSAGE: &str = "Ocorreu um erro ao processar o pedido";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Districts unavailable")]
    DistrictsUnavailable,

    #[error("No localities found")]
    NoLocalities,

    #[error("Forecast not found for locality {0}")]
    ForecastNotFound(String),

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error title
    pub error: String,
    /// Human-readable explanation
    pub message: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) | Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::DistrictsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::NoLocalities | Self::ForecastNotFound(_) | Self::EndpointNotFound => {
                StatusCode::NOT_FOUND
            },
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error
    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        let (error, message) = match self {
            Self::InvalidParameter(msg) => ("Parâmetro inválido", msg.clone()),
            Self::MissingParameter(msg) => ("Parâmetro obrigatório ausente", msg.clone()),
            Self::DistrictsUnavailable => (
                "Não foi possível obter os distritos",
                "Verifique a conexão com a API do IPMA".to_string(),
            ),
            Self::NoLocalities => (
                "Nenhuma localidade encontrada",
                "Verifique o ID do distrito ou a conexão com a API".to_string(),
            ),
            Self::ForecastNotFound(id) => (
                "Previsão não encontrada",
                format!("Não foi possível obter a previsão para a localidade {id}"),
            ),
            Self::EndpointNotFound => (
                "Endpoint não encontrado",
                "O recurso solicitado não existe".to_string(),
            ),
            Self::MethodNotAllowed => (
                "Método não permitido",
                "O método HTTP utilizado não é suportado neste endpoint".to_string(),
            ),
            Self::Internal(msg) => {
                // Internal errors should never leak details in production
                let message = if should_expose_details() {
                    msg.clone()
                } else {
                    GENERIC_INTERNAL_MESSAGE.to_string()
                };
                ("Erro interno do servidor", message)
            },
        };

        ErrorResponse {
            error: error.to_string(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Convert a caught handler panic into a 500 response
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    error!(panic = %detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::InvalidParameter(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingParameter(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DistrictsUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::NoLocalities.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ForecastNotFound("1".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::EndpointNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn forecast_not_found_names_locality() {
        let body = ApiError::ForecastNotFound("1010500".to_string()).body();
        assert_eq!(body.error, "Previsão não encontrada");
        assert!(body.message.ends_with("localidade 1010500"));
    }

    #[test]
    fn parameter_errors_carry_message() {
        let body = ApiError::InvalidParameter("dias".to_string()).body();
        assert_eq!(body.error, "Parâmetro inválido");
        assert_eq!(body.message, "dias");
    }

    #[test]
    fn error_response_serialization() {
        let json = serde_json::to_value(ApiError::EndpointNotFound.body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Endpoint não encontrado",
                "message": "O recurso solicitado não existe"
            })
        );
    }

    #[test]
    fn internal_error_exposure_follows_flag() {
        set_expose_internal_errors(false);
        let hidden = ApiError::Internal("index out of bounds".to_string()).body();
        set_expose_internal_errors(true);
        let shown = ApiError::Internal("index out of bounds".to_string()).body();

        assert_eq!(hidden.message, GENERIC_INTERNAL_MESSAGE);
        assert_eq!(shown.message, "index out of bounds");
        assert_eq!(hidden.error, "Erro interno do servidor");
    }

    #[test]
    fn panic_payloads_are_read() {
        set_expose_internal_errors(true);
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_uses_status() {
        let response = ApiError::DistrictsUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
