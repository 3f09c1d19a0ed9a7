//! Forecast handlers
//!
//! The same lookup is reachable through a path segment
//! (`/previsao/{locality_id}`) and through query parameters
//! (`/previsao?localidade_id=...`).

use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};
use domain::Forecast;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::params::{QueryParams, int_param};
use crate::{error::ApiError, state::AppState};

/// Days returned when `dias` is absent or unparsable
pub const DEFAULT_DAYS: i64 = 5;

/// Largest accepted `dias`
pub const MAX_DAYS: i64 = 10;

/// Response for the forecast routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub success: bool,
    pub data: Forecast,
}

/// Forecast for the locality named in the path
#[instrument(skip(state, params))]
pub async fn forecast_by_path(
    State(state): State<AppState>,
    locality_id: Result<Path<String>, PathRejection>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ForecastResponse>, ApiError> {
    // Undecodable segments are unmatched routes too
    let Ok(Path(locality_id)) = locality_id else {
        return Err(ApiError::EndpointNotFound);
    };

    // Only plain digit runs are treated as a matching route
    if locality_id.is_empty() || !locality_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::EndpointNotFound);
    }

    let days = requested_days(&params)?;
    match locality_id.parse::<u32>() {
        Ok(id) => fetch_forecast(&state, id, days).await,
        Err(_) => Err(ApiError::ForecastNotFound(
            locality_id.trim_start_matches('0').to_string(),
        )),
    }
}

/// Forecast for the locality given as `localidade_id`
#[instrument(skip(state, params))]
pub async fn forecast_by_query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let locality_id = int_param(&params, "localidade_id")
        .filter(|id| *id != 0)
        .ok_or_else(|| {
            ApiError::MissingParameter(
                "É necessário fornecer o parâmetro localidade_id".to_string(),
            )
        })?;

    let days = requested_days(&params)?;
    match u32::try_from(locality_id) {
        Ok(id) => fetch_forecast(&state, id, days).await,
        Err(_) => Err(ApiError::ForecastNotFound(locality_id.to_string())),
    }
}

/// Validate `dias`, falling back to the default when it is absent
fn requested_days(params: &QueryParams) -> Result<usize, ApiError> {
    let days = int_param(params, "dias").unwrap_or(DEFAULT_DAYS);
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(ApiError::InvalidParameter(format!(
            "O número de dias deve estar entre 1 e {MAX_DAYS}"
        )));
    }
    usize::try_from(days).map_err(|_| {
        ApiError::InvalidParameter(format!("O número de dias deve estar entre 1 e {MAX_DAYS}"))
    })
}

async fn fetch_forecast(
    state: &AppState,
    locality_id: u32,
    days: usize,
) -> Result<Json<ForecastResponse>, ApiError> {
    match state.weather.get_forecast(locality_id, days).await {
        Ok(forecast) => Ok(Json(ForecastResponse {
            success: true,
            data: forecast,
        })),
        Err(e) => {
            warn!(error = %e, locality_id, "Forecast lookup failed");
            Err(ApiError::ForecastNotFound(locality_id.to_string()))
        },
    }
}
