//! District listing handler

use axum::{Json, extract::State};
use domain::District;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Response for `/distritos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictsResponse {
    pub success: bool,
    pub total: usize,
    pub districts: Vec<District>,
}

/// List every district known to the upstream service
///
/// An upstream failure and an empty listing are both reported as 503.
#[instrument(skip(state))]
pub async fn list_districts(
    State(state): State<AppState>,
) -> Result<Json<DistrictsResponse>, ApiError> {
    let districts = state.weather.list_districts().await.unwrap_or_else(|e| {
        warn!(error = %e, "District listing failed");
        Vec::new()
    });

    if districts.is_empty() {
        return Err(ApiError::DistrictsUnavailable);
    }

    Ok(Json(DistrictsResponse {
        success: true,
        total: districts.len(),
        districts,
    }))
}
