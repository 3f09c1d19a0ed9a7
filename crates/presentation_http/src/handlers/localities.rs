//! Locality listing handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{DistrictId, Locality};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::params::{QueryParams, int_param};
use crate::{error::ApiError, state::AppState};

/// Response for `/localidades`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalitiesResponse {
    pub success: bool,
    pub total: usize,
    /// The `distrito_id` as received, `null` when absent or unparsable
    pub filter_district: Option<i64>,
    pub localities: Vec<Locality>,
}

/// List localities, optionally restricted to one district
///
/// `distrito_id=0` is echoed back but applies no filter.
#[instrument(skip(state, params))]
pub async fn list_localities(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<LocalitiesResponse>, ApiError> {
    let filter_district = int_param(&params, "distrito_id");

    let district = match filter_district {
        None | Some(0) => None,
        Some(raw) => match DistrictId::try_from(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                // No upstream district can carry this id
                debug!(distrito_id = raw, "District id out of range");
                return Err(ApiError::NoLocalities);
            },
        },
    };

    let localities = state
        .weather
        .list_localities(district)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, ?district, "Locality listing failed");
            Vec::new()
        });

    if localities.is_empty() {
        return Err(ApiError::NoLocalities);
    }

    Ok(Json(LocalitiesResponse {
        success: true,
        total: localities.len(),
        filter_district,
        localities,
    }))
}
