//! Raag endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tegh_common::models::{RaagInfo, Shabad};

use super::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/raags
pub async fn list_raags(State(state): State<AppState>) -> Json<Vec<RaagInfo>> {
    Json(state.store.raags().to_vec())
}

/// GET /api/raags/:id
pub async fn get_raag(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<RaagInfo> {
    state
        .store
        .raag(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Raag not found"))
}

/// GET /api/raags/:id/shabads
///
/// An unknown raag id is not an error; it simply has no shabads.
pub async fn get_raag_shabads(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Shabad>> {
    Json(state.store.shabads_for_raag(&id).into_iter().cloned().collect())
}
