//! Gurdwara endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tegh_common::models::Gurdwara;

use super::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/gurdwaras
///
/// Already in chronological order; sorted once when the store loads.
pub async fn list_gurdwaras(State(state): State<AppState>) -> Json<Vec<Gurdwara>> {
    Json(state.store.gurdwaras().to_vec())
}

/// GET /api/gurdwaras/:id
pub async fn get_gurdwara(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Gurdwara> {
    state
        .store
        .gurdwara(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Gurdwara not found"))
}
