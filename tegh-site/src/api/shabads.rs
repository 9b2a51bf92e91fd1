//! Shabad endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tegh_common::models::Shabad;

use super::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/shabads
pub async fn list_shabads(State(state): State<AppState>) -> Json<Vec<Shabad>> {
    Json(state.store.shabads().to_vec())
}

/// GET /api/shabads/:id
pub async fn get_shabad(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Shabad> {
    state
        .store
        .shabad(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Shabad not found"))
}
