//! Biography endpoints

use axum::{extract::State, Json};
use tegh_common::models::{BiographySection, TimelineEvent};

use crate::AppState;

/// GET /api/biography/timeline
pub async fn get_timeline(State(state): State<AppState>) -> Json<Vec<TimelineEvent>> {
    Json(state.store.timeline().to_vec())
}

/// GET /api/biography/sections
pub async fn get_sections(State(state): State<AppState>) -> Json<Vec<BiographySection>> {
    Json(state.store.biography_sections().to_vec())
}
