//! Audio track listing

use axum::{extract::State, Json};
use tegh_common::models::AudioTrack;

use crate::AppState;

/// GET /api/audio
pub async fn list_audio(State(state): State<AppState>) -> Json<Vec<AudioTrack>> {
    Json(state.store.audio_tracks().to_vec())
}
