//! Resource listing

use axum::{
    extract::{Query, State},
    Json,
};
use tegh_common::models::Resource;

use crate::AppState;

/// GET /api/resources[?category=]
///
/// Filters only when exactly one non-empty `category` is given; an absent,
/// empty or repeated parameter returns everything.
pub async fn list_resources(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Resource>> {
    let resources = match single_category(&params) {
        Some(category) => state
            .store
            .resources_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.store.resources().to_vec(),
    };
    Json(resources)
}

fn single_category(params: &[(String, String)]) -> Option<&str> {
    let mut values = params
        .iter()
        .filter(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str());

    match (values.next(), values.next()) {
        (Some(category), None) if !category.is_empty() => Some(category),
        _ => None,
    }
}
