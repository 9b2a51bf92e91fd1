//! Baani endpoints: full text, scanned pages and raag groupings

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tegh_common::models::{BaaniPage, BaaniRaag};

use super::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of GET /api/baani/text
#[derive(Debug, Serialize)]
pub struct BaaniText {
    pub text: String,
}

/// GET /api/baani/text
pub async fn get_text(State(state): State<AppState>) -> Json<BaaniText> {
    Json(BaaniText {
        text: state.store.baani_text().to_string(),
    })
}

/// GET /api/baani/raags
///
/// Older clients read the full text from here.
pub async fn get_raags_text(State(state): State<AppState>) -> Json<BaaniText> {
    get_text(State(state)).await
}

/// GET /api/baani/raags/:id
pub async fn get_raag(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<BaaniRaag> {
    state
        .store
        .baani_raag(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Baani raag not found"))
}

/// GET /api/baani/pages
pub async fn list_pages(State(state): State<AppState>) -> Json<Vec<BaaniPage>> {
    Json(state.store.baani_pages().to_vec())
}

/// GET /api/baani/pages/:id
pub async fn get_page(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<BaaniPage> {
    state
        .store
        .baani_page(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Baani page not found"))
}

/// GET /api/baani/pages/number/:n
pub async fn get_page_by_number(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<BaaniPage> {
    let page_number = parse_page_number(&raw).ok_or(ApiError::BadRequest("Invalid page number"))?;

    state
        .store
        .baani_page_by_number(page_number)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Baani page not found"))
}

/// Parse the leading integer of `raw`
///
/// Surrounding whitespace and a single sign are accepted, and anything
/// after the digits is ignored ("12abc" is 12). A `0x` prefix reads the
/// digits as hexadecimal. Returns `None` when no digit follows the prefix.
/// Values too large for `i64` saturate, which no page matches.
pub fn parse_page_number(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map_or(0, i64::from);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });
    Some(if negative { -magnitude } else { magnitude })
}
