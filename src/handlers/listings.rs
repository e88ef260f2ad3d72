//! Listing resource: create, search, and fetch by id.

use crate::error::AppError;
use crate::models::{Listing, ListingCreate};
use crate::state::AppState;
use crate::validation::{parse_body, validate_limit};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

const DEFAULT_LIMIT: i64 = 20;

pub async fn create_listing(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Listing>, AppError> {
    let input: ListingCreate = parse_body(body)?;
    let listing = Listing::new(input);
    state.store.insert_listing(&listing).await?;
    Ok(Json(listing))
}

pub async fn search_listings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let limit = match params.get("limit") {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Validation("limit must be an integer".into()))?,
        None => DEFAULT_LIMIT,
    };
    validate_limit(limit)?;
    let q = params.get("q").map(String::as_str);
    let listings = state.store.search_listings(q, limit).await?;
    Ok(Json(listings))
}

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    let listing = state
        .store
        .find_listing(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("listing {}", id)))?;
    Ok(Json(listing))
}
