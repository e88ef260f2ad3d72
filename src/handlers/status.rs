//! Status check resource: heartbeat records.

use crate::error::AppError;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;
use crate::validation::parse_body;
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn create_status(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<StatusCheck>, AppError> {
    let input: StatusCheckCreate = parse_body(body)?;
    let record = StatusCheck::new(input);
    state.store.insert_status(&record).await?;
    Ok(Json(record))
}

pub async fn list_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let records = state.store.list_status().await?;
    Ok(Json(records))
}
