//! Import request resource: write-only.

use crate::error::AppError;
use crate::models::{ImportRequest, ImportRequestCreate};
use crate::response::Ack;
use crate::state::AppState;
use crate::validation::{parse_body, validate_email};
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn create_import_request(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let input: ImportRequestCreate = parse_body(body)?;
    if let Some(email) = input.contact_email.as_deref() {
        validate_email("contactEmail", email)?;
    }
    let request = ImportRequest::new(input);
    state.store.insert_import_request(&request).await?;
    Ok(Json(Ack::ok()))
}
