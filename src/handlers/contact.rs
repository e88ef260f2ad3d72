//! Contact message resource: write-only.

use crate::error::AppError;
use crate::models::{ContactMessage, ContactMessageCreate};
use crate::response::Ack;
use crate::state::AppState;
use crate::validation::{parse_body, require_non_empty, validate_email};
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let input: ContactMessageCreate = parse_body(body)?;
    require_non_empty("name", &input.name)?;
    require_non_empty("message", &input.message)?;
    if let Some(email) = input.email.as_deref() {
        validate_email("email", email)?;
    }
    let record = ContactMessage::new(input);
    state.store.insert_contact_message(&record).await?;
    Ok(Json(Ack::ok()))
}
