//! Contact form submissions.

use crate::{
  app::AppState,
  error::ApiError,
  mailto::{email_subjects, source_pages},
  models::response::api_response::ApiSuccess,
  validate::validate_contact_form,
};
use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::info;

/// `POST /api/contact`: validate, log, and record a general inquiry event.
pub async fn submit_contact(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<ApiSuccess>, ApiError> {
  let value: Value = serde_json::from_slice(&body)
    .map_err(|_| ApiError::BadRequest("request body must be valid JSON".to_string()))?;
  let form = validate_contact_form(&value).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let source_page = form.source_page.as_deref().unwrap_or(source_pages::CONTACT);
  info!(
    name = %form.name,
    email = %form.email,
    source_page,
    message_len = form.message.chars().count(),
    "contact form submission"
  );
  state
    .tracker
    .dispatch(email_subjects::GENERAL_INQUIRY, source_page);

  Ok(Json(ApiSuccess::new("Form submission received")))
}
