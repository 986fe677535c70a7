//! Email tracking ingress.

use crate::{
  app::AppState,
  error::{ApiError, INVALID_TRACK_REQUEST, StoreError, TRACK_FAILED},
  models::{response::api_response::ApiSuccess, track::track_request::TrackRequest},
  validate::validate_track_request,
};
use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::{debug, error, info};

/// `POST /api/track-email`.
///
/// The body is parsed here rather than by the `Json` extractor so that
/// malformed JSON gets the same 400 body as a schema mismatch.
pub async fn track_email(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<ApiSuccess>, ApiError> {
  let req = parse_track_request(&body)?;
  info!(subject = %req.subject, source_page = %req.source_page, "email tracking");

  if let Some(store) = state.store.clone() {
    let TrackRequest {
      subject,
      source_page,
    } = req;
    // Spawned so a client disconnect cannot cancel an insert in flight.
    let inserted = tokio::spawn(async move { store.insert(&subject, &source_page).await })
      .await
      .map_err(StoreError::from)
      .and_then(|r| r);
    match inserted {
      Ok(id) => debug!(id, "tracking event stored"),
      Err(e) => {
        error!("track_email store error: {e}");
        return Err(ApiError::Internal(TRACK_FAILED));
      }
    }
  }

  Ok(Json(ApiSuccess::new("Email tracking logged")))
}

fn parse_track_request(body: &[u8]) -> Result<TrackRequest, ApiError> {
  let invalid = || ApiError::BadRequest(INVALID_TRACK_REQUEST.to_string());
  let value: Value = serde_json::from_slice(body).map_err(|e| {
    debug!("track_email: body is not JSON: {e}");
    invalid()
  })?;
  validate_track_request(&value).map_err(|e| {
    debug!("track_email: rejected: {e}");
    invalid()
  })
}
