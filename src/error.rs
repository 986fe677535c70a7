//! Error types and their HTTP rendering.

use crate::models::response::api_response::ApiFailure;
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

pub const INVALID_TRACK_REQUEST: &str = "Invalid request format. Required: subject, source_page";
pub const TRACK_FAILED: &str = "Failed to track email";
pub const STORE_DISABLED: &str = "Email log store is disabled";

/// Failure of a single log store operation.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("storage fault: {0}")]
  Storage(#[from] sqlx::Error),
  #[error("store task did not complete: {0}")]
  Interrupted(#[from] tokio::task::JoinError),
}

/// Errors a handler hands back to axum.
#[derive(Debug, Error)]
pub enum ApiError {
  /// 400 with the given reason.
  #[error("bad request: {0}")]
  BadRequest(String),
  /// 500 with a fixed, stamped message. The cause is only logged.
  #[error("internal error: {0}")]
  Internal(&'static str),
  #[error("store disabled")]
  StoreDisabled,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match self {
      ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, ApiFailure::new(reason)),
      ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ApiFailure::stamped(msg)),
      ApiError::StoreDisabled => (StatusCode::SERVICE_UNAVAILABLE, ApiFailure::new(STORE_DISABLED)),
    };
    (status, Json(body)).into_response()
  }
}
