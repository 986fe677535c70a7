//! Consultation call-to-action redirect.

use crate::{
  app::AppState,
  mailto::{consultation_mailto_link, email_subjects},
};
use axum::{
  extract::{Path as AxumPath, State},
  http::{StatusCode, header},
  response::IntoResponse,
};

/// `GET /consult/:source_page`: record the click in the background and send
/// the browser to the consultation `mailto:` link.
pub async fn consultation_redirect(
  State(state): State<AppState>,
  AxumPath(source_page): AxumPath<String>,
) -> impl IntoResponse {
  state
    .tracker
    .dispatch(email_subjects::CONSULTATION, &source_page);
  (
    StatusCode::FOUND,
    [(header::LOCATION, consultation_mailto_link())],
  )
}
