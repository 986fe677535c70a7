//! Read side of the email log store.

use crate::{
  app::AppState,
  error::ApiError,
  models::log::{log_entry::LogEntry, log_filter::LogFilter, source_page_count::SourcePageCount},
};
use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
  pub source_page: Option<String>,
  pub start_time: Option<String>,
  pub end_time: Option<String>,
  pub limit: Option<u32>,
  pub offset: Option<u32>,
}

/// Turn query parameters into a filter plus `(limit, offset)`.
pub fn compute_log_params(p: &LogParams) -> Result<(LogFilter, u32, u32), ApiError> {
  let filter = LogFilter {
    source_page: p
      .source_page
      .as_deref()
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_string),
    start_time: parse_time("start_time", p.start_time.as_deref())?,
    end_time: parse_time("end_time", p.end_time.as_deref())?,
  };
  let limit = p.limit.unwrap_or(50).clamp(1, 200);
  let offset = p.offset.unwrap_or(0);
  Ok((filter, limit, offset))
}

fn parse_time(name: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
  match raw.map(str::trim).filter(|s| !s.is_empty()) {
    None => Ok(None),
    Some(s) => DateTime::parse_from_rfc3339(s)
      .map(|t| Some(t.with_timezone(&Utc)))
      .map_err(|_| ApiError::BadRequest(format!("{name} must be an RFC 3339 timestamp"))),
  }
}

/// `GET /api/email-logs`.
pub async fn list_email_logs(
  State(state): State<AppState>,
  Query(params): Query<LogParams>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
  let store = state.store.as_ref().ok_or(ApiError::StoreDisabled)?;
  let (filter, limit, offset) = compute_log_params(&params)?;
  match store.query(&filter, Some(limit), Some(offset)).await {
    Ok(rows) => Ok(Json(rows)),
    Err(e) => {
      error!("list_email_logs error: {e}");
      Err(ApiError::Internal("Failed to read email logs"))
    }
  }
}

/// `GET /api/email-logs/stats`.
pub async fn email_log_stats(
  State(state): State<AppState>,
) -> Result<Json<Vec<SourcePageCount>>, ApiError> {
  let store = state.store.as_ref().ok_or(ApiError::StoreDisabled)?;
  match store.count_by_source_page().await {
    Ok(counts) => Ok(Json(counts)),
    Err(e) => {
      error!("email_log_stats error: {e}");
      Err(ApiError::Internal("Failed to read email logs"))
    }
  }
}
