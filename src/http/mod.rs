//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod consult;
pub mod contact;
pub mod logs;
pub mod track;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/track-email", post(track::track_email))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/email-logs", get(logs::list_email_logs))
        .route("/api/email-logs/stats", get(logs::email_log_stats))
        .route("/consult/:source_page", get(consult::consultation_redirect))
        .with_state(state)
}
