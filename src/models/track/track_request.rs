//! Validated body of a tracking request.

use serde::Serialize;

/// Only ever built by [`crate::validate::validate_track_request`], so both
/// fields are known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRequest {
    pub subject: String,
    pub source_page: String,
}
