//! JSON envelopes returned by the API.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiSuccess {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiSuccess {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ApiFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            timestamp: None,
        }
    }

    pub fn stamped(error: impl Into<String>) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Self::new(error)
        }
    }
}
