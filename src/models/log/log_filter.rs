//! Predicates for reading tracking events back.

use chrono::{DateTime, Utc};

/// All set fields must match. Time bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub source_page: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl LogFilter {
    pub fn source_page(page: impl Into<String>) -> Self {
        Self {
            source_page: Some(page.into()),
            ..Self::default()
        }
    }
}
