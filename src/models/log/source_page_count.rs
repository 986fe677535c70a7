//! One row of the per-page click aggregation.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SourcePageCount {
    pub source_page: String,
    pub count: i64,
}
