//! Append-only store of tracking events.

use crate::{
    error::StoreError,
    models::log::{log_entry::LogEntry, log_filter::LogFilter, source_page_count::SourcePageCount},
};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Handle to the `email_logs` table. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct EmailLogStore {
    pool: SqlitePool,
}

impl EmailLogStore {
    /// Connect to `db_url` and run migrations.
    pub async fn connect(db_url: &str) -> Result<Self, StoreError> {
        let pool = super::connect(db_url).await?;
        Ok(Self { pool })
    }

    /// Append one event and return its id. The timestamp is taken here.
    pub async fn insert(&self, subject: &str, source_page: &str) -> Result<i64, StoreError> {
        let res = sqlx::query("INSERT INTO email_logs (timestamp, subject, source_page) VALUES (?, ?, ?)")
            .bind(db_timestamp(Utc::now()))
            .bind(subject)
            .bind(source_page)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Entries matching every set predicate of `filter`, newest first.
    pub async fn query(
        &self,
        filter: &LogFilter,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<LogEntry>, StoreError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, timestamp, subject, source_page FROM email_logs WHERE 1 = 1",
        );
        if let Some(page) = &filter.source_page {
            qb.push(" AND source_page = ").push_bind(page.clone());
        }
        if let Some(start) = filter.start_time {
            qb.push(" AND timestamp >= ").push_bind(db_timestamp(start));
        }
        if let Some(end) = filter.end_time {
            qb.push(" AND timestamp <= ").push_bind(db_timestamp(end));
        }
        qb.push(" ORDER BY timestamp DESC, id DESC");

        // SQLite only accepts OFFSET after LIMIT; -1 means unbounded.
        if limit.is_some() || offset.is_some() {
            qb.push(" LIMIT ")
                .push_bind(limit.map(i64::from).unwrap_or(-1))
                .push(" OFFSET ")
                .push_bind(i64::from(offset.unwrap_or(0)));
        }

        let rows = qb.build_query_as::<LogEntry>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Number of events per source page, most clicked first.
    pub async fn count_by_source_page(&self) -> Result<Vec<SourcePageCount>, StoreError> {
        let rows = sqlx::query_as::<_, SourcePageCount>(
            "SELECT source_page, COUNT(*) AS count FROM email_logs GROUP BY source_page ORDER BY count DESC, source_page ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Close the pool. Every later call fails with a storage fault.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// Fixed-width UTC text so that string order in SQLite equals time order.
fn db_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
