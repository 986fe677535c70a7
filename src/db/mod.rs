//! Database helpers: connection, migrations and path handling.

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};

pub mod email_logs;

/// Open a pool for a sqlx SQLite URL and bring the schema up to date.
///
/// File databases get WAL journaling and up to five connections. In-memory
/// databases are held on a single connection that is never recycled, since
/// the data lives only as long as that connection.
pub async fn connect(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = is_memory_url(db_url);
    let db_url = ensure_sqlite_path(db_url);

    let mut opts = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);
    let mut pool = SqlitePoolOptions::new();
    if in_memory {
        pool = pool.max_connections(1).idle_timeout(None).max_lifetime(None);
    } else {
        opts = opts.journal_mode(SqliteJournalMode::Wal);
        pool = pool.max_connections(5);
    }

    let pool = pool.connect_with(opts).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Create the `email_logs` table and its indexes if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS email_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            subject TEXT NOT NULL CHECK (subject <> ''),
            source_page TEXT NOT NULL CHECK (source_page <> '')
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_email_logs_timestamp ON email_logs (timestamp)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_email_logs_source_page ON email_logs (source_page)",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub fn is_memory_url(db_url: &str) -> bool {
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))
        .unwrap_or(db_url);
    rest == ":memory:" || rest.starts_with(":memory:?")
}

/// Ensure the parent folder of a SQLite file URL exists.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") || is_memory_url(db_url) {
        return db_url.to_string();
    }
    let path_part = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path_only = match path_part.split_once('?') {
        Some((p, _)) => p,
        None => path_part,
    };
    if !path_only.is_empty() {
        if let Some(parent) = Path::new(path_only).parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
    }
    db_url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_memory_urls() {
        assert!(is_memory_url("sqlite://:memory:"));
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url(":memory:"));
        assert!(!is_memory_url("sqlite://emails.db"));
        assert!(!is_memory_url("sqlite://data/:memory:.db"));
    }

    #[test]
    fn creates_parent_directory_for_file_urls() {
        let dir = std::env::temp_dir().join(format!("consultrack-db-{}", std::process::id()));
        let file = dir.join("nested").join("emails.db");
        let url = format!("sqlite://{}", file.display());

        assert_eq!(ensure_sqlite_path(&url), url);
        assert!(file.parent().unwrap().is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect("sqlite://:memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let indexes: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'email_logs' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = indexes.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, ["idx_email_logs_source_page", "idx_email_logs_timestamp"]);
    }
}
