//! Database access layer
//!
//! Every operation opens its own connection, runs one statement and closes
//! the connection again, whether the statement succeeded or not. There is
//! no pool and nothing is reused across calls.

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod queries;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow};
use thiserror::Error;

/// Data-access error types
#[derive(Debug, Error)]
pub enum DbError {
    /// Store unreachable, bad URL or credentials
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// Malformed statement, missing object or undecodable row
    #[error("Database query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl DbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::Connection(_))
    }
}

/// Result type for data-access operations
pub type DbResult<T> = Result<T, DbError>;

/// Connection parameters, resolved once at process start
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Parse a `sqlite://` URL. Connections are opened read-only and never
    /// create a missing database file.
    pub fn new(url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbError::Connection)?
            .read_only(true)
            .create_if_missing(false)
            .disable_statement_logging();
        Ok(Self { options })
    }

    async fn connect(&self) -> DbResult<SqliteConnection> {
        self.options.connect().await.map_err(DbError::Connection)
    }

    async fn release(conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close database connection");
        }
    }

    /// Run one statement and decode all rows
    pub async fn fetch_all<T>(&self, sql: &str) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, T>(sql).fetch_all(&mut conn).await;
        Self::release(conn).await;
        result.map_err(DbError::Query)
    }

    /// Run one statement that yields exactly one row
    pub async fn fetch_one<T>(&self, sql: &str) -> DbResult<T>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, T>(sql).fetch_one(&mut conn).await;
        Self::release(conn).await;
        result.map_err(DbError::Query)
    }

    /// Open and immediately close a connection
    pub async fn ping(&self) -> bool {
        match self.connect().await {
            Ok(conn) => {
                Self::release(conn).await;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Database ping failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::FixtureDb;

    #[tokio::test]
    async fn test_unreachable_database_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("missing/shop.db").display());
        let db = Database::new(&url).unwrap();

        let err = db.fetch_all::<(i64,)>("SELECT 1").await.unwrap_err();
        assert!(err.is_connection(), "expected connection error, got {err}");
        assert!(!db.ping().await);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_error() {
        let fixture = FixtureDb::empty().await;
        let db = fixture.database();

        let err = db
            .fetch_all::<(i64,)>("SELECT COUNT(*) FROM NoSuchTable")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Query(_)));
    }

    #[tokio::test]
    async fn test_connection_is_released_after_failure() {
        let fixture = FixtureDb::empty().await;
        let db = fixture.database();

        for _ in 0..3 {
            assert!(db.fetch_all::<(i64,)>("SELEC 1").await.is_err());
        }
        let rows: Vec<(i64,)> = db.fetch_all("SELECT 1").await.unwrap();
        assert_eq!(rows, vec![(1,)]);
    }

    #[tokio::test]
    async fn test_connections_are_read_only() {
        let fixture = FixtureDb::empty().await;
        let db = fixture.database();

        let err = db
            .fetch_all::<(i64,)>("INSERT INTO Categories (CategoryName) VALUES ('x') RETURNING CategoryID")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Query(_)));
    }
}
