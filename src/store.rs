//! Storage handle: one SQLite connection for the process lifetime, handed out as per-request sessions.

use crate::error::{AppError, ConfigError};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use std::str::FromStr;

const ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

/// Owns the shared connection. Cheap to clone; clones refer to the same connection.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the store at `database_url` (e.g. `sqlite://sql_app.db` or `sqlite::memory:`).
    ///
    /// The pool is pinned to exactly one connection that is never idled out or recycled, so
    /// an in-memory database survives for as long as the store does.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        tracing::info!(database_url, "storage connected");
        Ok(Store { pool })
    }

    /// Create the `items` table if it does not exist.
    pub async fn ensure_items_table(&self) -> Result<(), AppError> {
        sqlx::query(ITEMS_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Acquire a session bound to the shared connection. Waits while another session holds it.
    pub async fn open_session(&self) -> Result<Session, AppError> {
        let conn = self.pool.acquire().await?;
        tracing::trace!("session opened");
        Ok(Session { conn })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

/// A unit of work for one request. The connection goes back to the store when the
/// session is closed or dropped, whichever comes first.
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}
