//! Persisted record store with connection pooling
//!
//! Khata keeps three independent JSON documents in a single `records`
//! table:
//! - `expenses` - date -> ordered list of amounts
//! - `config` - daily limit setting
//! - `streak` - streak counters and last update date
//!
//! A missing or malformed document is treated as absent and replaced by
//! its documented default on load; corruption never reaches callers as an
//! error.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::debug;

use crate::error::Result;

mod records;

pub use records::{CONFIG_RECORD, EXPENSES_RECORD, STREAK_RECORD};

#[cfg(test)]
mod tests;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open (or create) the database at the given path
    pub fn open(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because every
    /// pooled connection would otherwise see its own empty database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("khata_test_{}_{}.db", std::process::id(), id));
        let path = path.to_string_lossy().into_owned();

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::open(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the writer
            -- Note: creates -wal and -shm sidecar files alongside the database
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for most power-loss scenarios
            PRAGMA synchronous = NORMAL;

            -- Key-value record documents (expenses, config, streak)
            CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        debug!("Database ready at {}", self.db_path);
        Ok(())
    }
}
