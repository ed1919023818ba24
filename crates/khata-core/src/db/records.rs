//! Record document operations
//!
//! Each record is one JSON document in the `records` table. Loads are
//! lenient: a document that fails to parse is logged and treated as
//! absent, so callers always get either a healthy value or the default.
//! Writes are upserts; a value is not considered durable until the write
//! returns Ok.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::Database;
use crate::error::Result;

/// Key for the per-day expense amounts document
pub const EXPENSES_RECORD: &str = "expenses";

/// Key for the daily-limit configuration document
pub const CONFIG_RECORD: &str = "config";

/// Key for the streak state document
pub const STREAK_RECORD: &str = "streak";

impl Database {
    /// Load a record document, treating malformed JSON as absent
    pub fn load_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let conn = self.conn()?;

        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM records WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(None),
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!("Discarding malformed '{}' record: {}", key, e);
                    Ok(None)
                }
            },
        }
    }

    /// Load a record document, substituting the default when it is missing
    /// or malformed
    ///
    /// The second element reports whether the default was substituted, so
    /// callers can distinguish a healthy read from a recovery.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<(T, bool)> {
        Ok(match self.load_record(key)? {
            Some(value) => (value, false),
            None => (T::default(), true),
        })
    }

    /// Write a record document (upsert)
    pub fn save_record<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO records (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
            "#,
            params![key, text],
        )?;

        Ok(())
    }
}
