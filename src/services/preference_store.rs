//! Persistent key-value store for user preferences.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};

use crate::database::connection::Database;
use crate::types::errors::StoreError;

/// Read and write single preference values by key.
pub trait PreferenceStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preference store backed by the `preferences` table.
pub struct SqlitePreferenceStore {
    db: Arc<Database>,
}

impl SqlitePreferenceStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.db.connection().execute(
            "INSERT OR REPLACE INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )?;
        tracing::debug!(key, value, "preference written");
        Ok(())
    }
}
