//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist each slot as one row of `kv_entries`.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Only connections opened via `open_db`/`open_db_in_memory` are accepted.
//! - `set_raw` is an upsert; a slot never has more than one row.

use super::{KeyValueStore, StorageKey, StoreResult};
use crate::db::ensure_store_ready;
use rusqlite::{Connection, OptionalExtension};

/// Durable store over a borrowed SQLite connection.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - Returns `StoreError::Db` when the connection schema is not ready.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_ready(conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get_raw(&self, key: StorageKey) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: StorageKey, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            [key.as_str(), value],
        )?;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key.as_str()])?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv_entries;", [])?;
        Ok(())
    }
}
