//! Key-value persistence collaborator.
//!
//! The engine only needs three string operations; anything able to provide
//! them (SQLite, an in-memory map, a remote store) can back the records.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::ops::Deref;

pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

impl<T: Deref> KeyValueStore for T
where
    T::Target: KeyValueStore,
{
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.deref().get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.deref().set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.deref().remove_item(key)
    }
}

/// [`KeyValueStore`] over the `kv` table.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// The pool must already carry the schema (see [`DbPool::open_initialized`]).
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_initialized(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Number of day entries (the marker is not counted).
    pub fn day_count(&self) -> AppResult<i64> {
        let count = self.pool.conn.query_row(
            "SELECT COUNT(*) FROM kv
             WHERE key GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]'",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl KeyValueStore for SqliteKv {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")
            .map_err(|e| AppError::persistence("read", key, e))?;

        stmt.query_row([key], |row| row.get::<_, String>(0))
            .optional()
            .map_err(|e| AppError::persistence("read", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, Local::now().to_rfc3339()],
            )
            .map_err(|e| AppError::persistence("write", key, e))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| AppError::persistence("remove", key, e))?;
        Ok(())
    }
}
