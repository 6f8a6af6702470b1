use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::fs;
use tracing::info;

use super::{Storage, StorageError};

// Thread-local connection slot, keyed by the path it was opened for.
thread_local! {
    static STORE_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

/// SQLite-backed `Storage`. Holds only the path; each worker thread opens
/// its own connection on first use.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    path: String,
}

impl SqliteStorage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError>,
    {
        STORE_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StorageError::Open(e.to_string()))?;
                    *slot = Some((self.path.clone(), conn));
                }
                let (_, conn) = slot.as_mut().ok_or(StorageError::Unavailable)?;
                f(conn)
            })
            .map_err(|_| StorageError::Unavailable)?
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_conn(|conn| {
            let value = conn
                .query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
                    row.get::<_, String>(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value, now],
            )?;
            Ok(())
        })
    }
}

/// Initialize the store from a SQL schema file
pub fn init_store(store: &SqliteStorage, schema_path: &str) -> Result<(), StorageError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| StorageError::Schema(format!("Failed to read schema file: {e}")))?;

    store.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| StorageError::Schema(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    info!(schema = schema_path, "store initialized");
    Ok(())
}
