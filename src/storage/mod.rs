//! Keyed string store for browser-style preferences, plus the two values
//! kept in it: the favorites set and the theme.

mod favorites;
mod sqlite;

pub use favorites::{load_theme, save_theme, Favorites, FAVORITES_KEY};
pub use sqlite::{init_store, SqliteStorage};

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Open store failed: {0}")]
    Open(String),
    #[error("Store query failed: {0}")]
    Query(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(String),
    #[error("Encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Store unavailable")]
    Unavailable,
}

/// Port over a string key-value store scoped to one user.
/// Values are JSON-encoded by the callers.
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store used by tests and as a fallback when no database is configured.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
