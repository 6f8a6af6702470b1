use std::collections::BTreeSet;
use tracing::warn;

use super::{Storage, StorageError};
use crate::domain::Theme;

pub const FAVORITES_KEY: &str = "airbnb_favs";
pub const THEME_KEY: &str = "theme";

/// Favorited listing ids. Membership only; order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    ids: BTreeSet<i64>,
}

impl Favorites {
    /// Reads the persisted JSON array. Unreadable or malformed content
    /// starts an empty set rather than failing startup.
    pub fn load(store: &dyn Storage) -> Self {
        let raw = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!(error = %e, "could not read favorites, starting empty");
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(e) => {
                warn!(error = %e, "malformed favorites in store, starting empty");
                Self::default()
            }
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &BTreeSet<i64> {
        &self.ids
    }

    /// Flips membership of `id` and writes the whole set back.
    /// Returns whether the id is a favorite afterwards. The in-memory set
    /// changes even when the write fails.
    pub fn toggle(&mut self, id: i64, store: &mut dyn Storage) -> Result<bool, StorageError> {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        let encoded = serde_json::to_string(&self.ids)?;
        store.set(FAVORITES_KEY, &encoded)?;
        Ok(now_favorite)
    }
}

/// Saved theme, or light. Accepts the JSON form (`"dark"`) and a bare value.
pub fn load_theme(store: &dyn Storage) -> Theme {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Theme::default(),
        Err(e) => {
            warn!(error = %e, "could not read theme preference");
            return Theme::default();
        }
    };

    serde_json::from_str::<Theme>(&raw)
        .ok()
        .or_else(|| serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).ok())
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme, store: &mut dyn Storage) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(&theme)?;
    store.set(THEME_KEY, &encoded)
}
