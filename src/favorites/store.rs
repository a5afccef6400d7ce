//! Persisted favorites list
//!
//! Tracks which catalog items the user has marked as favorite, across
//! sessions, as a JSON-encoded array of ids under a single well-known
//! storage key.

use std::sync::Arc;
use tracing::warn;

use super::storage::Storage;

/// Storage key holding the JSON-encoded list of favorite ids.
pub const FAVORITES_KEY: &str = "favorite_movies";

/// Result of a [`FavoritesStore::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// The NEW membership state: `true` means the id is now a favorite.
    pub favorite: bool,
    /// Whether the updated list was written back to storage. When `false`
    /// the in-memory result is still valid but will not survive a restart.
    pub persisted: bool,
}

/// An ordered, duplicate-free list of favorite ids backed by a [`Storage`].
///
/// Reads decode the stored JSON on every access; a missing key, malformed
/// JSON, or any shape other than an array of strings all yield the empty
/// list rather than an error. Mutations write the updated list back
/// synchronously. There is no cross-process coordination: concurrent
/// toggles resolve last-write-wins, which is accepted for a favorites list.
pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All favorite ids in insertion order.
    pub fn get_all(&self) -> Vec<String> {
        let raw = match self.storage.read(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites, treating as empty: {}", e);
                return Vec::new();
            }
        };
        decode(&raw)
    }

    /// Whether `id` is currently a favorite. No side effects.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.get_all().iter().any(|f| f == id)
    }

    /// Flip the membership of `id` and persist the result.
    ///
    /// Removes every occurrence of `id` when present, appends it at the end
    /// otherwise, and returns the new state. A failed write is logged and
    /// reported through [`Toggle::persisted`] instead of failing the call.
    pub fn toggle(&self, id: &str) -> Toggle {
        if id.is_empty() {
            warn!("Ignoring toggle of empty favorite id");
            return Toggle {
                favorite: false,
                persisted: false,
            };
        }

        let mut favorites = self.get_all();
        let favorite = if favorites.iter().any(|f| f == id) {
            favorites.retain(|f| f != id);
            false
        } else {
            favorites.push(id.to_string());
            true
        };

        let persisted = match serde_json::to_string(&favorites) {
            Ok(encoded) => match self.storage.write(FAVORITES_KEY, &encoded) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Failed to persist favorites: {}", e);
                    false
                }
            },
            Err(e) => {
                warn!("Failed to encode favorites: {}", e);
                false
            }
        };

        Toggle { favorite, persisted }
    }
}

/// Decode the stored value, falling back to empty on any malformed input.
fn decode(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(favorites) => favorites,
        Err(e) => {
            warn!("Malformed favorites value, treating as empty: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::storage::{FileStorage, MemoryStorage};

    fn memory_store() -> FavoritesStore {
        FavoritesStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = memory_store();
        assert!(store.get_all().is_empty());
        assert!(!store.is_favorite("550"));
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let store = memory_store();

        let on = store.toggle("550");
        assert!(on.favorite);
        assert!(on.persisted);
        assert!(store.is_favorite("550"));

        let off = store.toggle("550");
        assert!(!off.favorite);
        assert!(off.persisted);
        assert!(!store.is_favorite("550"));
    }

    #[test]
    fn test_membership_follows_toggle_parity() {
        let store = memory_store();
        for round in 1..=5 {
            store.toggle("42");
            assert_eq!(store.is_favorite("42"), round % 2 == 1);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = memory_store();
        store.toggle("3");
        store.toggle("1");
        store.toggle("2");
        assert_eq!(store.get_all(), vec!["3", "1", "2"]);

        // Untoggling drops the id without disturbing the others; toggling
        // it again appends at the end.
        store.toggle("1");
        store.toggle("1");
        assert_eq!(store.get_all(), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_no_duplicates_for_any_interleaving() {
        let store = memory_store();
        for id in ["a", "b", "a", "a", "b", "a"] {
            store.toggle(id);
            let all = store.get_all();
            let unique: std::collections::HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len());
        }
    }

    #[test]
    fn test_survives_restart_against_same_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let store = FavoritesStore::new(storage.clone());
        store.toggle("550");
        store.toggle("680");

        // A fresh store instance over the same backing storage sees the
        // same list.
        let reopened = FavoritesStore::new(storage);
        assert_eq!(reopened.get_all(), vec!["550", "680"]);
    }

    #[test]
    fn test_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        let store = FavoritesStore::new(Arc::new(FileStorage::new(dir.path())));
        store.toggle("550");

        let reopened = FavoritesStore::new(Arc::new(FileStorage::new(dir.path())));
        assert!(reopened.is_favorite("550"));
    }

    #[test]
    fn test_malformed_value_reads_as_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(FAVORITES_KEY, "not json").unwrap();

        let store = FavoritesStore::new(storage.clone());
        assert!(store.get_all().is_empty());

        // Same for valid JSON of the wrong shape.
        storage.write(FAVORITES_KEY, "{\"id\": 1}").unwrap();
        assert!(store.get_all().is_empty());
        storage.write(FAVORITES_KEY, "[1, 2, 3]").unwrap();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_toggle_recovers_from_malformed_value() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(FAVORITES_KEY, "not json").unwrap();

        let store = FavoritesStore::new(storage);
        let result = store.toggle("550");
        assert!(result.favorite);
        assert_eq!(store.get_all(), vec!["550"]);
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let store = memory_store();
        let result = store.toggle("");
        assert!(!result.favorite);
        assert!(!result.persisted);
        assert!(store.get_all().is_empty());
    }
}
