//! `petcare-storage` — on-device key-value persistence.
//!
//! Collections are stored as JSON blobs under opaque string keys. The store
//! never surfaces errors to callers: reads that fail resolve to `None` (and
//! ultimately to seed data), writes that fail are logged and dropped. A
//! context without a persistent backend uses [`NullStore`].

pub mod memory;
pub mod sqlite;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use memory::{MemoryStore, NullStore};
pub use sqlite::SqliteStore;

/// Synchronous key-value backend.
pub trait KeyValueStore: Send + Sync {
    /// Raw stored value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are logged, never returned.
    fn put(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// Load and deserialize `key`, falling back to `seed` when the key is absent
/// or its value does not parse.
pub fn load_or<T, F>(store: &dyn KeyValueStore, key: &str, seed: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "stored value failed to parse, using seed data");
                seed()
            }
        },
        None => seed(),
    }
}

/// Serialize and write `value` under `key`.
pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.put(key, &raw),
        Err(err) => {
            tracing::error!(key, %err, "failed to serialize value for storage");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "rex".into(),
            count: 3,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        save(&store, "sample", &sample());
        let loaded: Sample = load_or(&store, "sample", || panic!("seed must not run"));
        assert_eq!(loaded, sample());
    }

    #[test]
    fn absent_key_falls_back_to_seed() {
        let store = MemoryStore::new();
        let loaded: Sample = load_or(&store, "missing", sample);
        assert_eq!(loaded, sample());
    }

    #[test]
    fn corrupt_value_falls_back_to_seed() {
        let store = MemoryStore::new();
        store.put("sample", "{not json");
        let loaded: Sample = load_or(&store, "sample", sample);
        assert_eq!(loaded, sample());
    }

    #[test]
    fn null_store_is_a_silent_no_op() {
        let store = NullStore;
        store.put("key", "value");
        assert_eq!(store.get("key"), None);
        store.remove("key");
        let loaded: Sample = load_or(&store, "key", sample);
        assert_eq!(loaded, sample());
    }
}
