//! In-memory store, the stand-in for browser local storage in tests and
//! embedded hosts.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{CacheError, KeyValueStore};

/// A process-local key-value store with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once keys plus values exceed
    /// `limit` bytes, like a full browser storage partition.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.len())
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }

    /// Remove every key.
    pub fn clear(&self) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.clear();
        Ok(())
    }

    fn poisoned() -> CacheError {
        CacheError::StoreError("memory store lock poisoned".to_string())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let used = others + key.len() + value.len();
            if used > limit {
                return Err(CacheError::QuotaExceeded { used, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.exists("k").unwrap());

        store.delete("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        assert!(store.is_empty().unwrap());

        store.set("a", "1").unwrap();
        store.clear().unwrap();
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_poisoned_lock_is_an_error_everywhere() {
        let store = std::sync::Arc::new(MemoryStore::new());
        store.set("k", "v").unwrap();

        let writer = std::sync::Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = writer.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(store.len(), Err(CacheError::StoreError(_))));
        assert!(store.is_empty().is_err());
        assert!(store.clear().is_err());
        assert!(store.get("k").is_err());
        assert!(store.set("k", "w").is_err());
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_quota_rejects_large_write() {
        let store = MemoryStore::with_quota(8);
        store.set("k", "1234").unwrap();

        let result = store.set("other", "123456789");
        assert!(matches!(result, Err(CacheError::QuotaExceeded { .. })));
        assert!(store.get("other").unwrap().is_none());
    }

    #[test]
    fn test_quota_counts_replacement_once() {
        let store = MemoryStore::with_quota(6);
        store.set("k", "12345").unwrap();
        // Overwriting the same key must not count the old value.
        store.set("k", "54321").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("54321"));
    }

    #[test]
    fn test_keys() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
