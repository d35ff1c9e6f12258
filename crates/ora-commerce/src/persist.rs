//! Write-through persistence of session state.

use ora_cache::{Cache, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// One record in a key-value store, read once and rewritten on each change.
#[derive(Debug, Clone)]
pub(crate) struct Slot<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KeyValueStore> Slot<S> {
    pub(crate) fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn store(&self) -> &S {
        self.cache.store()
    }

    /// Read the record. Missing or malformed records read as the default.
    pub(crate) fn restore<T: DeserializeOwned + Default>(&self) -> T {
        self.cache.get_or_default(&self.key)
    }

    /// Overwrite the record. Failures are logged and otherwise dropped; the
    /// in-memory state stays authoritative.
    pub(crate) fn persist<T: Serialize + ?Sized>(&self, value: &T) {
        if let Err(e) = self.cache.set(&self.key, value) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist state");
        }
    }
}
