//! Key-value persistence layer for the Ora storefront engine.
//!
//! The engine never talks to a concrete storage technology. It talks to the
//! [`KeyValueStore`] port, which stores string values under string keys, the
//! same contract browser local storage offers. [`Cache`] layers automatic
//! JSON serialization on top of any store.
//!
//! # Example
//!
//! ```rust
//! use ora_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Entry {
//!     item_id: String,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("ora_artifacts_cart", &vec![Entry { item_id: "a1".into(), quantity: 2 }]).unwrap();
//!
//! let entries: Option<Vec<Entry>> = cache.get("ora_artifacts_cart").unwrap();
//! assert_eq!(entries.unwrap()[0].quantity, 2);
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
