//! Persisted id sets with toggle semantics.

use ora_cache::KeyValueStore;

use crate::catalog::{Catalog, CatalogItem, ItemKind, KindLookup};
use crate::ids::ItemId;
use crate::persist::Slot;

pub const DEFAULT_FAVORITES_KEY: &str = "ora_favorites";
pub const DEFAULT_BOOKMARKS_KEY: &str = "ora_blog_bookmarks";
pub const DEFAULT_SUBSCRIPTIONS_KEY: &str = "ora_subscriptions";

/// A set of item ids persisted as a JSON array of strings.
///
/// Used for favorites, blog bookmarks and course subscriptions. Ids of
/// different kinds share one set; per-kind views resolve kinds through a
/// [`KindLookup`]. Ids keep the order they were added in.
#[derive(Debug)]
pub struct ToggleSet<S: KeyValueStore> {
    ids: Vec<ItemId>,
    slot: Slot<S>,
}

impl<S: KeyValueStore> ToggleSet<S> {
    /// Restore the set stored under `key`. Missing or malformed records
    /// yield an empty set; repeated ids are collapsed.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let slot = Slot::new(store, key);
        let stored: Vec<ItemId> = slot.restore();

        let mut ids: Vec<ItemId> = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        tracing::debug!(key = slot.key(), ids = ids.len(), "Restored id set");
        Self { ids, slot }
    }

    pub fn favorites(store: S) -> Self {
        Self::load(store, DEFAULT_FAVORITES_KEY)
    }

    pub fn bookmarks(store: S) -> Self {
        Self::load(store, DEFAULT_BOOKMARKS_KEY)
    }

    pub fn subscriptions(store: S) -> Self {
        Self::load(store, DEFAULT_SUBSCRIPTIONS_KEY)
    }

    /// Flip membership of `id`. Returns whether it is a member afterwards.
    pub fn toggle(&mut self, id: impl Into<ItemId>) -> bool {
        let id = id.into();
        let member = match self.ids.iter().position(|i| *i == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };
        self.save();
        member
    }

    /// Add `id`. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<ItemId>) -> bool {
        let id = id.into();
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        self.save();
        true
    }

    /// Drop `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i.as_str() != id);
        let removed = self.ids.len() < before;
        if removed {
            self.save();
        }
        removed
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i.as_str() == id)
    }

    /// Alias of [`ToggleSet::is_member`] for the favorites set.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.is_member(id)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.save();
    }

    /// Members whose resolved kind is `kind`. Ids no catalog knows are
    /// skipped.
    pub fn list_by_type(&self, kind: ItemKind, lookup: &impl KindLookup) -> Vec<&ItemId> {
        self.ids
            .iter()
            .filter(|id| match lookup.kind_of(id) {
                Some(found) => found == kind,
                None => {
                    tracing::debug!(item = %id, "Skipping orphaned id");
                    false
                }
            })
            .collect()
    }

    /// Members present in `catalog`, in catalog order.
    pub fn items_in<'c, T: CatalogItem>(&self, catalog: &'c Catalog<T>) -> Vec<&'c T> {
        catalog
            .iter()
            .filter(|item| self.is_member(item.id().as_str()))
            .collect()
    }

    fn save(&self) {
        self.slot.persist(&self.ids);
    }
}
