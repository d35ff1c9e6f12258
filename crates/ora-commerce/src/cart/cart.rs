//! Artifact cart with write-through persistence.

use ora_cache::KeyValueStore;
use serde::{Deserialize, Serialize};

use crate::cart::CartSummary;
use crate::catalog::PriceLookup;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::persist::Slot;

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "ora_artifacts_cart";

/// Maximum quantity allowed per entry.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// One cart line as persisted: `{"itemId": "a1", "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub item_id: ItemId,
    /// Always at least 1.
    pub quantity: u32,
}

/// A shopping cart.
///
/// Entries keep the order items were first added. Every mutating call
/// rewrites the whole cart under its storage key; a failed write is logged
/// and the in-memory cart stays authoritative.
#[derive(Debug)]
pub struct Cart<S: KeyValueStore> {
    entries: Vec<CartEntry>,
    currency: Currency,
    slot: Slot<S>,
}

impl<S: KeyValueStore> Cart<S> {
    /// Restore the cart stored under [`DEFAULT_CART_KEY`].
    pub fn open(store: S) -> Self {
        Self::load(store, DEFAULT_CART_KEY)
    }

    /// Restore the cart stored under `key`.
    ///
    /// A missing or malformed record yields an empty cart. Zero quantities
    /// are dropped and repeated ids merged.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let slot = Slot::new(store, key);
        let stored: Vec<CartEntry> = slot.restore();

        let mut entries: Vec<CartEntry> = Vec::with_capacity(stored.len());
        for entry in stored.into_iter().filter(|e| e.quantity > 0) {
            match entries.iter_mut().find(|e| e.item_id == entry.item_id) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(entry.quantity)
                        .min(MAX_QUANTITY_PER_ITEM)
                }
                None => entries.push(CartEntry {
                    quantity: entry.quantity.min(MAX_QUANTITY_PER_ITEM),
                    ..entry
                }),
            }
        }

        tracing::debug!(key = slot.key(), entries = entries.len(), "Restored cart");
        Self {
            entries,
            currency: Currency::default(),
            slot,
        }
    }

    /// Currency totals are computed in. Prices in other currencies are
    /// left out of totals.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of `id`. Returns the new quantity.
    pub fn add(&mut self, id: impl Into<ItemId>) -> u32 {
        let id = id.into();
        let quantity = match self.entries.iter_mut().find(|e| e.item_id == id) {
            Some(entry) => {
                if entry.quantity >= MAX_QUANTITY_PER_ITEM {
                    tracing::debug!(item = %id, "Quantity limit reached");
                }
                entry.quantity = (entry.quantity + 1).min(MAX_QUANTITY_PER_ITEM);
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry {
                    item_id: id,
                    quantity: 1,
                });
                1
            }
        };
        self.save();
        quantity
    }

    /// Change the quantity of `id` by `delta`.
    ///
    /// A result of zero or less removes the entry. Ids not in the cart are
    /// left alone. Returns the new quantity, 0 when the entry is gone.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> u32 {
        let Some(index) = self.position(id) else {
            tracing::debug!(item = id, "Ignoring quantity change for item not in cart");
            return 0;
        };

        let current = i64::from(self.entries[index].quantity);
        let next = current.saturating_add(delta);
        let quantity = if next <= 0 {
            self.entries.remove(index);
            0
        } else {
            let capped = next.min(i64::from(MAX_QUANTITY_PER_ITEM)) as u32;
            self.entries[index].quantity = capped;
            capped
        };
        self.save();
        quantity
    }

    /// Remove `id` regardless of quantity. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        };
        self.save();
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }

    /// Quantity of `id`, 0 when absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.position(id)
            .map(|i| self.entries[i].quantity)
            .unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of `price × quantity` over entries with a known price.
    pub fn total_price(&self, prices: &impl PriceLookup) -> Money {
        self.summary(prices).total
    }

    /// Per-line pricing breakdown.
    pub fn summary(&self, prices: &impl PriceLookup) -> CartSummary {
        CartSummary::compute(&self.entries, prices, self.currency)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        self.slot.store()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.item_id.as_str() == id)
    }

    fn save(&self) {
        self.slot.persist(&self.entries);
    }
}
