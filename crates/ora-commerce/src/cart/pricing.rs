//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::catalog::PriceLookup;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of priced lines.
    pub total: Money,
    /// Total quantity across priced lines.
    pub priced_count: u64,
    pub lines: Vec<LinePricing>,
    /// Entries left out of the total: unknown to the catalog or priced in
    /// another currency.
    pub unpriced: Vec<ItemId>,
}

impl CartSummary {
    pub(crate) fn compute(
        entries: &[CartEntry],
        prices: &impl PriceLookup,
        currency: Currency,
    ) -> Self {
        let mut summary = Self {
            total: Money::zero(currency),
            priced_count: 0,
            lines: Vec::with_capacity(entries.len()),
            unpriced: Vec::new(),
        };

        for entry in entries {
            let Some(unit_price) = prices.price_of(&entry.item_id) else {
                tracing::debug!(item = %entry.item_id, "Skipping cart entry with no price");
                summary.unpriced.push(entry.item_id.clone());
                continue;
            };
            if unit_price.currency != currency {
                tracing::warn!(
                    item = %entry.item_id,
                    expected = currency.code(),
                    got = unit_price.currency.code(),
                    "Skipping cart entry priced in another currency"
                );
                summary.unpriced.push(entry.item_id.clone());
                continue;
            }

            let subtotal = unit_price
                .try_multiply(i64::from(entry.quantity))
                .and_then(|line| summary.total.try_add(&line).map(|total| (line, total)));
            let Some((subtotal, total)) = subtotal else {
                tracing::warn!(item = %entry.item_id, "Cart total overflow, entry skipped");
                summary.unpriced.push(entry.item_id.clone());
                continue;
            };

            summary.total = total;
            summary.priced_count += u64::from(entry.quantity);
            summary.lines.push(LinePricing {
                item_id: entry.item_id.clone(),
                unit_price,
                quantity: entry.quantity,
                subtotal,
            });
        }

        summary
    }

    /// Whether every entry contributed to the total.
    pub fn is_complete(&self) -> bool {
        self.unpriced.is_empty()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub item_id: ItemId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Prices(HashMap<&'static str, Money>);

    impl PriceLookup for Prices {
        fn price_of(&self, id: &ItemId) -> Option<Money> {
            self.0.get(id.as_str()).copied()
        }
    }

    fn entry(id: &str, quantity: u32) -> CartEntry {
        CartEntry {
            item_id: ItemId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_total_skips_unknown_ids() {
        let prices = Prices(HashMap::from([
            ("a1", Money::rub(4500)),
            ("a2", Money::rub(3200)),
        ]));
        let entries = vec![entry("a1", 2), entry("gone", 5), entry("a2", 1)];

        let summary = CartSummary::compute(&entries, &prices, Currency::RUB);
        assert_eq!(summary.total, Money::rub(12_200));
        assert_eq!(summary.priced_count, 3);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.unpriced, vec![ItemId::new("gone")]);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_other_currency_is_skipped() {
        let prices = Prices(HashMap::from([
            ("a1", Money::rub(100)),
            ("u1", Money::whole(10, Currency::USD)),
        ]));
        let entries = vec![entry("a1", 1), entry("u1", 1)];

        let summary = CartSummary::compute(&entries, &prices, Currency::RUB);
        assert_eq!(summary.total, Money::rub(100));
        assert_eq!(summary.unpriced.len(), 1);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let prices = Prices(HashMap::new());
        let summary = CartSummary::compute(&[], &prices, Currency::RUB);
        assert!(summary.total.is_zero());
        assert!(summary.is_complete());
    }
}
