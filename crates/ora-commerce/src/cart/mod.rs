//! Shopping cart module.
//!
//! Contains the persisted cart and its pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, DEFAULT_CART_KEY, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartSummary, LinePricing};
