//! Catalog filtering, cart and favorites engine for the Ora storefront.
//!
//! This crate holds the interactive state behind every catalog page:
//!
//! - **Catalog**: courses, artifacts, blog posts, library items, the
//!   student's curriculum and the teacher directory
//! - **Search**: one generic filter/sort engine configured per page, facet
//!   counts, active-filter chips, pagination
//! - **Cart**: artifact cart persisted through a key-value store
//! - **Favorites**: toggle sets for favorites, bookmarks and subscriptions
//! - **View**: a catalog page that recomputes its results on every change
//!
//! # Example
//!
//! ```rust
//! use ora_cache::MemoryStore;
//! use ora_commerce::prelude::*;
//!
//! let storefront = Storefront::seeded().unwrap();
//! let engine = presets::artifact_engine(&PricingConfig::default()).unwrap();
//!
//! let state = FilterState::new().with_values("stone", ["garnet"]);
//! let found = engine.query(storefront.artifacts.all(), &state, SortKey::PriceAsc);
//! assert_eq!(found[0].id.as_str(), "a6");
//!
//! let store = MemoryStore::new();
//! let mut cart = Cart::open(&store);
//! cart.add("a6");
//! cart.add("a6");
//! assert_eq!(cart.total_price(&storefront), Money::rub(24_800));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod search;
pub mod view;

mod persist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Artifact, BlogPost, Catalog, CatalogItem, Course, CurriculumCourse, ItemKind,
        KindLookup, LibraryItem, PriceLookup, Storefront, Teacher,
    };

    // Config
    pub use crate::config::{PricingConfig, StorageConfig, StorefrontConfig};

    // Cart and favorites
    pub use crate::cart::{Cart, CartEntry, CartSummary};
    pub use crate::favorites::ToggleSet;

    // Search
    pub use crate::search::{
        presets, CatalogEngine, DatePreset, FacetDef, FilterChip, FilterState, Pagination,
        PriceRange, SelectMode, Selection, SortKey,
    };

    pub use crate::view::CatalogView;
}
