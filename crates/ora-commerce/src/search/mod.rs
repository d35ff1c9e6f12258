//! Search module.
//!
//! Filtering, sorting, facet counts, active-filter chips and pagination over
//! the catalogs.

mod chips;
mod engine;
mod facets;
pub mod presets;
mod results;
mod sort;
mod state;

pub use chips::{remove_one, ChipTarget, FilterChip};
pub use engine::{
    CatalogEngine, CatalogEngineBuilder, FacetDef, FacetExtractor, FacetOption, SelectMode,
};
pub use facets::{FacetSummary, FacetValue};
pub use results::{paginate, Pagination, ResultPage};
pub use sort::{sort_items, SortKey};
pub use state::{DatePreset, FilterState, PriceRange, Selection, ALL_VALUE};
