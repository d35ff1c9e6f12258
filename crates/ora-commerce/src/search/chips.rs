//! Active-filter chips: one removable tag per constraint in effect.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::search::{CatalogEngine, DatePreset, FilterState};

/// Which part of the state a chip stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipTarget {
    /// One selected value of one facet.
    Facet { facet: String, value: String },
    Price,
    Date,
    Search,
}

/// A removable summary tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub target: ChipTarget,
    pub label: String,
}

impl<T: CatalogItem> CatalogEngine<T> {
    /// One chip per active constraint.
    ///
    /// Facets come first in declaration order, each value in selection
    /// order, then price, date, and search. Selections on undeclared facets,
    /// a date preset on a page without a date filter, and a query on a page
    /// without search produce no chip since they do not filter.
    pub fn summarize(&self, state: &FilterState) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        for facet in self.facets() {
            for value in state.selection(facet.key()).values() {
                chips.push(FilterChip {
                    target: ChipTarget::Facet {
                        facet: facet.key().to_string(),
                        value: value.to_string(),
                    },
                    label: format!("{}: {}", facet.label(), facet.label_for(value)),
                });
            }
        }

        if let Some(range) = self.active_price_range(state) {
            chips.push(FilterChip {
                target: ChipTarget::Price,
                label: format!("Цена: {range}"),
            });
        }

        if let Some(preset) = self.active_date_preset(state) {
            chips.push(FilterChip {
                target: ChipTarget::Date,
                label: format!("Период: {}", preset.label()),
            });
        }

        if let Some(query) = self.active_search(state) {
            chips.push(FilterChip {
                target: ChipTarget::Search,
                label: format!("Поиск: «{query}»"),
            });
        }

        chips
    }

    /// Reset the dimension a chip stands for, leaving every other one.
    pub fn remove_chip(&self, state: &FilterState, chip: &FilterChip) -> FilterState {
        let mut next = remove_one(state, chip);
        if chip.target == ChipTarget::Price {
            next.price = self.price_bounds();
        }
        next
    }
}

/// Copy of `state` without the constraint `chip` stands for.
///
/// A price chip clears the range; use [`CatalogEngine::remove_chip`] to
/// restore the page's bounds instead.
pub fn remove_one(state: &FilterState, chip: &FilterChip) -> FilterState {
    state.without(chip)
}

impl FilterState {
    /// See [`remove_one`].
    pub fn without(&self, chip: &FilterChip) -> FilterState {
        let mut next = self.clone();
        match &chip.target {
            ChipTarget::Facet { facet, value } => next.deselect(facet, value),
            ChipTarget::Price => next.clear_price(),
            ChipTarget::Date => next.date = DatePreset::All,
            ChipTarget::Search => next.search.clear(),
        }
        next
    }
}
