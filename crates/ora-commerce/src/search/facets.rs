//! Facet value counts for the filter sidebar.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::search::{CatalogEngine, FilterState, SelectMode};

/// Counts for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSummary {
    pub key: String,
    pub label: String,
    pub multi: bool,
    pub values: Vec<FacetValue>,
}

impl FacetSummary {
    pub fn selected(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter().filter(|v| v.selected)
    }
}

/// A single facet value and the number of items that would match with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

impl<T: CatalogItem> CatalogEngine<T> {
    /// Per-value counts for every declared facet.
    ///
    /// Each facet is counted against the items that pass every other
    /// constraint, so a count says how many items the value would show
    /// if picked. Closed facets list every option, including zero counts;
    /// open facets list the values present in the catalog, first seen first.
    pub fn facet_counts(&self, items: &[T], state: &FilterState) -> Vec<FacetSummary> {
        self.facets()
            .iter()
            .map(|facet| {
                let selection = state.selection(facet.key());
                let pool = self.filter_without(items, state, facet.key());

                let mut values: Vec<FacetValue> = if facet.is_open() {
                    let mut seen: Vec<FacetValue> = Vec::new();
                    for item in items {
                        for value in facet.values_of(item) {
                            if !seen.iter().any(|v| v.value == value) {
                                seen.push(FacetValue {
                                    value: value.to_string(),
                                    label: value.to_string(),
                                    count: 0,
                                    selected: selection.contains(value),
                                });
                            }
                        }
                    }
                    seen
                } else {
                    facet
                        .options()
                        .iter()
                        .map(|o| FacetValue {
                            value: o.value.clone(),
                            label: o.label.clone(),
                            count: 0,
                            selected: selection.contains(&o.value),
                        })
                        .collect()
                };

                for item in &pool {
                    for carried in facet.values_of(item) {
                        if let Some(v) = values.iter_mut().find(|v| v.value == carried) {
                            v.count += 1;
                        }
                    }
                }

                FacetSummary {
                    key: facet.key().to_string(),
                    label: facet.label().to_string(),
                    multi: facet.mode() == SelectMode::Multi,
                    values,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Artifact, BlogPost, JewelryType, Stone};
    use crate::search::FacetDef;

    fn artifact_engine() -> CatalogEngine<Artifact> {
        CatalogEngine::builder("counts")
            .facet(FacetDef::attribute::<JewelryType>(
                "jewelry_type",
                "Тип",
                SelectMode::Multi,
                |a: &Artifact| vec![a.jewelry_type.as_str()],
            ))
            .facet(FacetDef::attribute::<Stone>(
                "stone",
                "Камень",
                SelectMode::Multi,
                |a: &Artifact| a.stones.iter().map(|s| s.as_str()).collect(),
            ))
            .build()
    }

    #[test]
    fn test_counts_cover_every_option() {
        let items = seed::artifacts();
        let engine = artifact_engine();
        let counts = engine.facet_counts(&items, &FilterState::new());

        let types = &counts[0];
        assert_eq!(types.values.len(), JewelryType::ALL.len());
        let total: usize = types.values.iter().map(|v| v.count).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_own_selection_does_not_shrink_counts() {
        let items = seed::artifacts();
        let engine = artifact_engine();
        let unfiltered = engine.facet_counts(&items, &FilterState::new());

        let state = FilterState::new().with_values("jewelry_type", ["ring"]);
        let counts = engine.facet_counts(&items, &state);

        assert_eq!(counts[0].values, unfiltered[0]
            .values
            .iter()
            .cloned()
            .map(|mut v| {
                v.selected = v.value == "ring";
                v
            })
            .collect::<Vec<_>>());
        assert_eq!(counts[0].selected().count(), 1);
    }

    #[test]
    fn test_other_selections_narrow_counts() {
        let items = seed::artifacts();
        let engine = artifact_engine();
        let state = FilterState::new().with_values("jewelry_type", ["ring"]);
        let counts = engine.facet_counts(&items, &state);

        let rings = engine.filter(&items, &state);
        let stone_total: usize = counts[1].values.iter().map(|v| v.count).sum();
        let carried: usize = rings.iter().map(|a| a.stones.len()).sum();
        assert_eq!(stone_total, carried);
    }

    #[test]
    fn test_open_facet_lists_present_values() {
        let items = seed::blog_posts();
        let engine: CatalogEngine<BlogPost> = CatalogEngine::builder("tags")
            .facet(FacetDef::open("tag", "Тег", SelectMode::Multi, |p: &BlogPost| {
                p.tag_values()
            }))
            .build();

        let counts = engine.facet_counts(&items, &FilterState::new());
        let first_tag = items.iter().flat_map(|p| p.tags.iter()).next().unwrap();
        assert_eq!(&counts[0].values[0].value, first_tag);
        assert!(counts[0].values.iter().all(|v| v.count > 0));
    }
}
