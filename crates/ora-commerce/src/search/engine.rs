//! Generic catalog filter engine.
//!
//! One engine type serves every catalog page. A page is described by the
//! facets it exposes, the sort keys it offers, its price bounds, and whether
//! it has a date filter, all passed through [`CatalogEngineBuilder`].

use std::fmt;

use chrono::NaiveDate;

use crate::catalog::{Attribute, Catalog, CatalogItem};
use crate::error::CommerceError;
use crate::search::{sort_items, DatePreset, FilterState, PriceRange, Selection, SortKey};

/// Extracts the values an item carries for one facet.
pub type FacetExtractor<T> = fn(&T) -> Vec<&str>;

/// How many values of a facet can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Radio buttons or a dropdown with an "all" entry.
    Single,
    /// Checkboxes.
    Multi,
}

/// One selectable value of a facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

/// Declaration of one filterable attribute.
pub struct FacetDef<T> {
    key: &'static str,
    label: &'static str,
    mode: SelectMode,
    /// Empty for open facets such as free-form tags.
    options: Vec<FacetOption>,
    extract: FacetExtractor<T>,
}

impl<T> FacetDef<T> {
    /// A facet over a closed enumeration; options come from `A::all()`.
    pub fn attribute<A: Attribute>(
        key: &'static str,
        label: &'static str,
        mode: SelectMode,
        extract: FacetExtractor<T>,
    ) -> Self {
        let options = A::all()
            .iter()
            .map(|v| FacetOption {
                value: v.as_str().to_string(),
                label: v.label().to_string(),
            })
            .collect();
        Self {
            key,
            label,
            mode,
            options,
            extract,
        }
    }

    /// A facet whose values are whatever the items carry.
    pub fn open(
        key: &'static str,
        label: &'static str,
        mode: SelectMode,
        extract: FacetExtractor<T>,
    ) -> Self {
        Self {
            key,
            label,
            mode,
            options: Vec::new(),
            extract,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn options(&self) -> &[FacetOption] {
        &self.options
    }

    /// Whether the facet accepts any value (no closed option list).
    pub fn is_open(&self) -> bool {
        self.options.is_empty()
    }

    /// Values `item` carries for this facet.
    pub fn values_of<'a>(&self, item: &'a T) -> Vec<&'a str> {
        (self.extract)(item)
    }

    /// Display label of a value; open facets show the value itself.
    pub fn label_for(&self, value: &str) -> String {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| value.to_string())
    }

    /// Whether `value` is selectable in this facet.
    pub fn accepts_value(&self, value: &str) -> bool {
        self.is_open() || self.options.iter().any(|o| o.value == value)
    }

    pub(crate) fn matches(&self, item: &T, selection: &Selection) -> bool {
        selection.accepts(&(self.extract)(item))
    }
}

impl<T> fmt::Debug for FacetDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetDef")
            .field("key", &self.key)
            .field("mode", &self.mode)
            .field("options", &self.options.len())
            .finish()
    }
}

/// Filter, sort and summarize one catalog page.
#[derive(Debug)]
pub struct CatalogEngine<T> {
    name: &'static str,
    facets: Vec<FacetDef<T>>,
    sort_keys: Vec<SortKey>,
    price_bounds: Option<PriceRange>,
    search_enabled: bool,
    date_filter: bool,
    today: NaiveDate,
}

impl<T: CatalogItem> CatalogEngine<T> {
    pub fn builder(name: &'static str) -> CatalogEngineBuilder<T> {
        CatalogEngineBuilder::new(name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn facets(&self) -> &[FacetDef<T>] {
        &self.facets
    }

    pub fn facet(&self, key: &str) -> Option<&FacetDef<T>> {
        self.facets.iter().find(|f| f.key == key)
    }

    /// Sort keys offered on this page, default first.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    pub fn default_sort(&self) -> SortKey {
        self.sort_keys.first().copied().unwrap_or_default()
    }

    /// Global price slider bounds, if the page has a price filter.
    pub fn price_bounds(&self) -> Option<PriceRange> {
        self.price_bounds
    }

    pub fn has_search(&self) -> bool {
        self.search_enabled
    }

    /// Whether the page offers date presets.
    pub fn has_date_filter(&self) -> bool {
        self.date_filter
    }

    /// Reference date for date presets.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Move the reference date, e.g. when a long-lived view crosses midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// The state with every dimension at its default.
    ///
    /// Filtering with it returns the catalog unchanged.
    pub fn reset(&self) -> FilterState {
        FilterState {
            price: self.price_bounds,
            ..FilterState::default()
        }
    }

    /// The price range of `state` if it narrows the page's bounds.
    ///
    /// A range equal to the bounds, or any range on a page without a price
    /// filter, does not constrain.
    pub fn active_price_range(&self, state: &FilterState) -> Option<PriceRange> {
        let bounds = self.price_bounds?;
        state.price.filter(|range| *range != bounds)
    }

    /// The date preset of `state` if this page filters by date.
    pub fn active_date_preset(&self, state: &FilterState) -> Option<DatePreset> {
        Some(state.date).filter(|preset| self.date_filter && *preset != DatePreset::All)
    }

    /// The search query of `state` if this page has a search box.
    pub fn active_search<'s>(&self, state: &'s FilterState) -> Option<&'s str> {
        state.search_query().filter(|_| self.search_enabled)
    }

    /// Check that every selection names a declared facet and a known value.
    pub fn validate(&self, state: &FilterState) -> Result<(), CommerceError> {
        for (key, selection) in &state.selections {
            let facet = self
                .facet(key)
                .ok_or_else(|| CommerceError::UnknownFacet(key.clone()))?;
            if let Some(value) = selection.values().into_iter().find(|v| !facet.accepts_value(v)) {
                return Err(CommerceError::UnknownFacetValue {
                    facet: key.clone(),
                    value: value.to_string(),
                });
            }
        }
        if let (Some(range), Some(bounds)) = (state.price, self.price_bounds) {
            if range.min.currency != bounds.min.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: bounds.min.currency.code().to_string(),
                    got: range.min.currency.code().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Whether a single item passes every constraint of `state`.
    pub fn matches(&self, item: &T, state: &FilterState) -> bool {
        Predicate::compile(self, state, None).test(item)
    }

    /// Items of `items` passing every constraint, in input order.
    pub fn filter<'a>(&self, items: &'a [T], state: &FilterState) -> Vec<&'a T> {
        let predicate = Predicate::compile(self, state, None);
        let result: Vec<&T> = items.iter().filter(|item| predicate.test(item)).collect();
        tracing::debug!(
            engine = self.name,
            total = items.len(),
            matched = result.len(),
            "Filtered catalog"
        );
        result
    }

    pub fn filter_catalog<'a>(&self, catalog: &'a Catalog<T>, state: &FilterState) -> Vec<&'a T> {
        self.filter(catalog.all(), state)
    }

    /// Reorder filtered items. Keys this page does not offer leave the
    /// order unchanged.
    pub fn sort<'a>(&self, items: Vec<&'a T>, key: SortKey) -> Vec<&'a T> {
        if !self.sort_keys.contains(&key) {
            tracing::debug!(engine = self.name, key = key.as_str(), "Sort key not offered");
            return items;
        }
        sort_items(items, key)
    }

    /// Filter then sort.
    pub fn query<'a>(&self, items: &'a [T], state: &FilterState, key: SortKey) -> Vec<&'a T> {
        self.sort(self.filter(items, state), key)
    }

    /// Filter ignoring one facet's own selection, for facet counts.
    pub(crate) fn filter_without<'a>(
        &self,
        items: &'a [T],
        state: &FilterState,
        skip_facet: &str,
    ) -> Vec<&'a T> {
        let predicate = Predicate::compile(self, state, Some(skip_facet));
        items.iter().filter(|item| predicate.test(item)).collect()
    }
}

/// A `FilterState` resolved against an engine, ordered cheapest check first:
/// facet equality, price, date, then the text scan.
struct Predicate<'e, T> {
    facets: Vec<(&'e FacetDef<T>, &'e Selection)>,
    price: Option<PriceRange>,
    cutoff: Option<NaiveDate>,
    needle: Option<String>,
}

impl<'e, T: CatalogItem> Predicate<'e, T> {
    fn compile(
        engine: &'e CatalogEngine<T>,
        state: &'e FilterState,
        skip_facet: Option<&str>,
    ) -> Self {
        let facets = state
            .selections
            .iter()
            .filter(|(key, selection)| {
                selection.is_constraining() && Some(key.as_str()) != skip_facet
            })
            .filter_map(|(key, selection)| match engine.facet(key) {
                Some(facet) => Some((facet, selection)),
                None => {
                    tracing::debug!(engine = engine.name, facet = %key, "Ignoring undeclared facet");
                    None
                }
            })
            .collect();

        Self {
            facets,
            price: engine.active_price_range(state),
            cutoff: engine
                .active_date_preset(state)
                .and_then(|preset| preset.cutoff(engine.today)),
            needle: engine.active_search(state).map(str::to_lowercase),
        }
    }

    fn test(&self, item: &T) -> bool {
        if !self.facets.iter().all(|(facet, sel)| facet.matches(item, sel)) {
            return false;
        }

        if let Some(range) = &self.price {
            match item.price() {
                Some(price) if range.contains(&price) => {}
                _ => return false,
            }
        }

        if let Some(cutoff) = self.cutoff {
            match item.date() {
                Some(date) if date >= cutoff => {}
                _ => return false,
            }
        }

        if let Some(needle) = &self.needle {
            return item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str()));
        }

        true
    }
}

/// Builder for [`CatalogEngine`].
pub struct CatalogEngineBuilder<T> {
    name: &'static str,
    facets: Vec<FacetDef<T>>,
    sort_keys: Vec<SortKey>,
    price_bounds: Option<PriceRange>,
    search_enabled: bool,
    date_filter: bool,
    today: Option<NaiveDate>,
}

impl<T: CatalogItem> CatalogEngineBuilder<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            facets: Vec::new(),
            sort_keys: Vec::new(),
            price_bounds: None,
            search_enabled: true,
            date_filter: false,
            today: None,
        }
    }

    /// Declare a facet. Later declarations with the same key replace
    /// earlier ones.
    pub fn facet(mut self, facet: FacetDef<T>) -> Self {
        self.facets.retain(|f| f.key != facet.key);
        self.facets.push(facet);
        self
    }

    /// Sort keys offered, default first. `Popular` is always available.
    pub fn sort_keys(mut self, keys: &[SortKey]) -> Self {
        self.sort_keys = Vec::with_capacity(keys.len() + 1);
        for key in keys {
            if !self.sort_keys.contains(key) {
                self.sort_keys.push(*key);
            }
        }
        self
    }

    pub fn price_bounds(mut self, bounds: PriceRange) -> Self {
        self.price_bounds = Some(bounds);
        self
    }

    /// Hide the search box; a query in the state is then ignored.
    pub fn without_search(mut self) -> Self {
        self.search_enabled = false;
        self
    }

    /// Offer date presets. Without this a preset in the state is ignored.
    pub fn date_filter(mut self) -> Self {
        self.date_filter = true;
        self
    }

    /// Pin the reference date for date presets (defaults to the local date).
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn build(self) -> CatalogEngine<T> {
        let mut sort_keys = self.sort_keys;
        if !sort_keys.contains(&SortKey::Popular) {
            sort_keys.push(SortKey::Popular);
        }

        CatalogEngine {
            name: self.name,
            facets: self.facets,
            sort_keys,
            price_bounds: self.price_bounds,
            search_enabled: self.search_enabled,
            date_filter: self.date_filter,
            today: self
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Artifact, Availability, ItemKind, JewelryType, MagicDirection, Material, Stone,
    };
    use crate::ids::ItemId;
    use crate::money::Money;

    fn artifact(id: &str, name: &str, stones: &[Stone], price: i64) -> Artifact {
        Artifact {
            id: ItemId::new(id),
            name: name.to_string(),
            description: String::new(),
            jewelry_type: JewelryType::Ring,
            stones: stones.to_vec(),
            material: Material::Silver,
            availability: Availability::InStock,
            direction: MagicDirection::Alchemy,
            price: Money::rub(price),
            image: String::new(),
        }
    }

    fn engine() -> CatalogEngine<Artifact> {
        CatalogEngine::builder("test")
            .facet(FacetDef::attribute::<Stone>(
                "stone",
                "Камень",
                SelectMode::Multi,
                |a: &Artifact| a.stones.iter().map(|s| s.as_str()).collect(),
            ))
            .sort_keys(&[SortKey::Popular, SortKey::PriceAsc])
            .price_bounds(PriceRange::new(Money::rub(0), Money::rub(10_000)).unwrap())
            .build()
    }

    #[test]
    fn test_reset_state_is_identity() {
        let items = vec![
            artifact("a1", "Кольцо", &[Stone::Garnet], 1000),
            artifact("a2", "Кулон", &[], 5000),
        ];
        let engine = engine();
        let result = engine.filter(&items, &engine.reset());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_full_range_does_not_constrain() {
        let items = vec![artifact("a1", "Дорогое", &[], 99_000)];
        let engine = engine();
        // Outside the bounds, but the range equals the bounds.
        assert_eq!(engine.filter(&items, &engine.reset()).len(), 1);
    }

    #[test]
    fn test_price_range_filter() {
        let items = vec![
            artifact("a1", "Кольцо", &[], 1000),
            artifact("a2", "Кулон", &[], 5000),
        ];
        let engine = engine();
        let state = FilterState::new()
            .with_price_range(PriceRange::new(Money::rub(2000), Money::rub(6000)).unwrap());
        let ids: Vec<&str> = engine.filter(&items, &state).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2"]);
    }

    #[test]
    fn test_multi_valued_attribute_overlap() {
        let items = vec![
            artifact("a1", "x", &[Stone::Garnet, Stone::Onyx], 1000),
            artifact("a2", "y", &[Stone::Quartz], 1000),
        ];
        let engine = engine();
        let state = FilterState::new().with_values("stone", ["onyx", "amethyst"]);
        assert_eq!(engine.filter(&items, &state).len(), 1);
    }

    #[test]
    fn test_undeclared_facet_is_ignored() {
        let items = vec![artifact("a1", "x", &[], 1000)];
        let engine = engine();
        let state = FilterState::new().with_selection("material", "gold");
        assert_eq!(engine.filter(&items, &state).len(), 1);
        assert!(matches!(
            engine.validate(&state),
            Err(CommerceError::UnknownFacet(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_value() {
        let engine = engine();
        let state = FilterState::new().with_values("stone", ["diamond"]);
        assert!(matches!(
            engine.validate(&state),
            Err(CommerceError::UnknownFacetValue { .. })
        ));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            artifact("a1", "Кольцо Древа Жизни", &[], 1000),
            artifact("a2", "Кулон", &[], 1000),
        ];
        let engine = engine();
        let state = FilterState::new().with_search("ДРЕВА");
        let result = engine.filter(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "a1");
    }

    #[test]
    fn test_everything_excluded_is_empty() {
        let items = vec![artifact("a1", "x", &[], 1000)];
        let engine = engine();
        let state = FilterState::new().with_search("нет такого");
        assert!(engine.filter(&items, &state).is_empty());
    }

    #[test]
    fn test_sort_key_not_offered_is_identity() {
        let items = vec![
            artifact("a1", "b", &[], 3000),
            artifact("a2", "a", &[], 1000),
        ];
        let engine = engine();
        let sorted = engine.sort(items.iter().collect(), SortKey::NameAsc);
        assert_eq!(sorted[0].id.as_str(), "a1");
        let sorted = engine.sort(items.iter().collect(), SortKey::PriceAsc);
        assert_eq!(sorted[0].id.as_str(), "a2");
    }

    #[test]
    fn test_popular_always_offered() {
        let engine: CatalogEngine<Artifact> = CatalogEngine::builder("bare")
            .sort_keys(&[SortKey::PriceDesc])
            .build();
        assert_eq!(engine.default_sort(), SortKey::PriceDesc);
        assert!(engine.sort_keys().contains(&SortKey::Popular));
    }

    struct Note {
        id: ItemId,
        title: String,
        date: Option<NaiveDate>,
    }

    impl CatalogItem for Note {
        const KIND: ItemKind = ItemKind::Blog;

        fn id(&self) -> &ItemId {
            &self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn date(&self) -> Option<NaiveDate> {
            self.date
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn note(id: &str, date: Option<NaiveDate>) -> Note {
        Note {
            id: ItemId::new(id),
            title: id.to_string(),
            date,
        }
    }

    fn ids_for(engine: &CatalogEngine<Note>, items: &[Note], preset: DatePreset) -> Vec<String> {
        let state = FilterState::new().with_date(preset);
        engine
            .filter(items, &state)
            .iter()
            .map(|n| n.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_date_presets_keep_window_boundary() {
        let today = ymd(2026, 10, 19);
        let items = vec![
            note("today", Some(today)),
            note("week-edge", Some(ymd(2026, 10, 12))),
            note("week-out", Some(ymd(2026, 10, 11))),
            note("month-edge", Some(ymd(2026, 9, 19))),
            note("half-year", Some(ymd(2026, 4, 1))),
            note("old", Some(ymd(2024, 1, 1))),
            note("undated", None),
        ];
        let engine: CatalogEngine<Note> =
            CatalogEngine::builder("notes").date_filter().today(today).build();

        assert_eq!(ids_for(&engine, &items, DatePreset::All).len(), 7);
        assert_eq!(ids_for(&engine, &items, DatePreset::LastWeek), vec!["today", "week-edge"]);
        assert_eq!(
            ids_for(&engine, &items, DatePreset::LastMonth),
            vec!["today", "week-edge", "week-out", "month-edge"]
        );
        assert_eq!(ids_for(&engine, &items, DatePreset::LastThreeMonths).len(), 4);
        assert_eq!(
            ids_for(&engine, &items, DatePreset::LastYear),
            vec!["today", "week-edge", "week-out", "month-edge", "half-year"]
        );
    }

    #[test]
    fn test_date_preset_ignored_without_date_filter() {
        let today = ymd(2026, 10, 19);
        let items = vec![note("old", Some(ymd(2020, 1, 1))), note("undated", None)];
        let engine: CatalogEngine<Note> = CatalogEngine::builder("notes").today(today).build();

        assert!(!engine.has_date_filter());
        assert_eq!(ids_for(&engine, &items, DatePreset::LastWeek), vec!["old", "undated"]);
        let state = FilterState::new().with_date(DatePreset::LastWeek);
        assert_eq!(engine.active_date_preset(&state), None);
    }

    #[test]
    fn test_set_today_moves_the_window() {
        let items = vec![note("n1", Some(ymd(2026, 10, 14)))];
        let mut engine: CatalogEngine<Note> = CatalogEngine::builder("notes")
            .date_filter()
            .today(ymd(2026, 10, 19))
            .build();
        assert_eq!(ids_for(&engine, &items, DatePreset::LastWeek).len(), 1);

        engine.set_today(ymd(2026, 10, 22));
        assert_eq!(engine.today(), ymd(2026, 10, 22));
        assert!(ids_for(&engine, &items, DatePreset::LastWeek).is_empty());
    }

    #[test]
    fn test_query_ignored_without_search() {
        let items = vec![artifact("a1", "Кольцо", &[], 1000)];
        let engine: CatalogEngine<Artifact> = CatalogEngine::builder("bare").without_search().build();
        let state = FilterState::new().with_search("zzz");

        assert!(!engine.has_search());
        assert_eq!(engine.active_search(&state), None);
        assert_eq!(engine.filter(&items, &state).len(), 1);
    }
}
