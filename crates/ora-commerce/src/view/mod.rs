//! A catalog page that keeps its results in step with its filter state.
//!
//! Every mutator recomputes the filtered and sorted result list and the
//! active-filter chips before returning, then notifies subscribers. Readers
//! never see results that disagree with the state.

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogItem};
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::{
    paginate, CatalogEngine, DatePreset, FacetSummary, FilterChip, FilterState, ResultPage,
    SortKey,
};

/// Callback run after every recompute.
pub type Listener<T> = Box<dyn Fn(&CatalogView<T>) + Send + Sync>;

/// Handle returned by [`CatalogView::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Filter state, sort key and derived results of one catalog page.
pub struct CatalogView<T> {
    catalog: Arc<Catalog<T>>,
    engine: CatalogEngine<T>,
    state: FilterState,
    sort: SortKey,
    /// Positions in `catalog.all()`, in display order.
    results: Vec<usize>,
    chips: Vec<FilterChip>,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: u64,
}

impl<T: CatalogItem> CatalogView<T> {
    /// A view starting from the engine's reset state and default sort.
    pub fn new(catalog: Arc<Catalog<T>>, engine: CatalogEngine<T>) -> Self {
        let state = engine.reset();
        let sort = engine.default_sort();
        let mut view = Self {
            catalog,
            engine,
            state,
            sort,
            results: Vec::new(),
            chips: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        };
        view.recompute();
        view
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    pub fn engine(&self) -> &CatalogEngine<T> {
        &self.engine
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Current results in display order.
    pub fn results(&self) -> Vec<&T> {
        let all = self.catalog.all();
        self.results.iter().map(|&i| &all[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    /// Facet counts against the current state.
    pub fn facet_counts(&self) -> Vec<FacetSummary> {
        self.engine.facet_counts(self.catalog.all(), &self.state)
    }

    /// One page of the current results.
    pub fn page(&self, page: usize, per_page: usize) -> ResultPage<&T> {
        paginate(self.results(), page, per_page)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search = query.into();
        self.recompute();
    }

    /// Single-select a facet value; `"all"` clears the facet.
    pub fn select(&mut self, facet: &str, value: &str) {
        self.state.select(facet, value);
        self.recompute();
    }

    /// Check or uncheck a multi-select value. Returns whether it is checked
    /// afterwards.
    pub fn toggle_value(&mut self, facet: &str, value: &str) -> bool {
        let selected = self.state.toggle(facet, value);
        self.recompute();
        selected
    }

    /// Narrow the price range. Inverted bounds are rejected and leave the
    /// view untouched.
    pub fn set_price_range(&mut self, min: Money, max: Money) -> Result<(), CommerceError> {
        self.state.set_price_range(min, max)?;
        self.recompute();
        Ok(())
    }

    pub fn set_date_preset(&mut self, preset: DatePreset) {
        self.state.date = preset;
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.recompute();
    }

    /// Replace the whole state, e.g. when restoring from a URL.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
        self.recompute();
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) {
        self.state = self.engine.remove_chip(&self.state, chip);
        self.recompute();
    }

    /// Back to the reset state and default sort.
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
        self.sort = self.engine.default_sort();
        self.recompute();
    }

    /// Run `listener` after every recompute.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&CatalogView<T>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() < before
    }

    fn recompute(&mut self) {
        let items = self.engine.query(self.catalog.all(), &self.state, self.sort);
        self.results = items
            .iter()
            .filter_map(|item| self.catalog.position(item.id().as_str()))
            .collect();
        self.chips = self.engine.summarize(&self.state);

        tracing::debug!(
            engine = self.engine.name(),
            results = self.results.len(),
            chips = self.chips.len(),
            sort = self.sort.as_str(),
            "Recomputed catalog view"
        );

        for (_, listener) in &self.listeners {
            listener(self);
        }
    }
}

impl<T> fmt::Debug for CatalogView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogView")
            .field("state", &self.state)
            .field("sort", &self.sort)
            .field("results", &self.results.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Artifact};
    use crate::config::PricingConfig;
    use crate::search::presets;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn view() -> CatalogView<Artifact> {
        let catalog = Arc::new(Catalog::new(seed::artifacts()).unwrap());
        let engine = presets::artifact_engine(&PricingConfig::default()).unwrap();
        CatalogView::new(catalog, engine)
    }

    fn ids(view: &CatalogView<Artifact>) -> Vec<String> {
        view.results().iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn test_starts_with_whole_catalog() {
        let view = view();
        assert_eq!(view.result_count(), view.catalog().len());
        assert!(view.chips().is_empty());
    }

    #[test]
    fn test_date_preset_recomputes_on_dated_page() {
        let catalog = Arc::new(Catalog::new(seed::blog_posts()).unwrap());
        let mut engine = presets::blog_engine();
        engine.set_today(chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let mut view = CatalogView::new(catalog, engine);

        view.set_date_preset(DatePreset::LastMonth);
        assert_eq!(view.result_count(), 3);
        assert_eq!(view.chips().len(), 1);

        view.set_date_preset(DatePreset::All);
        assert_eq!(view.result_count(), 5);
        assert!(view.chips().is_empty());
    }

    #[test]
    fn test_date_preset_is_inert_on_artifacts() {
        let mut view = view();
        view.set_date_preset(DatePreset::LastWeek);
        assert_eq!(view.result_count(), view.catalog().len());
        assert!(view.chips().is_empty());
    }

    #[test]
    fn test_mutators_recompute() {
        let mut view = view();
        view.toggle_value("stone", "garnet");
        assert_eq!(ids(&view), vec!["a3", "a6"]);
        assert_eq!(view.chips().len(), 1);

        view.set_sort(SortKey::PriceAsc);
        assert_eq!(ids(&view), vec!["a6", "a3"]);

        view.set_search("талисман");
        assert_eq!(ids(&view), vec!["a6"]);
        assert_eq!(view.chips().len(), 2);
    }

    #[test]
    fn test_rejected_price_range_keeps_results() {
        let mut view = view();
        view.set_price_range(Money::rub(2000), Money::rub(4000)).unwrap();
        let before = ids(&view);

        assert!(view.set_price_range(Money::rub(9000), Money::rub(10)).is_err());
        assert_eq!(ids(&view), before);
        assert_eq!(view.state().price.unwrap().min, Money::rub(2000));
    }

    #[test]
    fn test_remove_chip_and_reset() {
        let mut view = view();
        view.toggle_value("stone", "amethyst");
        view.toggle_value("stone", "garnet");
        view.select("availability", "in_stock");

        let garnet = view.chips()[1].clone();
        view.remove_chip(&garnet);
        assert_eq!(view.state().selection("stone").values(), vec!["amethyst"]);
        assert_eq!(view.chips().len(), 2);

        view.set_sort(SortKey::NameAsc);
        view.reset();
        assert_eq!(view.state(), &view.engine().reset());
        assert_eq!(view.sort(), SortKey::Popular);
        assert_eq!(view.result_count(), view.catalog().len());
    }

    #[test]
    fn test_listeners_are_notified() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(AtomicUsize::new(0));
        let mut view = view();

        let (c, s) = (calls.clone(), seen.clone());
        let id = view.subscribe(move |v| {
            c.fetch_add(1, Ordering::SeqCst);
            s.store(v.result_count(), Ordering::SeqCst);
        });

        view.select("direction", "alchemy");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(view.unsubscribe(id));
        view.reset();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_page_of_results() {
        let view = view();
        let page = view.page(2, 3);
        assert_eq!(page.len(), 3);
        assert_eq!(page.items[0].id.as_str(), "a4");
        assert_eq!(page.pagination.total_pages, 3);
    }
}
