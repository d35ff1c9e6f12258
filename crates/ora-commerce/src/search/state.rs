//! Filter state: the user's current selections across every dimension.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// Wire value that selects every option of a single-select facet.
pub const ALL_VALUE: &str = "all";

/// Selection within one facet.
///
/// `All` and an empty `Many` both mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "values", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    One(String),
    /// Checked values in the order the user checked them.
    Many(Vec<String>),
}

impl Selection {
    /// Whether this selection excludes anything.
    pub fn is_constraining(&self) -> bool {
        match self {
            Selection::All => false,
            Selection::One(_) => true,
            Selection::Many(values) => !values.is_empty(),
        }
    }

    /// Whether an item carrying `values` passes this selection.
    pub fn accepts(&self, values: &[&str]) -> bool {
        match self {
            Selection::All => true,
            Selection::One(wanted) => values.iter().any(|v| *v == wanted.as_str()),
            Selection::Many(wanted) if wanted.is_empty() => true,
            Selection::Many(wanted) => values
                .iter()
                .any(|v| wanted.iter().any(|w| w.as_str() == *v)),
        }
    }

    /// Whether `value` is currently selected.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::All => false,
            Selection::One(v) => v == value,
            Selection::Many(values) => values.iter().any(|v| v == value),
        }
    }

    /// Selected values, in selection order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Selection::All => Vec::new(),
            Selection::One(v) => vec![v.as_str()],
            Selection::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Collapse empty multi-selections to `All`.
    fn normalized(self) -> Self {
        match self {
            Selection::Many(values) if values.is_empty() => Selection::All,
            other => other,
        }
    }
}

/// Inclusive price bounds. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Build a range, rejecting inverted bounds and mixed currencies.
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.currency != max.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: min.currency.code().to_string(),
                got: max.currency.code().to_string(),
            });
        }
        if min.amount_minor > max.amount_minor {
            return Err(CommerceError::InvalidPriceRange {
                min: min.display(),
                max: max.display(),
            });
        }
        Ok(Self { min, max })
    }

    /// Whether `price` lies within the bounds, inclusive.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && price.amount_minor >= self.min.amount_minor
            && price.amount_minor <= self.max.amount_minor
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Publication-date window relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
    #[default]
    All,
    LastWeek,
    LastMonth,
    LastThreeMonths,
    LastYear,
}

impl DatePreset {
    pub const ALL: &'static [DatePreset] = &[
        DatePreset::All,
        DatePreset::LastWeek,
        DatePreset::LastMonth,
        DatePreset::LastThreeMonths,
        DatePreset::LastYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatePreset::All => "all",
            DatePreset::LastWeek => "week",
            DatePreset::LastMonth => "month",
            DatePreset::LastThreeMonths => "quarter",
            DatePreset::LastYear => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::All => "За всё время",
            DatePreset::LastWeek => "За неделю",
            DatePreset::LastMonth => "За месяц",
            DatePreset::LastThreeMonths => "За три месяца",
            DatePreset::LastYear => "За год",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }

    fn window_days(&self) -> Option<i64> {
        match self {
            DatePreset::All => None,
            DatePreset::LastWeek => Some(7),
            DatePreset::LastMonth => Some(30),
            DatePreset::LastThreeMonths => Some(90),
            DatePreset::LastYear => Some(365),
        }
    }

    /// Earliest date still inside the window, or `None` for `All`.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let days = self.window_days()?;
        today.checked_sub_signed(Duration::days(days))
    }
}

/// Every filter dimension of a catalog page.
///
/// Facet selections are keyed by the facet key the engine declares
/// (`"stone"`, `"direction"`). Missing keys mean `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub selections: BTreeMap<String, Selection>,

    /// `None` means the engine's full price bounds.
    #[serde(default)]
    pub price: Option<PriceRange>,

    #[serde(default)]
    pub date: DatePreset,
}

impl FilterState {
    /// An unconstrained state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Select a single value; `"all"` clears the facet.
    pub fn with_selection(mut self, facet: &str, value: &str) -> Self {
        self.select(facet, value);
        self
    }

    /// Check a set of values in a multi-select facet.
    pub fn with_values<I, V>(mut self, facet: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !selected.contains(&value) {
                selected.push(value);
            }
        }
        self.set_selection(facet, Selection::Many(selected));
        self
    }

    pub fn with_date(mut self, preset: DatePreset) -> Self {
        self.date = preset;
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    /// Current selection of a facet.
    pub fn selection(&self, facet: &str) -> &Selection {
        static ALL: Selection = Selection::All;
        self.selections.get(facet).unwrap_or(&ALL)
    }

    /// Replace a facet's selection.
    pub fn set_selection(&mut self, facet: &str, selection: Selection) {
        match selection.normalized() {
            Selection::All => {
                self.selections.remove(facet);
            }
            selection => {
                self.selections.insert(facet.to_string(), selection);
            }
        }
    }

    /// Single-select a value; `"all"` clears the facet.
    pub fn select(&mut self, facet: &str, value: &str) {
        if value == ALL_VALUE {
            self.clear_facet(facet);
        } else {
            self.set_selection(facet, Selection::One(value.to_string()));
        }
    }

    /// Check or uncheck a value in a multi-select facet.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, facet: &str, value: &str) -> bool {
        let mut values: Vec<String> = self
            .selection(facet)
            .values()
            .into_iter()
            .map(str::to_string)
            .collect();

        let now_selected = match values.iter().position(|v| v == value) {
            Some(index) => {
                values.remove(index);
                false
            }
            None => {
                values.push(value.to_string());
                true
            }
        };

        self.set_selection(facet, Selection::Many(values));
        now_selected
    }

    /// Remove one value from a facet, leaving the others.
    pub fn deselect(&mut self, facet: &str, value: &str) {
        let remaining = match self.selection(facet) {
            Selection::All => return,
            Selection::One(v) if v == value => Selection::All,
            Selection::One(_) => return,
            Selection::Many(values) => {
                Selection::Many(values.iter().filter(|v| *v != value).cloned().collect())
            }
        };
        self.set_selection(facet, remaining);
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.selections.remove(facet);
    }

    /// Update the price range, keeping the previous one if the new bounds
    /// are inverted.
    pub fn set_price_range(&mut self, min: Money, max: Money) -> Result<(), CommerceError> {
        match PriceRange::new(min, max) {
            Ok(range) => {
                self.price = Some(range);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected price range update");
                Err(e)
            }
        }
    }

    pub fn clear_price(&mut self) {
        self.price = None;
    }

    /// Trimmed search query, `None` when blank.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
