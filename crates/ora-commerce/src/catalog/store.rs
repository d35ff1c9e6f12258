//! Read-only catalog collections.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;

/// Discriminant of a catalog entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Course,
    Artifact,
    Blog,
    /// Library items (books, articles, recordings).
    Article,
    Curriculum,
    Teacher,
}

impl ItemKind {
    pub const ALL: &'static [ItemKind] = &[
        ItemKind::Course,
        ItemKind::Artifact,
        ItemKind::Blog,
        ItemKind::Article,
        ItemKind::Curriculum,
        ItemKind::Teacher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Course => "course",
            ItemKind::Artifact => "artifact",
            ItemKind::Blog => "blog",
            ItemKind::Article => "article",
            ItemKind::Curriculum => "curriculum",
            ItemKind::Teacher => "teacher",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common shape of every catalog entity.
///
/// Attributes an entity type doesn't have default to `None`; the filter and
/// sort engines treat a missing attribute as "cannot satisfy a constraint on
/// it" and "sorts last".
pub trait CatalogItem {
    /// Entity discriminant.
    const KIND: ItemKind;

    /// Unique identifier within the collection.
    fn id(&self) -> &ItemId;

    /// Display title or name.
    fn title(&self) -> &str;

    /// Fields searched by the free-text filter.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title()]
    }

    fn price(&self) -> Option<Money> {
        None
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Completion percentage, 0 to 100.
    fn progress(&self) -> Option<u8> {
        None
    }
}

/// External price source for cart totals.
pub trait PriceLookup {
    fn price_of(&self, id: &ItemId) -> Option<Money>;
}

/// Resolves which entity type an id belongs to.
pub trait KindLookup {
    fn kind_of(&self, id: &ItemId) -> Option<ItemKind>;
}

/// A static, read-only collection of one entity type.
///
/// Built once and never mutated; ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    index: HashMap<ItemId, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id().clone(), position).is_some() {
                return Err(CommerceError::DuplicateItem {
                    catalog: T::KIND.as_str(),
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items, index })
    }

    /// Parse a catalog from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CommerceError>
    where
        T: DeserializeOwned,
    {
        let items: Vec<T> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError>
    where
        T: DeserializeOwned,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            kind = %T::KIND,
            path = %path.display(),
            items = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Every item, in catalog order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Catalog position of an item.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: CatalogItem> PriceLookup for Catalog<T> {
    fn price_of(&self, id: &ItemId) -> Option<Money> {
        self.get(id.as_str()).and_then(|item| item.price())
    }
}

impl<T: CatalogItem> KindLookup for Catalog<T> {
    fn kind_of(&self, id: &ItemId) -> Option<ItemKind> {
        self.contains(id.as_str()).then_some(T::KIND)
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
