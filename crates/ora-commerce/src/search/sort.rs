//! Sort keys and the post-filter sort pass.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order, no reordering.
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    /// Reverse of catalog order. Catalogs are authored oldest first, so this
    /// approximates recency without reading dates; see `DateDesc`.
    Newest,
    NameAsc,
    ProgressDesc,
    /// True recency: latest date first.
    DateDesc,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Popular,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
        SortKey::NameAsc,
        SortKey::ProgressDesc,
        SortKey::DateDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Newest => "new",
            SortKey::NameAsc => "name",
            SortKey::ProgressDesc => "progress",
            SortKey::DateDesc => "date",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popular => "По популярности",
            SortKey::PriceAsc => "Сначала дешевле",
            SortKey::PriceDesc => "Сначала дороже",
            SortKey::Newest => "Новинки",
            SortKey::NameAsc => "По названию",
            SortKey::ProgressDesc => "По прогрессу",
            SortKey::DateDesc => "Сначала новые",
        }
    }

    /// Parse a wire value; unknown values fall back to `Popular`.
    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .unwrap_or_default()
    }
}

/// Order `items` by `key`.
///
/// Stable: items that compare equal keep their input order. Items lacking
/// the compared attribute go last, in input order.
pub fn sort_items<'a, T: CatalogItem>(mut items: Vec<&'a T>, key: SortKey) -> Vec<&'a T> {
    match key {
        SortKey::Popular => {}
        SortKey::Newest => items.reverse(),
        SortKey::PriceAsc => {
            items.sort_by(|a, b| missing_last(price_key(*a), price_key(*b), false))
        }
        SortKey::PriceDesc => {
            items.sort_by(|a, b| missing_last(price_key(*a), price_key(*b), true))
        }
        SortKey::NameAsc => items.sort_by_cached_key(|item| item.title().to_lowercase()),
        SortKey::ProgressDesc => {
            items.sort_by(|a, b| missing_last(a.progress(), b.progress(), true))
        }
        SortKey::DateDesc => items.sort_by(|a, b| missing_last(a.date(), b.date(), true)),
    }
    items
}

fn price_key<T: CatalogItem>(item: &T) -> Option<i64> {
    item.price().map(|p| p.amount_minor)
}

fn missing_last<K: Ord>(a: Option<K>, b: Option<K>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Artifact, Availability, BlogCategory, BlogPost, CurriculumCourse, JewelryType, Level,
        MagicDirection, Material,
    };
    use crate::ids::ItemId;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn artifact(id: &str, name: &str, price: i64) -> Artifact {
        Artifact {
            id: ItemId::new(id),
            name: name.to_string(),
            description: String::new(),
            jewelry_type: JewelryType::Ring,
            stones: vec![],
            material: Material::Gold,
            availability: Availability::InStock,
            direction: MagicDirection::Tarot,
            price: Money::rub(price),
            image: String::new(),
        }
    }

    fn ids<T: CatalogItem>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let items = vec![
            artifact("a1", "x", 3000),
            artifact("a2", "x", 1000),
            artifact("a3", "x", 3000),
            artifact("a4", "x", 1000),
        ];
        let asc = sort_items(items.iter().collect(), SortKey::PriceAsc);
        assert_eq!(ids(&asc), vec!["a2", "a4", "a1", "a3"]);

        let desc = sort_items(items.iter().collect(), SortKey::PriceDesc);
        assert_eq!(ids(&desc), vec!["a1", "a3", "a2", "a4"]);
    }

    #[test]
    fn test_newest_reverses_catalog_order() {
        let items = vec![
            artifact("a1", "x", 10),
            artifact("a2", "x", 30),
            artifact("a3", "x", 20),
        ];
        let sorted = sort_items(items.iter().collect(), SortKey::Newest);
        assert_eq!(ids(&sorted), vec!["a3", "a2", "a1"]);
    }

    #[test]
    fn test_popular_is_identity() {
        let items = vec![artifact("a2", "b", 1), artifact("a1", "a", 2)];
        let sorted = sort_items(items.iter().collect(), SortKey::Popular);
        assert_eq!(ids(&sorted), vec!["a2", "a1"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let items = vec![
            artifact("a1", "кулон", 1),
            artifact("a2", "Амулет", 1),
            artifact("a3", "Браслет", 1),
        ];
        let sorted = sort_items(items.iter().collect(), SortKey::NameAsc);
        assert_eq!(ids(&sorted), vec!["a2", "a3", "a1"]);
    }

    #[test]
    fn test_progress_descending() {
        let course = |id: &str, done: u16| CurriculumCourse {
            id: ItemId::new(id),
            title: id.to_string(),
            direction: MagicDirection::Runes,
            level: Level::Beginner,
            lessons_total: 10,
            lessons_completed: done,
            enrolled_on: NaiveDate::default(),
        };
        let items = vec![course("c1", 2), course("c2", 10), course("c3", 5)];
        let sorted = sort_items(items.iter().collect(), SortKey::ProgressDesc);
        assert_eq!(ids(&sorted), vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn test_date_descending() {
        let post = |id: &str, y: i32, m: u32| BlogPost {
            id: ItemId::new(id),
            title: id.to_string(),
            excerpt: String::new(),
            body: String::new(),
            category: BlogCategory::News,
            tags: vec![],
            author: String::new(),
            published_on: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            read_minutes: 1,
            image: String::new(),
        };
        let items = vec![post("b1", 2025, 5), post("b2", 2026, 1), post("b3", 2025, 12)];
        let sorted = sort_items(items.iter().collect(), SortKey::DateDesc);
        assert_eq!(ids(&sorted), vec!["b2", "b3", "b1"]);
    }

    #[test]
    fn test_missing_attribute_sorts_last() {
        assert_eq!(missing_last(Some(1), None, false), Ordering::Less);
        assert_eq!(missing_last(None, Some(1), true), Ordering::Greater);
        assert_eq!(missing_last::<i32>(None, None, true), Ordering::Equal);
    }

    #[test]
    fn test_from_str_falls_back() {
        assert_eq!(SortKey::from_str("price_desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::from_str("bogus"), SortKey::Popular);
    }
}
