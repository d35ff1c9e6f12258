//! All catalogs of the storefront, loaded once at start.

use crate::catalog::{
    seed, Artifact, BlogPost, Catalog, CatalogItem, Course, CurriculumCourse, ItemKind,
    KindLookup, LibraryItem, PriceLookup, Teacher,
};
use crate::config::CatalogSources;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::de::DeserializeOwned;
use std::path::Path;

/// The complete set of read-only catalogs.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub artifacts: Catalog<Artifact>,
    pub courses: Catalog<Course>,
    pub blog: Catalog<BlogPost>,
    pub library: Catalog<LibraryItem>,
    pub curriculum: Catalog<CurriculumCourse>,
    pub teachers: Catalog<Teacher>,
}

impl Storefront {
    /// Build from the built-in definitions.
    pub fn seeded() -> Result<Self, CommerceError> {
        Ok(Self {
            artifacts: Catalog::new(seed::artifacts())?,
            courses: Catalog::new(seed::courses())?,
            blog: Catalog::new(seed::blog_posts())?,
            library: Catalog::new(seed::library())?,
            curriculum: Catalog::new(seed::curriculum())?,
            teachers: Catalog::new(seed::teachers())?,
        })
    }

    /// Build from configured JSON files, falling back to the built-in
    /// definitions for any catalog without a source.
    pub fn load(sources: &CatalogSources) -> Result<Self, CommerceError> {
        Ok(Self {
            artifacts: load_or_seed(sources.artifacts.as_deref(), seed::artifacts)?,
            courses: load_or_seed(sources.courses.as_deref(), seed::courses)?,
            blog: load_or_seed(sources.blog.as_deref(), seed::blog_posts)?,
            library: load_or_seed(sources.library.as_deref(), seed::library)?,
            curriculum: load_or_seed(sources.curriculum.as_deref(), seed::curriculum)?,
            teachers: load_or_seed(sources.teachers.as_deref(), seed::teachers)?,
        })
    }

    /// Price of a purchasable item (artifacts and courses).
    pub fn price_of(&self, id: &ItemId) -> Option<Money> {
        self.artifacts
            .price_of(id)
            .or_else(|| self.courses.price_of(id))
    }

    /// Display title of any item.
    pub fn title_of(&self, id: &ItemId) -> Option<&str> {
        let id = id.as_str();
        self.artifacts
            .get(id)
            .map(CatalogItem::title)
            .or_else(|| self.courses.get(id).map(CatalogItem::title))
            .or_else(|| self.blog.get(id).map(CatalogItem::title))
            .or_else(|| self.library.get(id).map(CatalogItem::title))
            .or_else(|| self.curriculum.get(id).map(CatalogItem::title))
            .or_else(|| self.teachers.get(id).map(CatalogItem::title))
    }
}

impl PriceLookup for Storefront {
    fn price_of(&self, id: &ItemId) -> Option<Money> {
        Storefront::price_of(self, id)
    }
}

impl KindLookup for Storefront {
    fn kind_of(&self, id: &ItemId) -> Option<ItemKind> {
        self.artifacts
            .kind_of(id)
            .or_else(|| self.courses.kind_of(id))
            .or_else(|| self.blog.kind_of(id))
            .or_else(|| self.library.kind_of(id))
            .or_else(|| self.curriculum.kind_of(id))
            .or_else(|| self.teachers.kind_of(id))
    }
}

fn load_or_seed<T>(path: Option<&Path>, seed: fn() -> Vec<T>) -> Result<Catalog<T>, CommerceError>
where
    T: CatalogItem + DeserializeOwned,
{
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::new(seed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_seeded_storefront_resolves_kinds() {
        let store = Storefront::seeded().unwrap();
        assert_eq!(store.kind_of(&ItemId::new("a1")), Some(ItemKind::Artifact));
        assert_eq!(store.kind_of(&ItemId::new("c1")), Some(ItemKind::Course));
        assert_eq!(store.kind_of(&ItemId::new("b1")), Some(ItemKind::Blog));
        assert_eq!(store.kind_of(&ItemId::new("l1")), Some(ItemKind::Article));
        assert_eq!(store.kind_of(&ItemId::new("nope")), None);
    }

    #[test]
    fn test_price_of_covers_courses_and_artifacts() {
        let store = Storefront::seeded().unwrap();
        assert_eq!(store.price_of(&ItemId::new("a1")), Some(Money::rub(4_500)));
        assert_eq!(store.price_of(&ItemId::new("c2")), Some(Money::rub(12_000)));
        assert_eq!(store.price_of(&ItemId::new("b1")), None);
    }

    #[test]
    fn test_load_overrides_one_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teachers.json");
        std::fs::write(
            &path,
            r#"[{"id": "t9", "name": "Гость", "bio": "", "directions": ["tarot"],
                "experienceYears": 1, "ratingTenths": 40}]"#,
        )
        .unwrap();

        let sources = CatalogSources {
            teachers: Some(PathBuf::from(&path)),
            ..Default::default()
        };
        let store = Storefront::load(&sources).unwrap();
        assert_eq!(store.teachers.len(), 1);
        assert_eq!(store.title_of(&ItemId::new("t9")), Some("Гость"));
        assert_eq!(store.artifacts.len(), seed::artifacts().len());
    }
}
