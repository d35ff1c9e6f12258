//! Engine configurations for each storefront page.

use crate::catalog::{
    Access, Artifact, Availability, BlogCategory, BlogPost, Course, CourseFormat,
    CurriculumCourse, JewelryType, Level, LibraryFormat, LibraryItem, MagicDirection, Material,
    ProgressStatus, Stone, Teacher,
};
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::search::{CatalogEngine, FacetDef, SelectMode, SortKey};

/// Artifact shop: checkbox facets for type, stone and metal.
pub fn artifact_engine(pricing: &PricingConfig) -> Result<CatalogEngine<Artifact>, CommerceError> {
    Ok(CatalogEngine::builder("artifacts")
        .facet(FacetDef::attribute::<JewelryType>(
            "jewelry_type",
            "Тип украшения",
            SelectMode::Multi,
            |a: &Artifact| vec![a.jewelry_type.as_str()],
        ))
        .facet(FacetDef::attribute::<Stone>(
            "stone",
            "Камень",
            SelectMode::Multi,
            |a: &Artifact| a.stones.iter().map(|s| s.as_str()).collect(),
        ))
        .facet(FacetDef::attribute::<Material>(
            "material",
            "Металл",
            SelectMode::Multi,
            |a: &Artifact| vec![a.material.as_str()],
        ))
        .facet(FacetDef::attribute::<Availability>(
            "availability",
            "Наличие",
            SelectMode::Single,
            |a: &Artifact| vec![a.availability.as_str()],
        ))
        .facet(FacetDef::attribute::<MagicDirection>(
            "direction",
            "Направление",
            SelectMode::Single,
            |a: &Artifact| vec![a.direction.as_str()],
        ))
        .sort_keys(&[
            SortKey::Popular,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Newest,
            SortKey::NameAsc,
        ])
        .price_bounds(pricing.artifact_bounds()?)
        .build())
}

/// Course catalog.
pub fn course_engine(pricing: &PricingConfig) -> Result<CatalogEngine<Course>, CommerceError> {
    Ok(CatalogEngine::builder("courses")
        .facet(FacetDef::attribute::<MagicDirection>(
            "direction",
            "Направление",
            SelectMode::Single,
            |c: &Course| vec![c.direction.as_str()],
        ))
        .facet(FacetDef::attribute::<Level>(
            "level",
            "Уровень",
            SelectMode::Single,
            |c: &Course| vec![c.level.as_str()],
        ))
        .facet(FacetDef::attribute::<CourseFormat>(
            "format",
            "Формат",
            SelectMode::Single,
            |c: &Course| vec![c.format.as_str()],
        ))
        .sort_keys(&[
            SortKey::Popular,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::DateDesc,
            SortKey::NameAsc,
        ])
        .price_bounds(pricing.course_bounds()?)
        .date_filter()
        .build())
}

/// The student's own courses on the dashboard.
pub fn curriculum_engine() -> CatalogEngine<CurriculumCourse> {
    CatalogEngine::builder("curriculum")
        .facet(FacetDef::attribute::<MagicDirection>(
            "direction",
            "Направление",
            SelectMode::Single,
            |c: &CurriculumCourse| vec![c.direction.as_str()],
        ))
        .facet(FacetDef::attribute::<Level>(
            "level",
            "Уровень",
            SelectMode::Single,
            |c: &CurriculumCourse| vec![c.level.as_str()],
        ))
        .facet(FacetDef::attribute::<ProgressStatus>(
            "status",
            "Статус",
            SelectMode::Single,
            |c: &CurriculumCourse| vec![c.status().as_str()],
        ))
        .sort_keys(&[SortKey::Popular, SortKey::ProgressDesc, SortKey::NameAsc])
        .date_filter()
        .build()
}

/// Blog: category, free-form tags and a publication window.
pub fn blog_engine() -> CatalogEngine<BlogPost> {
    CatalogEngine::builder("blog")
        .facet(FacetDef::attribute::<BlogCategory>(
            "category",
            "Рубрика",
            SelectMode::Single,
            |p: &BlogPost| vec![p.category.as_str()],
        ))
        .facet(FacetDef::open(
            "tag",
            "Тег",
            SelectMode::Multi,
            |p: &BlogPost| p.tag_values(),
        ))
        .sort_keys(&[SortKey::DateDesc, SortKey::Popular, SortKey::NameAsc])
        .date_filter()
        .build()
}

/// Library of books, articles and recordings.
pub fn library_engine() -> CatalogEngine<LibraryItem> {
    CatalogEngine::builder("library")
        .facet(FacetDef::attribute::<LibraryFormat>(
            "format",
            "Формат",
            SelectMode::Multi,
            |l: &LibraryItem| vec![l.format.as_str()],
        ))
        .facet(FacetDef::attribute::<MagicDirection>(
            "direction",
            "Направление",
            SelectMode::Single,
            |l: &LibraryItem| vec![l.direction.as_str()],
        ))
        .facet(FacetDef::attribute::<Access>(
            "access",
            "Доступ",
            SelectMode::Single,
            |l: &LibraryItem| vec![l.access.as_str()],
        ))
        .sort_keys(&[SortKey::Popular, SortKey::DateDesc, SortKey::NameAsc])
        .date_filter()
        .build()
}

pub fn teacher_engine() -> CatalogEngine<Teacher> {
    CatalogEngine::builder("teachers")
        .facet(FacetDef::attribute::<MagicDirection>(
            "direction",
            "Направление",
            SelectMode::Multi,
            |t: &Teacher| t.directions.iter().map(|d| d.as_str()).collect(),
        ))
        .sort_keys(&[SortKey::Popular, SortKey::NameAsc])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, CatalogItem};
    use crate::search::{DatePreset, FilterState};

    #[test]
    fn test_presets_build_from_default_pricing() {
        let pricing = PricingConfig::default();
        assert_eq!(artifact_engine(&pricing).unwrap().facets().len(), 5);
        assert!(course_engine(&pricing).unwrap().price_bounds().is_some());
        assert!(blog_engine().price_bounds().is_none());
        assert_eq!(blog_engine().default_sort(), SortKey::DateDesc);
    }

    #[test]
    fn test_seed_catalogs_pass_reset_state() {
        let pricing = PricingConfig::default();
        let engine = artifact_engine(&pricing).unwrap();
        let items = seed::artifacts();
        assert_eq!(engine.filter(&items, &engine.reset()).len(), items.len());

        let engine = course_engine(&pricing).unwrap();
        let items = seed::courses();
        assert_eq!(engine.filter(&items, &engine.reset()).len(), items.len());
    }

    #[test]
    fn test_date_filter_only_on_dated_pages() {
        let pricing = PricingConfig::default();
        assert!(blog_engine().has_date_filter());
        assert!(library_engine().has_date_filter());
        assert!(curriculum_engine().has_date_filter());
        assert!(course_engine(&pricing).unwrap().has_date_filter());
        assert!(!teacher_engine().has_date_filter());

        let engine = artifact_engine(&pricing).unwrap();
        assert!(!engine.has_date_filter());
        let items = seed::artifacts();
        let state = engine.reset().with_date(DatePreset::LastWeek);
        assert_eq!(engine.filter(&items, &state).len(), items.len());
        assert!(engine.summarize(&state).is_empty());
    }

    #[test]
    fn test_curriculum_status_facet() {
        let engine = curriculum_engine();
        let items = seed::curriculum();
        let state = FilterState::new().with_selection("status", "completed");
        let done = engine.filter(&items, &state);
        assert!(!done.is_empty());
        assert!(done.iter().all(|c| c.progress() == Some(100)));
    }

    #[test]
    fn test_teacher_multi_direction() {
        let engine = teacher_engine();
        let items = seed::teachers();
        let state = FilterState::new().with_values("direction", ["kabbalah"]);
        let found = engine.filter(&items, &state);
        assert!(found
            .iter()
            .all(|t| t.directions.contains(&MagicDirection::Kabbalah)));
    }
}
