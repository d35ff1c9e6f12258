//! Courses offered in the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, CourseFormat, ItemKind, Level, MagicDirection};
use crate::ids::ItemId;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub direction: MagicDirection,
    pub level: Level,
    pub format: CourseFormat,
    /// Id of the teacher in the teacher directory.
    pub teacher_id: ItemId,
    pub price: Money,
    pub starts_on: NaiveDate,
    pub duration_weeks: u16,
    pub image: String,
}

impl CatalogItem for Course {
    const KIND: ItemKind = ItemKind::Course;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.starts_on)
    }
}
