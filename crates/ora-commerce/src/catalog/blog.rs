//! Blog posts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{BlogCategory, CatalogItem, ItemKind};
use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: BlogCategory,
    /// Free-form tags, unlike the closed category.
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub published_on: NaiveDate,
    pub read_minutes: u16,
    #[serde(default)]
    pub image: String,
}

impl BlogPost {
    /// Tags as string slices, for facet extraction.
    pub fn tag_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

impl CatalogItem for BlogPost {
    const KIND: ItemKind = ItemKind::Blog;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str(), self.body.as_str()]
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.published_on)
    }
}
