//! Library of books, articles and recordings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Access, CatalogItem, ItemKind, LibraryFormat, MagicDirection};
use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub format: LibraryFormat,
    pub direction: MagicDirection,
    pub access: Access,
    pub published_on: NaiveDate,
}

impl CatalogItem for LibraryItem {
    const KIND: ItemKind = ItemKind::Article;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str(), self.description.as_str()]
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.published_on)
    }
}
