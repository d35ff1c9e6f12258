//! Teacher directory.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, ItemKind, MagicDirection};
use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: ItemId,
    pub name: String,
    pub bio: String,
    pub directions: Vec<MagicDirection>,
    pub experience_years: u8,
    /// Average rating in tenths of a star (47 = 4.7).
    pub rating_tenths: u8,
    #[serde(default)]
    pub image: String,
}

impl Teacher {
    pub fn rating(&self) -> f32 {
        f32::from(self.rating_tenths) / 10.0
    }
}

impl CatalogItem for Teacher {
    const KIND: ItemKind = ItemKind::Teacher;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.bio.as_str()]
    }
}
