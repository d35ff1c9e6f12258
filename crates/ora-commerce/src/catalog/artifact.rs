//! Artifacts sold in the shop.

use serde::{Deserialize, Serialize};

use crate::catalog::{Availability, CatalogItem, ItemKind, JewelryType, MagicDirection, Material, Stone};
use crate::ids::ItemId;
use crate::money::Money;

/// A piece of ritual jewelry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub jewelry_type: JewelryType,
    /// Inset stones; an artifact may carry several.
    pub stones: Vec<Stone>,
    pub material: Material,
    pub availability: Availability,
    pub direction: MagicDirection,
    pub price: Money,
    pub image: String,
}

impl Artifact {
    /// Whether the artifact can be put in the cart right now.
    pub fn is_purchasable(&self) -> bool {
        self.availability != Availability::SoldOut
    }
}

impl CatalogItem for Artifact {
    const KIND: ItemKind = ItemKind::Artifact;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }
}
