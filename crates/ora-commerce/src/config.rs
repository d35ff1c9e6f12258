//! Storefront configuration.
//!
//! Loaded from TOML (or JSON, by extension). Every section has defaults so an
//! empty file, or no file at all, yields a working storefront.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cart::DEFAULT_CART_KEY;
use crate::error::CommerceError;
use crate::favorites::{DEFAULT_BOOKMARKS_KEY, DEFAULT_FAVORITES_KEY, DEFAULT_SUBSCRIPTIONS_KEY};
use crate::money::{Currency, Money};
use crate::search::PriceRange;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    /// Optional JSON files replacing the built-in catalogs.
    #[serde(default)]
    pub catalog: CatalogSources,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CommerceError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.pricing.currency()?;
        self.pricing.artifact_bounds()?;
        self.pricing.course_bounds()?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Local storage keys and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,

    #[serde(default = "default_bookmarks_key")]
    pub bookmarks_key: String,

    #[serde(default = "default_subscriptions_key")]
    pub subscriptions_key: String,

    /// Directory for file-backed storage (CLI only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

fn default_bookmarks_key() -> String {
    DEFAULT_BOOKMARKS_KEY.to_string()
}

fn default_subscriptions_key() -> String {
    DEFAULT_SUBSCRIPTIONS_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
            favorites_key: default_favorites_key(),
            bookmarks_key: default_bookmarks_key(),
            subscriptions_key: default_subscriptions_key(),
            data_dir: None,
        }
    }
}

/// Currency and the global price slider bounds, in whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_artifact_bounds")]
    pub artifact_price_bounds: [i64; 2],

    #[serde(default = "default_course_bounds")]
    pub course_price_bounds: [i64; 2],
}

fn default_currency() -> String {
    Currency::RUB.code().to_string()
}

fn default_artifact_bounds() -> [i64; 2] {
    [0, 50_000]
}

fn default_course_bounds() -> [i64; 2] {
    [0, 100_000]
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            artifact_price_bounds: default_artifact_bounds(),
            course_price_bounds: default_course_bounds(),
        }
    }
}

impl PricingConfig {
    pub fn currency(&self) -> Result<Currency, CommerceError> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| CommerceError::Config(format!("Unknown currency: {}", self.currency)))
    }

    pub fn artifact_bounds(&self) -> Result<PriceRange, CommerceError> {
        self.bounds(self.artifact_price_bounds)
    }

    pub fn course_bounds(&self) -> Result<PriceRange, CommerceError> {
        self.bounds(self.course_price_bounds)
    }

    fn bounds(&self, [min, max]: [i64; 2]) -> Result<PriceRange, CommerceError> {
        let currency = self.currency()?;
        PriceRange::new(Money::whole(min, currency), Money::whole(max, currency))
    }
}

/// JSON files replacing the built-in catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teachers: Option<PathBuf>,
}

/// Generate a commented default config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Ora storefront configuration

[storage]
cart_key = "{cart}"
favorites_key = "{favorites}"
bookmarks_key = "{bookmarks}"
subscriptions_key = "{subscriptions}"
# data_dir = ".ora"

[pricing]
currency = "RUB"
artifact_price_bounds = [0, 50000]
course_price_bounds = [0, 100000]

[catalog]
# artifacts = "data/artifacts.json"
"#,
        cart = DEFAULT_CART_KEY,
        favorites = DEFAULT_FAVORITES_KEY,
        bookmarks = DEFAULT_BOOKMARKS_KEY,
        subscriptions = DEFAULT_SUBSCRIPTIONS_KEY,
    )
}
