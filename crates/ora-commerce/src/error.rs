//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, filter and cart operations.
///
/// None of these are fatal to a session: callers recover by keeping the
/// previous state or treating the input as empty.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog entries share an identifier.
    #[error("Duplicate item id in {catalog} catalog: {id}")]
    DuplicateItem { catalog: &'static str, id: String },

    /// A price range whose lower bound exceeds its upper bound.
    #[error("Invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: String, max: String },

    /// A price range expressed in a different currency than the catalog.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Facet key not declared for this catalog.
    #[error("Unknown filter facet: {0}")]
    UnknownFacet(String),

    /// Value outside a facet's enumeration.
    #[error("Unknown value {value:?} for facet {facet}")]
    UnknownFacetValue { facet: String, value: String },

    /// Unrecognized enumeration value when parsing.
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistence layer error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Filesystem error while loading catalogs or config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ora_cache::CacheError> for CommerceError {
    fn from(e: ora_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CommerceError {
    fn from(e: toml::ser::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
