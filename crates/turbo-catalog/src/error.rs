//! Catalog error types.

use thiserror::Error;

/// Errors raised while validating or decoding catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Slug is not lowercase kebab-case.
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// Catalog payload could not be decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
