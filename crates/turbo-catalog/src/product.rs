//! Product listing payload.

use crate::category::Category;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as returned by the brand listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Leaf category, with ancestors nested inline.
    pub category: Category,
    /// Price in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i64>,
    /// Listing image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

impl Product {
    /// Create a product in the given leaf category.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            category,
            price_cents: None,
            image_url: None,
            short_description: None,
        }
    }

    /// Set the price.
    pub fn with_price_cents(mut self, cents: i64) -> Self {
        self.price_cents = Some(cents);
        self
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> Option<String> {
        self.price_cents
            .map(|cents| format!("${:.2}", cents as f64 / 100.0))
    }
}
