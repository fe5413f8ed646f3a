//! Brand metadata.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A merchandising brand owning a set of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// URL-friendly slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Page title used for SEO.
    pub meta_title: String,
    /// Page description used for SEO.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Long-form description shown on the brand page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Brand logo or banner URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Brand {
    /// Create a brand whose meta title defaults to its name.
    pub fn new(id: impl Into<BrandId>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: slug.into(),
            meta_title: name.clone(),
            name,
            meta_description: None,
            description: None,
            image_url: None,
        }
    }

    /// Override the meta title.
    pub fn with_meta_title(mut self, title: impl Into<String>) -> Self {
        self.meta_title = title.into();
        self
    }

    /// Set the meta description.
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Description for meta tags, falling back to the long description.
    pub fn summary(&self) -> Option<&str> {
        self.meta_description
            .as_deref()
            .or(self.description.as_deref())
    }
}
