//! Meta tag sets.

use serde::{Deserialize, Serialize};
use turbo_catalog::Brand;

/// Which attribute identifies a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    /// `<meta name="...">`, used by standard and Twitter tags.
    Name,
    /// `<meta property="...">`, used by Open Graph tags.
    Property,
}

impl MetaKey {
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub name: String,
    pub content: String,
}

impl MetaTag {
    /// A `name=` tag.
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name,
            name: name.into(),
            content: content.into(),
        }
    }

    /// A `property=` tag.
    pub fn property(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property,
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered set of meta tags, unique by (key, name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTags {
    tags: Vec<MetaTag>,
}

impl MetaTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, replacing any tag with the same key and name.
    pub fn insert(&mut self, tag: MetaTag) {
        match self
            .tags
            .iter_mut()
            .find(|t| t.key == tag.key && t.name == tag.name)
        {
            Some(existing) => existing.content = tag.content,
            None => self.tags.push(tag),
        }
    }

    /// Builder form of `insert`.
    pub fn with(mut self, tag: MetaTag) -> Self {
        self.insert(tag);
        self
    }

    /// Look up a tag's content by name, regardless of key.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.content.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Build the tag set for a brand page.
pub fn meta_tags(brand: &Brand) -> MetaTags {
    let mut tags = MetaTags::new()
        .with(MetaTag::property("og:title", brand.meta_title.as_str()))
        .with(MetaTag::property("og:type", "website"));

    if let Some(summary) = brand.summary() {
        tags.insert(MetaTag::name("description", summary));
        tags.insert(MetaTag::property("og:description", summary));
    }

    let card = match &brand.image_url {
        Some(image) => {
            tags.insert(MetaTag::property("og:image", image.as_str()));
            "summary_large_image"
        }
        None => "summary",
    };
    tags.insert(MetaTag::name("twitter:card", card));

    tags
}
