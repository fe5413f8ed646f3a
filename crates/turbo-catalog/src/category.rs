//! Category chain attached to each product.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Depth of a category relative to the product that references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryLevel {
    /// The product's own category (leaf).
    Part,
    /// The parent of the leaf.
    SubCategory,
    /// The grandparent of the leaf (top level).
    Category,
}

impl CategoryLevel {
    /// All levels, leaf first.
    pub const ALL: [CategoryLevel; 3] = [
        CategoryLevel::Part,
        CategoryLevel::SubCategory,
        CategoryLevel::Category,
    ];

    /// Number of parent links between the leaf and this level.
    pub fn depth(&self) -> usize {
        match self {
            CategoryLevel::Part => 0,
            CategoryLevel::SubCategory => 1,
            CategoryLevel::Category => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLevel::Part => "part",
            CategoryLevel::SubCategory => "sub-category",
            CategoryLevel::Category => "category",
        }
    }
}

/// A category node as embedded in a product payload.
///
/// The storefront API nests ancestors inline: a product's `category` is its
/// leaf, whose `parent` is the sub-category, whose `parent` is the top-level
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// URL-friendly slug.
    pub slug: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Parent category (None at the top of the chain).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Category>>,
}

impl Category {
    /// Create a top-level category.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            slug: slug.into(),
            name: name.into(),
            parent: None,
        }
    }

    /// Attach a parent and return the child.
    pub fn with_parent(mut self, parent: Category) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Set the category identifier.
    pub fn with_id(mut self, id: impl Into<CategoryId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Follow `depth` parent links, or `None` if the chain is shorter.
    pub fn ancestor_at(&self, depth: usize) -> Option<&Category> {
        match depth {
            0 => Some(self),
            n => self.parent.as_deref()?.ancestor_at(n - 1),
        }
    }

    /// Slug of the ancestor `depth` links up.
    pub fn ancestor_slug_at(&self, depth: usize) -> Option<&str> {
        self.ancestor_at(depth).map(|c| c.slug.as_str())
    }

    /// Slug at a named level of the chain.
    pub fn slug_at(&self, level: CategoryLevel) -> Option<&str> {
        self.ancestor_slug_at(level.depth())
    }

    /// Check if this is a top-level category.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of nodes in the chain, this one included.
    pub fn chain_len(&self) -> usize {
        1 + self.parent.as_deref().map_or(0, Category::chain_len)
    }

    /// Chain from the top-level ancestor down to this category.
    pub fn lineage(&self) -> Vec<&Category> {
        let mut chain = Vec::with_capacity(self.chain_len());
        let mut node = Some(self);
        while let Some(current) = node {
            chain.push(current);
            node = current.parent.as_deref();
        }
        chain.reverse();
        chain
    }
}
