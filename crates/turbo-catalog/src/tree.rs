//! Category tree derived from a product listing.

use crate::category::Category;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A node in the navigation tree rendered beside the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    /// URL-friendly slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Child nodes in first-seen order.
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    fn from_category(category: &Category) -> Self {
        Self {
            slug: category.slug.clone(),
            name: category.name.clone(),
            children: Vec::new(),
        }
    }

    /// Find a direct child by slug.
    pub fn child(&self, slug: &str) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.slug == slug)
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::node_count).sum::<usize>()
    }
}

/// Build the category tree for a set of products.
///
/// Roots are the topmost ancestors of each product's chain. Nodes are merged
/// by slug at each level and keep the order in which they were first seen.
pub fn category_tree(products: &[Product]) -> Vec<CategoryNode> {
    let mut roots: Vec<CategoryNode> = Vec::new();

    for product in products {
        let mut level = &mut roots;
        for category in product.category.lineage() {
            let idx = match level.iter().position(|n| n.slug == category.slug) {
                Some(idx) => idx,
                None => {
                    level.push(CategoryNode::from_category(category));
                    level.len() - 1
                }
            };
            level = &mut level[idx].children;
        }
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, part: &str, sub: &str, cat: &str) -> Product {
        Product::new(
            id,
            id,
            id,
            Category::new(part, part.to_uppercase()).with_parent(
                Category::new(sub, sub.to_uppercase()).with_parent(Category::new(cat, cat.to_uppercase())),
            ),
        )
    }

    #[test]
    fn test_tree_merges_by_slug() {
        let products = vec![
            product("1", "p1", "s1", "c1"),
            product("2", "p2", "s1", "c1"),
            product("3", "p3", "s2", "c1"),
            product("4", "p1", "s1", "c1"),
        ];

        let tree = category_tree(&products);
        assert_eq!(tree.len(), 1);

        let c1 = &tree[0];
        assert_eq!(c1.slug, "c1");
        assert_eq!(c1.name, "C1");
        let subs: Vec<&str> = c1.children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(subs, vec!["s1", "s2"]);

        let parts: Vec<&str> = c1.child("s1").unwrap().children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(parts, vec!["p1", "p2"]);
        assert_eq!(c1.node_count(), 6);
    }

    #[test]
    fn test_tree_preserves_first_seen_root_order() {
        let products = vec![
            product("1", "p1", "s1", "c2"),
            product("2", "p2", "s2", "c1"),
        ];
        let roots: Vec<String> = category_tree(&products).into_iter().map(|n| n.slug).collect();
        assert_eq!(roots, vec!["c2", "c1"]);
    }

    #[test]
    fn test_tree_short_chain_contributes_its_levels() {
        let products = vec![Product::new(
            "1",
            "One",
            "one",
            Category::new("p1", "P1").with_parent(Category::new("s1", "S1")),
        )];
        let tree = category_tree(&products);
        assert_eq!(tree[0].slug, "s1");
        assert_eq!(tree[0].children[0].slug, "p1");
    }

    #[test]
    fn test_empty_listing() {
        assert!(category_tree(&[]).is_empty());
    }
}
