//! State held by a mounted brand view.

use std::sync::Arc;

use serde::Serialize;
use turbo_catalog::{category_tree, Brand, CategoryNode, Product};
use turbo_core::QueryParams;

use crate::filter::{filter_for_query, FilterKey, ProductList};

/// Everything the view holds for the lifetime of a page visit.
#[derive(Debug)]
pub(crate) struct ListingState {
    pub brand: Brand,
    pub products: ProductList,
    pub filtered: ProductList,
    pub categories: Arc<Vec<CategoryNode>>,
    pub query: QueryParams,
    /// Bumped on every route change; stale fetch results are dropped.
    pub generation: u64,
    /// Cleared at teardown; no mutation is accepted afterwards.
    pub active: bool,
}

impl ListingState {
    pub fn new(brand: Brand) -> Self {
        Self {
            brand,
            products: Arc::new(Vec::new()),
            filtered: Arc::new(Vec::new()),
            categories: Arc::new(Vec::new()),
            query: QueryParams::new(),
            generation: 0,
            active: true,
        }
    }

    /// Start a new fetch and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Store a fetched listing as both the full and the filtered list.
    pub fn load(&mut self, products: Vec<Product>) {
        let products = Arc::new(products);
        self.categories = Arc::new(category_tree(&products));
        self.filtered = Arc::clone(&products);
        self.products = products;
    }

    /// Record a query and recompute the filtered list from the full list.
    pub fn apply_query(&mut self, query: QueryParams) {
        self.filtered = filter_for_query(&self.products, &query);
        self.query = query;
    }

    /// Current `catSlug` query value.
    pub fn active_category(&self) -> Option<&str> {
        self.query
            .get(FilterKey::CatSlug.query_key())
            .map(String::as_str)
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        ListingSnapshot {
            brand: self.brand.clone(),
            products: self.products.to_vec(),
            filtered: self.filtered.to_vec(),
            categories: self.categories.to_vec(),
            active_category: self.active_category().map(str::to_string),
        }
    }
}

/// Serializable copy of the view state, e.g. for handing to a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub brand: Brand,
    pub products: Vec<Product>,
    pub filtered: Vec<Product>,
    pub categories: Vec<CategoryNode>,
    pub active_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_catalog::Category;

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "One", "one", Category::new("p1", "").with_parent(Category::new("s1", ""))),
            Product::new("2", "Two", "two", Category::new("p2", "").with_parent(Category::new("s2", ""))),
        ]
    }

    #[test]
    fn test_load_sets_full_and_filtered() {
        let mut state = ListingState::new(Brand::new("b", "acme", "Acme"));
        state.load(products());

        assert!(Arc::ptr_eq(&state.products, &state.filtered));
        assert_eq!(state.categories.len(), 2);
    }

    #[test]
    fn test_apply_query_tracks_active_category() {
        let mut state = ListingState::new(Brand::new("b", "acme", "Acme"));
        state.load(products());
        state.apply_query(QueryParams::from([("subCatSlug".to_string(), "s2".to_string())]));

        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.active_category(), None);

        state.apply_query(QueryParams::from([("catSlug".to_string(), "c9".to_string())]));
        assert_eq!(state.active_category(), Some("c9"));
        assert!(state.filtered.is_empty());
        assert_eq!(state.snapshot().active_category.as_deref(), Some("c9"));
    }

    #[test]
    fn test_query_before_load_filters_empty_list() {
        let mut state = ListingState::new(Brand::new("b", "acme", "Acme"));
        state.apply_query(QueryParams::from([("partSlug".to_string(), "p1".to_string())]));
        assert!(state.filtered.is_empty());
    }

    #[test]
    fn test_generations_increase() {
        let mut state = ListingState::new(Brand::new("b", "acme", "Acme"));
        assert_eq!(state.begin_fetch(), 1);
        assert_eq!(state.begin_fetch(), 2);
    }
}
