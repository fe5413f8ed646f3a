//! Category filtering of a brand listing.

use std::sync::Arc;

use turbo_catalog::{CategoryLevel, Product};
use turbo_core::QueryParams;

/// Shared, immutable product list.
pub type ProductList = Arc<Vec<Product>>;

/// Query keys that filter the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// `catSlug`: match the top-level category.
    CatSlug,
    /// `subCatSlug`: match the sub-category.
    SubCatSlug,
    /// `partSlug`: match the product's own category.
    PartSlug,
}

/// Recognized keys in processing order, least specific first.
///
/// Each present key recomputes the result from the full list, so the last
/// one processed (the most specific) determines the outcome.
pub const FILTER_KEYS: [FilterKey; 3] = [FilterKey::CatSlug, FilterKey::SubCatSlug, FilterKey::PartSlug];

impl FilterKey {
    /// Name of the query parameter.
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterKey::CatSlug => "catSlug",
            FilterKey::SubCatSlug => "subCatSlug",
            FilterKey::PartSlug => "partSlug",
        }
    }

    /// Category level this key matches against.
    pub fn level(&self) -> CategoryLevel {
        match self {
            FilterKey::CatSlug => CategoryLevel::Category,
            FilterKey::SubCatSlug => CategoryLevel::SubCategory,
            FilterKey::PartSlug => CategoryLevel::Part,
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        FILTER_KEYS.into_iter().find(|k| k.query_key() == key)
    }
}

/// Slugs to filter by. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub cat_slug: Option<String>,
    pub sub_cat_slug: Option<String>,
    pub part_slug: Option<String>,
}

impl ListingFilter {
    /// A filter with a single key set.
    pub fn single(key: FilterKey, slug: impl Into<String>) -> Self {
        let mut filter = Self::default();
        let slug = Some(slug.into());
        match key {
            FilterKey::CatSlug => filter.cat_slug = slug,
            FilterKey::SubCatSlug => filter.sub_cat_slug = slug,
            FilterKey::PartSlug => filter.part_slug = slug,
        }
        filter
    }

    fn slug(&self, key: FilterKey) -> Option<&str> {
        let slug = match key {
            FilterKey::CatSlug => &self.cat_slug,
            FilterKey::SubCatSlug => &self.sub_cat_slug,
            FilterKey::PartSlug => &self.part_slug,
        };
        slug.as_deref().filter(|s| !s.is_empty())
    }

    /// The key that applies, by precedence `partSlug` > `subCatSlug` > `catSlug`.
    pub fn effective(&self) -> Option<(FilterKey, &str)> {
        FILTER_KEYS
            .iter()
            .rev()
            .find_map(|&key| self.slug(key).map(|slug| (key, slug)))
    }
}

/// Whether a product's category matches `slug` at the key's level.
///
/// A chain too short to reach that level is a non-match.
pub fn product_matches(product: &Product, key: FilterKey, slug: &str) -> bool {
    product.category.slug_at(key.level()) == Some(slug)
}

/// Filter a listing, preserving order.
///
/// With no effective key the full list is returned as-is (same allocation).
pub fn filter_products(products: &ProductList, filter: &ListingFilter) -> ProductList {
    match filter.effective() {
        Some((key, slug)) => Arc::new(
            products
                .iter()
                .filter(|p| product_matches(p, key, slug))
                .cloned()
                .collect(),
        ),
        None => Arc::clone(products),
    }
}

/// Recompute the filtered listing for a query.
///
/// Each recognized key present triggers an independent pass over the full
/// list in `FILTER_KEYS` order; each pass overwrites the previous result.
/// Unrecognized keys and empty values are ignored. Without any recognized
/// key the full list is returned.
pub fn filter_for_query(products: &ProductList, query: &QueryParams) -> ProductList {
    let mut result = Arc::clone(products);
    for key in FILTER_KEYS {
        if let Some(slug) = query.get(key.query_key()).filter(|s| !s.is_empty()) {
            result = filter_products(products, &ListingFilter::single(key, slug.as_str()));
        }
    }
    result
}
