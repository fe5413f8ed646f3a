//! Brand product listing page.
//!
//! Mounts a view for a pre-resolved brand, loads the brand's products when
//! the `brandSlug` route parameter changes, derives the category tree for
//! navigation, and filters the loaded list by `catSlug`, `subCatSlug` or
//! `partSlug` query parameters.
//!
//! ```rust,ignore
//! let (mut navigator, routes) = RouteStreams::channel();
//! let view = BrandView::builder(brand)
//!     .service(Arc::new(brands))
//!     .seo(head.clone())
//!     .init(routes)?;
//!
//! navigator.navigate("/brands/acme?catSlug=brakes")?;
//! ```

mod error;
mod filter;
mod state;
mod view;

pub use error::ViewError;
pub use filter::{
    filter_for_query, filter_products, product_matches, FilterKey, ListingFilter, ProductList,
    FILTER_KEYS,
};
pub use state::ListingSnapshot;
pub use view::{BrandView, BrandViewBuilder, BRAND_SLUG_PARAM};
