//! Brand catalog types for TurboCommerce storefronts.
//!
//! - **Brand**: merchandising entity with page metadata
//! - **Product**: listing payload carrying its category chain inline
//! - **Category**: up to three levels (category → sub-category → part)
//! - **Tree**: navigation tree derived from a product listing
//!
//! # Example
//!
//! ```rust
//! use turbo_catalog::prelude::*;
//!
//! let pads = Category::new("pads", "Pads")
//!     .with_parent(Category::new("brakes", "Brakes").with_parent(Category::new("parts", "Parts")));
//! let product = Product::new("1", "Ceramic Pads", "ceramic-pads", pads);
//!
//! assert_eq!(product.category.slug_at(CategoryLevel::Category), Some("parts"));
//! assert_eq!(category_tree(&[product])[0].slug, "parts");
//! ```

pub mod brand;
pub mod category;
pub mod error;
pub mod ids;
pub mod product;
pub mod slug;
pub mod tree;

pub use brand::Brand;
pub use category::{Category, CategoryLevel};
pub use error::CatalogError;
pub use ids::*;
pub use product::Product;
pub use slug::validate_slug;
pub use tree::{category_tree, CategoryNode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::brand::Brand;
    pub use crate::category::{Category, CategoryLevel};
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::product::Product;
    pub use crate::slug::validate_slug;
    pub use crate::tree::{category_tree, CategoryNode};
}
