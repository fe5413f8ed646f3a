//! Page title and meta tag handling for TurboCommerce.
//!
//! This crate provides:
//! - `MetaTags` - Ordered set of `<meta>` tags for a page
//! - `meta_tags` - Tag set derived from a `Brand`
//! - `SeoSink` - Write-only destination for title and tags
//! - `DocumentHead` - In-memory sink that renders head HTML

mod head;
mod tags;

pub use head::*;
pub use tags::*;
