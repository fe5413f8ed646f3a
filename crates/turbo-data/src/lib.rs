//! Brand data service for TurboCommerce storefronts.
//!
//! This crate provides:
//! - `BrandsService` - Async source of a brand's product listing
//! - `ApiBrandsService` - REST-backed implementation with retry and timeout
//! - `InMemoryBrands` - Fixed listings for composition and tests
//! - `Transport` - Seam to the HTTP stack (`ReqwestTransport`)
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::prelude::*;
//!
//! let service = ApiBrandsService::new("https://api.example.com", ReqwestTransport::default())
//!     .with_retry(RetryPolicy::new(2));
//! let products = service.get_brand_products("acme").await?;
//! ```

mod error;
mod request;
mod response;
mod retry;
mod service;
mod transport;

pub use error::FetchError;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use retry::{BackoffStrategy, RetryPolicy};
pub use service::{ApiBrandsService, BrandsService, InMemoryBrands};
pub use transport::{ReqwestTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiBrandsService, BrandsService, FetchError, InMemoryBrands, ReqwestTransport,
        RetryPolicy, Transport,
    };
}
