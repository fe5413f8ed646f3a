//! Brand product services.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use turbo_catalog::{validate_slug, Product};

use crate::transport::Transport;
use crate::{FetchError, Request, RetryPolicy};

/// Source of the product listing for a brand page.
#[async_trait]
pub trait BrandsService: Send + Sync {
    /// Fetch every product a brand owns.
    async fn get_brand_products(&self, brand_slug: &str) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl<S: BrandsService + ?Sized> BrandsService for Arc<S> {
    async fn get_brand_products(&self, brand_slug: &str) -> Result<Vec<Product>, FetchError> {
        (**self).get_brand_products(brand_slug).await
    }
}

/// The listing endpoint answers with either a bare array or an envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsPayload {
    List(Vec<Product>),
    Envelope { products: Vec<Product> },
}

impl From<ProductsPayload> for Vec<Product> {
    fn from(payload: ProductsPayload) -> Self {
        match payload {
            ProductsPayload::List(products) | ProductsPayload::Envelope { products } => products,
        }
    }
}

/// `BrandsService` backed by the storefront REST API.
///
/// Requests `GET {base_url}/brands/{slug}/products`, retrying server errors
/// and transport failures according to its `RetryPolicy`.
pub struct ApiBrandsService<T> {
    base_url: String,
    transport: T,
    retry: RetryPolicy,
    timeout: Duration,
}

impl<T: Transport> ApiBrandsService<T> {
    /// Create a service for the given API base URL.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            retry: RetryPolicy::default(),
            timeout: Duration::from_millis(500),
        }
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of a brand's product listing. The slug is percent-encoded as a
    /// single path segment.
    pub fn products_url(&self, brand_slug: &str) -> Result<String, FetchError> {
        validate_slug(brand_slug)?;
        Ok(format!(
            "{}/brands/{}/products",
            self.base_url,
            urlencoding::encode(brand_slug)
        ))
    }

    async fn attempt(&self, url: &str) -> Result<Vec<Product>, FetchError> {
        let request = Request::get(url).accept("application/json").build();
        let response = tokio::time::timeout(self.timeout, self.transport.execute(request))
            .await
            .map_err(|_| FetchError::Timeout)??;
        let payload: ProductsPayload = response.error_for_status()?.json()?;
        Ok(payload.into())
    }
}

#[async_trait]
impl<T: Transport> BrandsService for ApiBrandsService<T> {
    async fn get_brand_products(&self, brand_slug: &str) -> Result<Vec<Product>, FetchError> {
        let url = self.products_url(brand_slug)?;
        let mut attempt = 0;

        loop {
            match self.attempt(&url).await {
                Ok(products) => {
                    tracing::debug!(brand = brand_slug, count = products.len(), "fetched brand products");
                    return Ok(products);
                }
                Err(FetchError::HttpError { status: 404, .. }) => {
                    return Err(FetchError::BrandNotFound(brand_slug.to_string()));
                }
                Err(e) if self.retry.should_retry(&e, attempt) => {
                    let delay = self.retry.backoff.delay_for_attempt(attempt);
                    tracing::warn!(brand = brand_slug, attempt, error = %e, ?delay, "retrying brand products fetch");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// `BrandsService` serving fixed listings from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBrands {
    listings: HashMap<String, Vec<Product>>,
}

impl InMemoryBrands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listing for a brand.
    pub fn with_brand(mut self, brand_slug: impl Into<String>, products: Vec<Product>) -> Self {
        self.listings.insert(brand_slug.into(), products);
        self
    }
}

#[async_trait]
impl BrandsService for InMemoryBrands {
    async fn get_brand_products(&self, brand_slug: &str) -> Result<Vec<Product>, FetchError> {
        self.listings
            .get(brand_slug)
            .cloned()
            .ok_or_else(|| FetchError::BrandNotFound(brand_slug.to_string()))
    }
}
