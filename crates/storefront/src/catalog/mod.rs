//! Catalog backend REST client.
//!
//! Issues GET requests against the remote catalog API and caches successful
//! responses using `moka` (5-minute TTL). The backend owns all persistent
//! product and category data; this client never writes.
//!
//! # Caller contract
//!
//! The `fetch_*` methods return the parsed array, or `None` on any failure
//! (network error, non-2xx status, malformed body) with the error logged.
//! Callers render an empty view and try again on the next request; no retry
//! policy is implemented here.

mod cache;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use kridha_core::{CategoryId, Collection, Product, ProductId};

use crate::config::CatalogConfig;
use cache::CacheValue;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {snippet}")]
    Status {
        /// Response status code.
        status: reqwest::StatusCode,
        /// Leading bytes of the response body.
        snippet: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Response envelope of `GET /api/products/all`.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Response envelope of `GET /api/categories/all`.
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Collection>,
}

/// Client for the catalog backend REST API.
///
/// Cheaply cloneable; successful reads are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
                cache,
            }),
        }
    }

    /// Issue a GET request and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog backend returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                snippet: response_text.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    url = %url,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// Get all products, using the cache when warm.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response parsing fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let envelope: ProductsEnvelope = self.get_json("/api/products/all").await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(envelope.products.clone()))
            .await;

        Ok(envelope.products)
    }

    /// Get all collections, using the cache when warm.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response parsing fails.
    #[instrument(skip(self))]
    pub async fn collections(&self) -> Result<Vec<Collection>, CatalogError> {
        let cache_key = "collections".to_string();

        if let Some(CacheValue::Collections(collections)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let envelope: CategoriesEnvelope = self.get_json("/api/categories/all").await?;

        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::Collections(envelope.categories.clone()),
            )
            .await;

        Ok(envelope.categories)
    }

    // =========================================================================
    // Swallowing fetchers (the contract views depend on)
    // =========================================================================

    /// Fetch all products; `None` on any failure, error logged.
    pub async fn fetch_products(&self) -> Option<Vec<Product>> {
        match self.products().await {
            Ok(products) => Some(products),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                None
            }
        }
    }

    /// Fetch all collections; `None` on any failure, error logged.
    pub async fn fetch_collections(&self) -> Option<Vec<Collection>> {
        match self.collections().await {
            Ok(collections) => Some(collections),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching collections");
                None
            }
        }
    }

    // =========================================================================
    // Derived lookups
    // =========================================================================

    /// Look up a single product by id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.fetch_products()
            .await?
            .into_iter()
            .find(|p| &p.id == id)
    }

    /// Look up a single product by slug.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn product_by_slug(&self, slug: &str) -> Option<Product> {
        self.fetch_products()
            .await?
            .into_iter()
            .find(|p| p.slug == slug)
    }

    /// Look up a single collection by id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn collection_by_id(&self, id: &CategoryId) -> Option<Collection> {
        self.fetch_collections()
            .await?
            .into_iter()
            .find(|c| &c.id == id)
    }

    /// All products belonging to a category.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn products_in(&self, category: &CategoryId) -> Option<Vec<Product>> {
        Some(
            self.fetch_products()
                .await?
                .into_iter()
                .filter(|p| &p.category_id == category)
                .collect(),
        )
    }

    /// The most recently created products, newest first.
    #[instrument(skip(self))]
    pub async fn new_arrivals(&self, limit: usize) -> Option<Vec<Product>> {
        let mut products = self.fetch_products().await?;
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products.truncate(limit);
        Some(products)
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
