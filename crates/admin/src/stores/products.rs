//! Admin product catalog store.
//!
//! Reads come from the real catalog backend: [`ProductCatalog::refresh`]
//! fetches `GET /api/products/all` and replaces the local table wholesale.
//! Create, update and delete are optimistic local mutations only — the
//! backend offers no write endpoints, so locally minted rows live until the
//! next successful refresh discards them. A failed refresh leaves the local
//! table untouched.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use kridha_core::{AvailabilityStatus, Price, Product, ProductId};

use crate::config::AdminConfig;

use super::StoreError;

/// Response envelope of `GET /api/products/all`.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// The fields an operator supplies when creating or editing a product.
///
/// Identity and audit timestamps are always minted by the store.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub category_id: String,
    pub brand: String,
    pub price: Price,
    pub stock: u32,
    pub availability_status: AvailabilityStatus,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
}

/// Product store for the admin dashboard.
///
/// Cheaply cloneable; all clones share one product table.
#[derive(Clone)]
pub struct ProductCatalog {
    inner: Arc<ProductCatalogInner>,
}

struct ProductCatalogInner {
    client: reqwest::Client,
    base_url: String,
    state: RwLock<Vec<Product>>,
}

impl ProductCatalog {
    /// Create a new product catalog store. The table starts empty until the
    /// first [`refresh`](Self::refresh).
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let base_url = config
            .api_base_url
            .as_str()
            .trim_end_matches('/')
            .to_string();

        Self {
            inner: Arc::new(ProductCatalogInner {
                client: reqwest::Client::new(),
                base_url,
                state: RwLock::new(Vec::new()),
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the product table from the backend and replace the local copy.
    ///
    /// Optimistic local rows are discarded; the backend payload wins.
    /// Returns the number of products fetched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on network failure, non-2xx status or malformed
    /// body. The local table is left untouched on error.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, StoreError> {
        let url = format!("{}/api/products/all", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog backend returned non-success status"
            );
            return Err(StoreError::Status {
                status,
                snippet: response_text.chars().take(200).collect(),
            });
        }

        let envelope: ProductsEnvelope = serde_json::from_str(&response_text)?;
        let count = envelope.products.len();

        *self.write() = envelope.products;
        tracing::info!(count, "Product table refreshed from backend");

        Ok(count)
    }

    /// Current product table (value copy).
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Whether the table has been populated at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    /// Create a product locally with a minted id and fresh timestamps.
    ///
    /// The new row is prepended; it is not synced to the backend.
    pub fn create(&self, draft: ProductDraft) -> Product {
        let now = Utc::now();
        let product = Product {
            id: ProductId::from(Uuid::new_v4().to_string()),
            title: draft.title,
            slug: draft.slug,
            description: draft.description,
            category: draft.category,
            category_id: draft.category_id.into(),
            brand: draft.brand,
            price: draft.price,
            stock: draft.stock,
            availability_status: draft.availability_status,
            thumbnail: draft.thumbnail,
            images: draft.images,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };

        self.write().insert(0, product.clone());
        product
    }

    /// Apply a draft over an existing product, bumping `updated_at`.
    ///
    /// The change is local only; it is not synced to the backend.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has the given id.
    pub fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut state = self.write();

        let product = state
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

        product.title = draft.title;
        product.slug = draft.slug;
        product.description = draft.description;
        product.category = draft.category;
        product.category_id = draft.category_id.into();
        product.brand = draft.brand;
        product.price = draft.price;
        product.stock = draft.stock;
        product.availability_status = draft.availability_status;
        product.thumbnail = draft.thumbnail;
        product.images = draft.images;
        product.tags = draft.tags;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    /// Delete a product locally; no-op for an unknown id.
    pub fn delete(&self, id: &ProductId) {
        self.write().retain(|p| &p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProductCatalog {
        let config = AdminConfig {
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 3001,
            api_base_url: url::Url::parse("https://kridhastore.onrender.com").expect("url"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        ProductCatalog::new(&config)
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: "Fixture product".to_string(),
            category: "Electronics".to_string(),
            category_id: "c1".to_string(),
            brand: "Kridha".to_string(),
            price: Price::from_rupees(999),
            stock: 5,
            availability_status: AvailabilityStatus::InStock,
            thumbnail: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_create_mints_identity_and_prepends() {
        let catalog = catalog();

        let first = catalog.create(draft("Gaming Mouse"));
        let second = catalog.create(draft("Smart Watch"));

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);

        let products = catalog.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products.first().map(|p| p.title.as_str()), Some("Smart Watch"));
    }

    #[test]
    fn test_update_bumps_updated_at_only() {
        let catalog = catalog();
        let product = catalog.create(draft("Gaming Mouse"));

        let mut changed = draft("Gaming Mouse Pro");
        changed.price = Price::from_rupees(1899);
        let updated = catalog.update(&product.id, changed).expect("update");

        assert_eq!(updated.title, "Gaming Mouse Pro");
        assert_eq!(updated.price, Price::from_rupees(1899));
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let catalog = catalog();
        let result = catalog.update(&ProductId::from("missing"), draft("X"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_is_noop_for_unknown_id() {
        let catalog = catalog();
        let product = catalog.create(draft("Gaming Mouse"));

        catalog.delete(&ProductId::from("missing"));
        assert_eq!(catalog.products().len(), 1);

        catalog.delete(&product.id);
        assert!(catalog.is_empty());
    }
}
