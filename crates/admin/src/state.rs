//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::stores::{
    AnalyticsProvider, FixtureAnalyticsProvider, FixtureTransactionLedger, FixtureUserDirectory,
    ProductCatalog, TransactionLedger, UserDirectory,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The non-product stores are
/// held behind their capability traits so real backend implementations can
/// replace the fixtures without touching handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    products: ProductCatalog,
    users: Arc<dyn UserDirectory>,
    transactions: Arc<dyn TransactionLedger>,
    analytics: Arc<dyn AnalyticsProvider>,
}

impl AppState {
    /// Create a new application state with the shipped store implementations.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let products = ProductCatalog::new(&config);

        Self::with_stores(
            config,
            products,
            Arc::new(FixtureUserDirectory),
            Arc::new(FixtureTransactionLedger::default()),
            Arc::new(FixtureAnalyticsProvider),
        )
    }

    /// Create application state with explicit store implementations.
    #[must_use]
    pub fn with_stores(
        config: AdminConfig,
        products: ProductCatalog,
        users: Arc<dyn UserDirectory>,
        transactions: Arc<dyn TransactionLedger>,
        analytics: Arc<dyn AnalyticsProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                users,
                transactions,
                analytics,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog store.
    #[must_use]
    pub fn products(&self) -> &ProductCatalog {
        &self.inner.products
    }

    /// Get a reference to the customer directory.
    #[must_use]
    pub fn users(&self) -> &dyn UserDirectory {
        self.inner.users.as_ref()
    }

    /// Get a reference to the transaction ledger.
    #[must_use]
    pub fn transactions(&self) -> &dyn TransactionLedger {
        self.inner.transactions.as_ref()
    }

    /// Get a reference to the analytics provider.
    #[must_use]
    pub fn analytics(&self) -> &dyn AnalyticsProvider {
        self.inner.analytics.as_ref()
    }
}
