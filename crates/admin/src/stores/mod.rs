//! Data stores backing the admin dashboard.
//!
//! Each data source is an explicit capability interface so production
//! implementations can swap in without touching route handlers. The product
//! catalog is wired to the real backend for reads; the user directory,
//! transaction ledger and analytics provider ship as fixture-backed
//! implementations with realistic response latency until their backend
//! endpoints exist.

pub mod analytics;
pub mod products;
pub mod transactions;
pub mod users;

pub use analytics::FixtureAnalyticsProvider;
pub use products::{ProductCatalog, ProductDraft};
pub use transactions::FixtureTransactionLedger;
pub use users::FixtureUserDirectory;

use async_trait::async_trait;
use thiserror::Error;

use kridha_core::{TransactionId, TransactionStatus};

use crate::models::{AnalyticsSummary, Transaction, User};

/// Errors that can occur when reading from a store.
#[derive(Debug, Error)]
pub enum StoreError {
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

    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read access to the customer directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch all customers.
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Access to the payment transaction ledger.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    /// Fetch all transactions.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Change a transaction's payment status.
    ///
    /// `completed_at` is stamped when the status becomes completed and
    /// cleared for any other status.
    async fn update_status(
        &self,
        id: &TransactionId,
        status: TransactionStatus,
    ) -> Result<Transaction, StoreError>;
}

/// Read access to store-wide analytics.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Fetch the analytics summary.
    async fn fetch_analytics(&self) -> Result<AnalyticsSummary, StoreError>;
}
