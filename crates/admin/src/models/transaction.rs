//! Payment transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kridha_core::{Email, OrderId, Price, TransactionId, TransactionStatus};

/// A purchased line inside a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLine {
    /// Product name at purchase time.
    pub name: String,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price at purchase time.
    pub price: Price,
}

/// A payment transaction as shown in the admin order ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Ledger identity.
    pub id: TransactionId,
    /// Human-facing order number (e.g., KS-2025-001).
    pub order_id: OrderId,
    /// Customer name.
    pub customer_name: String,
    /// Customer email.
    pub customer_email: Email,
    /// Total charged.
    pub amount: Price,
    /// Payment state.
    pub status: TransactionStatus,
    /// Payment method label (UPI, Credit Card, ...).
    pub payment_method: String,
    /// Purchased lines.
    pub products: Vec<TransactionLine>,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// When payment completed; only set while status is completed.
    pub completed_at: Option<DateTime<Utc>>,
}
