//! Fixture-backed transaction ledger.
//!
//! Stands in for the payments endpoint the backend does not expose yet.
//! Status updates mutate the loaded fixture state so the dashboard behaves
//! like a live ledger within one process lifetime.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use kridha_core::{Email, OrderId, Price, TransactionId, TransactionStatus};

use crate::models::{Transaction, TransactionLine};

use super::{StoreError, TransactionLedger};

/// Simulated backend response time.
const FETCH_LATENCY: Duration = Duration::from_millis(800);

/// Fixture-backed [`TransactionLedger`].
#[derive(Clone, Default)]
pub struct FixtureTransactionLedger {
    // Seeded lazily on first fetch; None until then.
    state: Arc<RwLock<Option<Vec<Transaction>>>>,
}

impl FixtureTransactionLedger {
    fn loaded(&self) -> Vec<Transaction> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.get_or_insert_with(fixture_transactions).clone()
    }
}

#[async_trait]
impl TransactionLedger for FixtureTransactionLedger {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        tokio::time::sleep(FETCH_LATENCY).await;
        Ok(self.loaded())
    }

    async fn update_status(
        &self,
        id: &TransactionId,
        status: TransactionStatus,
    ) -> Result<Transaction, StoreError> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let transactions = state.get_or_insert_with(fixture_transactions);

        let transaction = transactions
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("transaction {id}")))?;

        transaction.status = status;
        transaction.completed_at =
            (status == TransactionStatus::Completed).then(Utc::now);

        Ok(transaction.clone())
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn email(addr: &str) -> Email {
    Email::parse(addr).expect("valid fixture email")
}

/// The seeded transaction ledger.
#[must_use]
pub fn fixture_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: TransactionId::from("1"),
            order_id: OrderId::from("KS-2025-001"),
            customer_name: "Rahul Sharma".to_string(),
            customer_email: email("rahul@example.com"),
            amount: Price::from_rupees(11998),
            status: TransactionStatus::Completed,
            payment_method: "UPI".to_string(),
            products: vec![
                TransactionLine {
                    name: "Wireless Headphones".to_string(),
                    quantity: 1,
                    price: Price::from_rupees(2999),
                },
                TransactionLine {
                    name: "Smart Watch".to_string(),
                    quantity: 1,
                    price: Price::from_rupees(8999),
                },
            ],
            created_at: at(2025, 1, 15, 10, 30),
            completed_at: Some(at(2025, 1, 15, 10, 32)),
        },
        Transaction {
            id: TransactionId::from("2"),
            order_id: OrderId::from("KS-2025-002"),
            customer_name: "Priya Singh".to_string(),
            customer_email: email("priya@example.com"),
            amount: Price::from_rupees(1599),
            status: TransactionStatus::Completed,
            payment_method: "Credit Card".to_string(),
            products: vec![TransactionLine {
                name: "Cotton T-Shirt".to_string(),
                quantity: 2,
                price: Price::from_rupees(799),
            }],
            created_at: at(2025, 1, 15, 14, 20),
            completed_at: Some(at(2025, 1, 15, 14, 21)),
        },
        Transaction {
            id: TransactionId::from("3"),
            order_id: OrderId::from("KS-2025-003"),
            customer_name: "Amit Patel".to_string(),
            customer_email: email("amit@example.com"),
            amount: Price::from_rupees(4898),
            status: TransactionStatus::Pending,
            payment_method: "Net Banking".to_string(),
            products: vec![
                TransactionLine {
                    name: "Wireless Headphones".to_string(),
                    quantity: 1,
                    price: Price::from_rupees(2999),
                },
                TransactionLine {
                    name: "Gaming Mouse".to_string(),
                    quantity: 1,
                    price: Price::from_rupees(1899),
                },
            ],
            created_at: at(2025, 1, 15, 16, 45),
            completed_at: None,
        },
        Transaction {
            id: TransactionId::from("4"),
            order_id: OrderId::from("KS-2025-004"),
            customer_name: "Sunita Gupta".to_string(),
            customer_email: email("sunita@example.com"),
            amount: Price::from_rupees(8999),
            status: TransactionStatus::Failed,
            payment_method: "UPI".to_string(),
            products: vec![TransactionLine {
                name: "Smart Watch".to_string(),
                quantity: 1,
                price: Price::from_rupees(8999),
            }],
            created_at: at(2025, 1, 14, 11, 15),
            completed_at: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_seeded_ledger() {
        let ledger = FixtureTransactionLedger::default();
        let transactions = ledger.fetch_transactions().await.expect("fixture fetch");

        assert_eq!(transactions.len(), 4);
        assert_eq!(
            transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Completed)
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_update_status_stamps_completed_at() {
        let ledger = FixtureTransactionLedger::default();
        let id = TransactionId::from("3");

        let updated = ledger
            .update_status(&id, TransactionStatus::Completed)
            .await
            .expect("update");
        assert_eq!(updated.status, TransactionStatus::Completed);
        assert!(updated.completed_at.is_some());

        // Back to pending clears the completion timestamp.
        let reverted = ledger
            .update_status(&id, TransactionStatus::Pending)
            .await
            .expect("update");
        assert!(reverted.completed_at.is_none());

        // The mutation sticks across fetches.
        let transactions = ledger.fetch_transactions().await.expect("fetch");
        let transaction = transactions
            .iter()
            .find(|t| t.id == id)
            .expect("transaction present");
        assert_eq!(transaction.status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_errors() {
        let ledger = FixtureTransactionLedger::default();
        let result = ledger
            .update_status(&TransactionId::from("999"), TransactionStatus::Failed)
            .await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
