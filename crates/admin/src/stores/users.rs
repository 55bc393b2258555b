//! Fixture-backed customer directory.
//!
//! Stands in for the user endpoint the backend does not expose yet. The
//! dataset is static; the artificial latency keeps consumers honest about
//! loading states.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use kridha_core::{Email, Price, UserId, UserStatus};

use crate::models::User;

use super::{StoreError, UserDirectory};

/// Simulated backend response time.
const FETCH_LATENCY: Duration = Duration::from_millis(600);

/// Fixture-backed [`UserDirectory`].
#[derive(Debug, Default, Clone)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        tokio::time::sleep(FETCH_LATENCY).await;
        Ok(fixture_users())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn email(addr: &str) -> Email {
    Email::parse(addr).expect("valid fixture email")
}

/// The seeded customer directory.
#[must_use]
pub fn fixture_users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("1"),
            name: "Rahul Sharma".to_string(),
            email: email("rahul@example.com"),
            phone: "+91 9876543210".to_string(),
            total_orders: 5,
            total_spent: Price::from_rupees(25990),
            status: UserStatus::Active,
            joined_at: date(2024, 12, 1),
            last_order_at: Some(date(2025, 1, 15)),
        },
        User {
            id: UserId::from("2"),
            name: "Priya Singh".to_string(),
            email: email("priya@example.com"),
            phone: "+91 9876543211".to_string(),
            total_orders: 3,
            total_spent: Price::from_rupees(4797),
            status: UserStatus::Active,
            joined_at: date(2024, 11, 15),
            last_order_at: Some(date(2025, 1, 15)),
        },
        User {
            id: UserId::from("3"),
            name: "Amit Patel".to_string(),
            email: email("amit@example.com"),
            phone: "+91 9876543212".to_string(),
            total_orders: 1,
            total_spent: Price::from_rupees(4898),
            status: UserStatus::Active,
            joined_at: date(2025, 1, 10),
            last_order_at: Some(date(2025, 1, 15)),
        },
        User {
            id: UserId::from("4"),
            name: "Sunita Gupta".to_string(),
            email: email("sunita@example.com"),
            phone: "+91 9876543213".to_string(),
            total_orders: 2,
            total_spent: Price::from_rupees(1798),
            status: UserStatus::Inactive,
            joined_at: date(2024, 10, 20),
            last_order_at: Some(date(2024, 12, 25)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_seeded_directory() {
        let directory = FixtureUserDirectory;
        let users = directory.fetch_users().await.expect("fixture fetch");

        assert_eq!(users.len(), 4);
        assert_eq!(
            users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            3
        );
    }
}
