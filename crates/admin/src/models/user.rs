//! Store customer model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kridha_core::{Email, Price, UserId, UserStatus};

/// A store customer as shown in the admin user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Directory identity.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone number.
    pub phone: String,
    /// Lifetime order count.
    pub total_orders: u32,
    /// Lifetime spend.
    pub total_spent: Price,
    /// Account status.
    pub status: UserStatus,
    /// Signup date.
    pub joined_at: NaiveDate,
    /// Date of the most recent order, if any.
    pub last_order_at: Option<NaiveDate>,
}

impl User {
    /// Whether the user matches a free-text search over name, email and phone.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.email.as_str().to_lowercase().contains(&needle)
            || self.phone.contains(&needle)
    }
}
