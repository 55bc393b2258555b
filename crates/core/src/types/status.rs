//! Status enums for catalog, user and transaction entities.
//!
//! Wire values match the catalog backend exactly; `Display`/`FromStr` are
//! used by templates and form handling.

use serde::{Deserialize, Serialize};

/// Product availability as reported by the catalog backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AvailabilityStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Preorder")]
    Preorder,
}

impl AvailabilityStatus {
    /// Whether a buy action should be offered for the product.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        matches!(self, Self::InStock | Self::Preorder)
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "In Stock"),
            Self::OutOfStock => write!(f, "Out of Stock"),
            Self::Preorder => write!(f, "Preorder"),
        }
    }
}

impl std::str::FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(Self::InStock),
            "Out of Stock" => Ok(Self::OutOfStock),
            "Preorder" => Ok(Self::Preorder),
            _ => Err(format!("invalid availability status: {s}")),
        }
    }
}

/// Account status of a store customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid user status: {s}")),
        }
    }
}

/// Payment state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid transaction status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_wire_values() {
        let status: AvailabilityStatus =
            serde_json::from_str("\"Out of Stock\"").expect("deserialize");
        assert_eq!(status, AvailabilityStatus::OutOfStock);
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::InStock).expect("serialize"),
            "\"In Stock\""
        );
    }

    #[test]
    fn test_availability_purchasable() {
        assert!(AvailabilityStatus::InStock.is_purchasable());
        assert!(AvailabilityStatus::Preorder.is_purchasable());
        assert!(!AvailabilityStatus::OutOfStock.is_purchasable());
    }

    #[test]
    fn test_status_round_trips() {
        for s in ["pending", "completed", "failed"] {
            let status: TransactionStatus = s.parse().expect("parse");
            assert_eq!(status.to_string(), s);
        }
        assert!("refunded".parse::<TransactionStatus>().is_err());
        assert!("banned".parse::<UserStatus>().is_err());
    }
}
