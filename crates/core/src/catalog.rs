//! Wire types for the catalog backend.
//!
//! Field names follow the backend's JSON exactly (`_id`, camelCase audit
//! timestamps), mapped to Rust naming with serde renames. Both applications
//! deserialize into these types; neither ever writes them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AvailabilityStatus, CategoryId, Price, ProductId};

/// A product in the store catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identity.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Plain text description.
    pub description: String,
    /// Category display name.
    pub category: String,
    /// Owning category identity.
    pub category_id: CategoryId,
    /// Brand name.
    pub brand: String,
    /// Unit price in rupees.
    pub price: Price,
    /// Units on hand.
    pub stock: u32,
    /// Availability as reported by the backend.
    #[serde(rename = "availabilityStatus")]
    pub availability_status: AvailabilityStatus,
    /// Primary image URL.
    pub thumbnail: String,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.availability_status.is_purchasable()
    }
}

/// A named, slugged grouping of products (category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Backend identity.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Cover image URL.
    pub image: String,
}
