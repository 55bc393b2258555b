//! Cache types for catalog backend responses.

use kridha_core::{Collection, Product};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Collections(Vec<Collection>),
}
