//! Integration tests for the Kridha store.
//!
//! # Running Tests
//!
//! ```bash
//! # Start both servers first
//! cargo run -p kridha-storefront &
//! cargo run -p kridha-admin &
//!
//! # Run the ignored integration tests
//! cargo test -p kridha-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart and checkout flows over HTTP
//! - `storefront_pages` - Page and fragment rendering
//! - `admin_dashboard` - Admin pages and product CRUD
//!
//! Base URLs default to the local development ports and can be overridden
//! via `STOREFRONT_BASE_URL` and `ADMIN_BASE_URL`.

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin dashboard (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
