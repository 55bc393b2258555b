//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Dashboard overview
//! GET  /health                   - Health check
//!
//! # Products (optimistic local CRUD; fetch is backend-wired)
//! GET  /products                 - Product table (?q= search)
//! POST /products/refresh         - Re-fetch the table from the backend
//! GET  /products/new             - Create form
//! POST /products                 - Create product (local)
//! GET  /products/{id}            - Product detail
//! GET  /products/{id}/edit       - Edit form
//! POST /products/{id}            - Update product (local)
//! POST /products/{id}/delete     - Delete product (local)
//!
//! # Users
//! GET  /users                    - User directory (?q= search, ?status= filter)
//!
//! # Orders
//! GET  /orders                   - Transaction ledger
//! POST /orders/{id}/status       - Update transaction status
//!
//! # Analytics
//! GET  /analytics                - Analytics summary and aggregations
//! ```

pub mod analytics;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/refresh", post(products::refresh))
        .route("/new", get(products::new))
        .route("/{id}", get(products::show).post(products::update))
        .route("/{id}/edit", get(products::edit))
        .route("/{id}/delete", post(products::delete))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}/status", post(orders::update_status))
}

/// Create all routes for the admin dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .nest("/products", product_routes())
        .route("/users", get(users::index))
        .nest("/orders", order_routes())
        .route("/analytics", get(analytics::index))
}
