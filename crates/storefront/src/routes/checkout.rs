//! Checkout route handlers.
//!
//! The checkout snapshot is captured when checkout starts (from the cart or
//! a single buy-now product) and cleared unconditionally when the order is
//! placed or abandoned. Shipping details use browser-native required-field
//! validation only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use kridha_core::ProductId;

use crate::cart;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::cart::CartItemView;
use crate::state::AppState;

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

/// Buy-now form data.
#[derive(Debug, Deserialize)]
pub struct BuyNowForm {
    pub product_id: String,
}

/// Shipping details submitted with the order.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub phone: String,
}

/// Snapshot the current cart and go to checkout.
#[instrument(skip(state))]
pub async fn start(State(state): State<AppState>) -> Redirect {
    state.cart().begin_checkout_from_cart();
    Redirect::to("/checkout")
}

/// Snapshot a single product (quantity 1) and go to checkout, independent
/// of the cart contents.
#[instrument(skip(state))]
pub async fn buy_now(
    State(state): State<AppState>,
    Form(form): Form<BuyNowForm>,
) -> Result<Redirect> {
    let product_id = ProductId::from(form.product_id);

    let product = state
        .catalog()
        .product_by_id(&product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    state.cart().begin_buy_now(product);
    Ok(Redirect::to("/checkout"))
}

/// Display the order summary and shipping form.
///
/// An empty snapshot means no checkout is in progress; back to the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Response {
    let lines = state.cart().checkout_lines();
    if lines.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let subtotal = cart::subtotal(&lines);
    // Shipping is free at the moment; the total still spells the sum out.
    let total = subtotal;

    CheckoutShowTemplate {
        items: lines.iter().map(CartItemView::from).collect(),
        subtotal: subtotal.to_string(),
        shipping: "Free".to_string(),
        total: total.to_string(),
    }
    .into_response()
}

/// Place the order and clear the snapshot.
#[instrument(skip(state, form))]
pub async fn place(State(state): State<AppState>, Form(form): Form<PlaceOrderForm>) -> Response {
    let lines = state.cart().checkout_lines();
    if lines.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    tracing::info!(
        email = %form.email,
        city = %form.city,
        items = lines.len(),
        subtotal = %cart::subtotal(&lines),
        "Order placed"
    );

    state.cart().clear_checkout();
    Redirect::to("/").into_response()
}

/// Abandon checkout: clear the snapshot and return to the cart.
#[instrument(skip(state))]
pub async fn cancel(State(state): State<AppState>) -> Redirect {
    state.cart().clear_checkout();
    Redirect::to("/cart")
}
