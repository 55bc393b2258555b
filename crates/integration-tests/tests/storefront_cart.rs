//! Integration tests for the storefront cart and checkout flows.
//!
//! These tests require a running storefront server with a reachable catalog
//! backend. Run with: `cargo test -p kridha-integration-tests -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::Value;

use kridha_integration_tests::storefront_base_url;

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Test helper: pick a product id off the backend the server talks to.
async fn any_product_id(client: &Client) -> String {
    let api = std::env::var("KRIDHA_API_BASE_URL")
        .expect("KRIDHA_API_BASE_URL must be set for cart tests");
    let body: Value = client
        .get(format!("{api}/api/products/all"))
        .send()
        .await
        .expect("Failed to reach catalog backend")
        .json()
        .await
        .expect("Failed to parse products payload");

    body["products"][0]["_id"]
        .as_str()
        .expect("backend returned no products")
        .to_string()
}

// ============================================================================
// Cart Flow Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_cart_page_renders() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Your Cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_add_to_cart_updates_count() {
    let client = client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.as_str())])
        .send()
        .await
        .expect("Failed to add to cart");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let count = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get cart count")
        .text()
        .await
        .expect("Failed to read count fragment");
    assert!(count.contains("badge"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_add_unknown_product_is_rejected() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "does-not-exist")])
        .send()
        .await
        .expect("Failed to post add form");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_clear_cart_empties_page() {
    let client = client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.as_str())])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base_url}/cart/clear"))
        .send()
        .await
        .expect("Failed to clear cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page")
        .text()
        .await
        .expect("Failed to read cart page");
    assert!(body.contains("No products available"));
}

// ============================================================================
// Checkout Flow Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_checkout_without_snapshot_redirects_to_cart() {
    let client = client();
    let base_url = storefront_base_url();

    // Make sure no snapshot is in progress
    client
        .post(format!("{base_url}/checkout/cancel"))
        .send()
        .await
        .expect("Failed to cancel checkout");

    let resp = client
        .get(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("Failed to get checkout page");

    // Redirects land back on the cart page
    assert!(resp.url().path().ends_with("/cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_buy_now_checkout_shows_single_item() {
    let client = client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    let resp = client
        .post(format!("{base_url}/checkout/buy-now"))
        .form(&[("product_id", product_id.as_str())])
        .send()
        .await
        .expect("Failed to post buy-now");

    assert!(resp.status().is_success());
    let body = resp.text().await.expect("Failed to read checkout page");
    assert!(body.contains("Order Summary"));
    assert!(body.contains("Qty: 1"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_place_order_clears_snapshot() {
    let client = client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    client
        .post(format!("{base_url}/checkout/buy-now"))
        .form(&[("product_id", product_id.as_str())])
        .send()
        .await
        .expect("Failed to post buy-now");

    let resp = client
        .post(format!("{base_url}/checkout/place"))
        .form(&[
            ("email", "test@example.com"),
            ("first_name", "Test"),
            ("last_name", "Shopper"),
            ("address", "1 MG Road"),
            ("city", "Bengaluru"),
            ("state", "Karnataka"),
            ("pin_code", "560001"),
            ("phone", "+91 9876500000"),
        ])
        .send()
        .await
        .expect("Failed to place order");
    assert!(resp.status().is_success());

    // The snapshot is gone, so checkout bounces back to the cart
    let resp = client
        .get(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("Failed to get checkout page");
    assert!(resp.url().path().ends_with("/cart"));
}
