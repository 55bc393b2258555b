//! Integration tests for storefront page rendering.
//!
//! These tests require a running storefront server with a reachable catalog
//! backend. Run with: `cargo test -p kridha-integration-tests -- --ignored`

use reqwest::{Client, StatusCode};

use kridha_integration_tests::storefront_base_url;

fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_home_page_renders_sections() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(&base_url)
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("New Arrivals"));
    assert!(body.contains("Shop by Collection"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_products_page_renders() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("All Products"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_unknown_product_returns_404() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/products/definitely-not-a-slug"))
        .send()
        .await
        .expect("Failed to get product page");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog backend"]
async fn test_collections_page_renders() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/collections"))
        .send()
        .await
        .expect("Failed to get collections page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Collections"));
}
