//! Inspect the catalog backend.

use kridha_storefront::catalog::CatalogClient;
use kridha_storefront::config::CatalogConfig;
use tracing::info;

fn client() -> Result<CatalogClient, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = CatalogConfig::from_env()?;
    Ok(CatalogClient::new(&config))
}

/// Fetch and print all products.
///
/// # Errors
///
/// Returns an error if configuration is missing or the backend is unreachable.
pub async fn products() -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;

    let Some(products) = client.fetch_products().await else {
        return Err("catalog backend did not return products".into());
    };

    info!(count = products.len(), "products fetched");
    for product in &products {
        info!(
            id = %product.id,
            title = %product.title,
            price = %product.price,
            stock = product.stock,
            status = %product.availability_status,
        );
    }

    Ok(())
}

/// Fetch and print all collections.
///
/// # Errors
///
/// Returns an error if configuration is missing or the backend is unreachable.
pub async fn collections() -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;

    let Some(collections) = client.fetch_collections().await else {
        return Err("catalog backend did not return collections".into());
    };

    info!(count = collections.len(), "collections fetched");
    for collection in &collections {
        info!(id = %collection.id, name = %collection.name, slug = %collection.slug);
    }

    Ok(())
}
