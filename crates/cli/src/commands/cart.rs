//! Inspect or reset the persisted cart file.

use std::path::PathBuf;

use kridha_storefront::cart::{self, CartStorage};
use tracing::info;

fn storage() -> CartStorage {
    let _ = dotenvy::dotenv();
    let path = std::env::var("STOREFRONT_CART_PATH")
        .map_or_else(|_| PathBuf::from("data/cart.json"), PathBuf::from);
    CartStorage::new(path)
}

/// Print the persisted cart lines and derived totals.
///
/// # Errors
///
/// Infallible today; kept fallible to match the command interface.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let storage = storage();
    let lines = storage.load();

    if lines.is_empty() {
        info!(path = %storage.path().display(), "cart is empty");
        return Ok(());
    }

    for line in &lines {
        info!(
            id = %line.product.id,
            title = %line.product.title,
            quantity = line.quantity,
            line_total = %line.line_total(),
        );
    }
    info!(
        items = cart::item_count(&lines),
        subtotal = %cart::subtotal(&lines),
        "cart summary"
    );

    Ok(())
}

/// Overwrite the persisted cart with an empty table.
///
/// # Errors
///
/// Infallible today; kept fallible to match the command interface.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let storage = storage();
    storage.save(&[]);
    info!(path = %storage.path().display(), "cart cleared");
    Ok(())
}
