//! Validate environment configuration for both applications.

use kridha_admin::config::AdminConfig;
use kridha_storefront::config::StorefrontConfig;
use tracing::info;

/// Load both app configurations and report the resolved addresses.
///
/// # Errors
///
/// Returns an error if either configuration fails to load.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let storefront = StorefrontConfig::from_env()?;
    info!(
        addr = %storefront.socket_addr(),
        api = %storefront.catalog.base_url,
        cart = %storefront.cart_path.display(),
        "storefront configuration OK"
    );

    let admin = AdminConfig::from_env()?;
    info!(
        addr = %admin.socket_addr(),
        api = %admin.api_base_url,
        "admin configuration OK"
    );

    Ok(())
}
