//! Cart and checkout state container.
//!
//! Holds the shopper's in-progress cart (one line per product id) and the
//! checkout snapshot handed to the payment step. The container is owned by
//! `AppState` and injected into handlers; it is not a process-wide global.
//!
//! Every cart mutation is a single atomic state replacement under the write
//! lock, mirrored to [`CartStorage`] before the lock is released. The
//! checkout snapshot is ephemeral: populated at checkout start, cleared
//! unconditionally on completion or cancel, never persisted.

mod storage;

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use kridha_core::{Price, Product, ProductId};

pub use storage::CartStorage;

/// A product plus a quantity; one per distinct product id.
///
/// The serialized form flattens the product fields next to `quantity`,
/// matching the document layout of the persisted cart file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being purchased.
    #[serde(flatten)]
    pub product: Product,
    /// Positive number of units.
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart value: Σ price × quantity. Recomputed by consumers, never stored.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::line_total).sum()
}

/// Derived badge value: total units across all lines.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[derive(Debug, Default)]
struct CartState {
    lines: Vec<CartLine>,
    checkout: Vec<CartLine>,
}

/// The cart/checkout container.
///
/// Cheaply cloneable handle; all clones share one state table.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: CartStorage,
    state: RwLock<CartState>,
}

impl CartStore {
    /// Open the container, hydrating the cart table from storage.
    ///
    /// Storage failures are treated as an empty cart.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let storage = CartStorage::new(path);
        let lines = storage.load();

        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                state: RwLock::new(CartState {
                    lines,
                    checkout: Vec::new(),
                }),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add a product to the cart.
    ///
    /// If a line with the same product id exists its quantity is incremented
    /// by 1; otherwise a new quantity-1 line is appended. Always succeeds.
    pub fn add(&self, product: Product) {
        let mut state = self.write();

        if let Some(line) = state.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            state.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }

        self.inner.storage.save(&state.lines);
    }

    /// Remove the line with the given product id; no-op when absent.
    pub fn remove(&self, id: &ProductId) {
        let mut state = self.write();
        state.lines.retain(|line| &line.product.id != id);
        self.inner.storage.save(&state.lines);
    }

    /// Empty the cart table.
    pub fn clear(&self) {
        let mut state = self.write();
        state.lines.clear();
        self.inner.storage.save(&state.lines);
    }

    /// Current cart lines (value copy).
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.read().lines.clone()
    }

    /// Total units in the cart, for the badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        item_count(&self.read().lines)
    }

    // =========================================================================
    // Checkout operations
    // =========================================================================

    /// Capture the current cart as the checkout snapshot (value copy).
    pub fn begin_checkout_from_cart(&self) {
        let mut state = self.write();
        state.checkout = state.lines.clone();
    }

    /// Replace the checkout snapshot with a single quantity-1 line for the
    /// given product, independent of the cart and any prior snapshot.
    pub fn begin_buy_now(&self, product: Product) {
        let mut state = self.write();
        state.checkout = vec![CartLine {
            product,
            quantity: 1,
        }];
    }

    /// Empty the checkout snapshot.
    pub fn clear_checkout(&self) {
        self.write().checkout.clear();
    }

    /// Current checkout snapshot (value copy).
    #[must_use]
    pub fn checkout_lines(&self) -> Vec<CartLine> {
        self.read().checkout.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kridha_core::AvailabilityStatus;

    fn product(id: &str, rupees: i64) -> Product {
        Product {
            id: ProductId::from(id),
            title: format!("Product {id}"),
            slug: format!("product-{id}"),
            description: String::new(),
            category: "Electronics".to_string(),
            category_id: "c1".into(),
            brand: "Kridha".to_string(),
            price: Price::from_rupees(rupees),
            stock: 10,
            availability_status: AvailabilityStatus::InStock,
            thumbnail: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> CartStore {
        CartStore::open(dir.path().join("cart.json"))
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 100));
        store.add(product("a", 100));

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].product.price, Price::from_rupees(100));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 100));
        store.remove(&ProductId::from("missing"));

        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 50));
        store.add(product("a", 50));
        store.add(product("b", 30));

        // 2 x 50 + 1 x 30 = 130
        assert_eq!(subtotal(&store.lines()), Price::from_rupees(130));
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_buy_now_replaces_snapshot_regardless_of_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 100));
        store.add(product("a", 100));
        store.begin_checkout_from_cart();
        store.begin_buy_now(product("b", 30));

        let checkout = store.checkout_lines();
        assert_eq!(checkout.len(), 1);
        assert_eq!(checkout[0].product.id, ProductId::from("b"));
        assert_eq!(checkout[0].quantity, 1);
    }

    #[test]
    fn test_snapshot_is_value_copy() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 100));
        store.begin_checkout_from_cart();

        // Mutating the cart afterwards must not affect the captured snapshot.
        store.add(product("a", 100));
        store.add(product("b", 30));
        store.clear();

        let checkout = store.checkout_lines();
        assert_eq!(checkout.len(), 1);
        assert_eq!(checkout[0].quantity, 1);
    }

    #[test]
    fn test_clear_checkout_empties_snapshot_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(product("a", 100));
        store.begin_checkout_from_cart();
        store.clear_checkout();

        assert!(store.checkout_lines().is_empty());
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_cart_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let store = CartStore::open(path.clone());
        store.add(product("a", 100));
        store.add(product("a", 100));
        drop(store);

        let reopened = CartStore::open(path);
        let lines = reopened.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        // The checkout snapshot is never persisted.
        assert!(reopened.checkout_lines().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let store = CartStore::open(path.clone());
        store.add(product("a", 100));
        store.clear();
        drop(store);

        assert!(CartStore::open(path).lines().is_empty());
    }

    #[test]
    fn test_corrupt_cart_file_hydrates_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, b"{ not json").unwrap();

        assert!(CartStore::open(path).lines().is_empty());
    }

    #[test]
    fn test_line_round_trips_through_storage_shape() {
        let line = CartLine {
            product: product("a", 799),
            quantity: 2,
        };

        let value = serde_json::to_value(&line).unwrap();
        // Flattened: product fields sit next to quantity.
        assert_eq!(value["_id"], "a");
        assert_eq!(value["quantity"], 2);

        let back: CartLine = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
    }
}
