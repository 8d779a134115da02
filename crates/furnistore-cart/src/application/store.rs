//! Cart store: owns the cart aggregate and mirrors it to storage.

use furnistore_core::persistence::PersistenceMirror;
use furnistore_core::storage::SharedStorage;
use tracing::debug;

use crate::domain::aggregates::{Cart, CartSnapshot};
use crate::domain::commands::{AddItem, RemoveItem, UpdateQuantity};

/// Storage slot holding the persisted cart.
pub const CART_SLOT: &str = "furnistore.cart";

/// The shopper's cart with write-through persistence.
///
/// A non-empty cart is rewritten to [`CART_SLOT`] after every mutation. An
/// empty cart has no slot: clearing or removing the last line deletes it.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    mirror: PersistenceMirror,
}

impl CartStore {
    /// Creates the store, restoring the cart from `storage` when a valid
    /// slot exists and starting empty otherwise.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let mirror = PersistenceMirror::new(storage);
        let cart = mirror
            .load::<CartSnapshot>(CART_SLOT)
            .map(Cart::from_snapshot)
            .unwrap_or_default();
        debug!(lines = cart.items().len(), "cart store initialized");
        Self { cart, mirror }
    }

    /// Returns the current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds a product, merging with an existing line of the same variant.
    pub fn add_item(&mut self, command: &AddItem) {
        self.cart
            .add_item(&command.product, command.quantity, &command.variant);
        debug!(
            product_id = %command.product.id,
            quantity = command.quantity,
            item_count = self.cart.item_count(),
            "added item to cart"
        );
        self.persist();
    }

    /// Removes a line; unknown lines are ignored.
    pub fn remove_item(&mut self, command: &RemoveItem) {
        let removed = self.cart.remove_item(&command.line_item_id);
        debug!(line_item_id = %command.line_item_id, removed, "removed item from cart");
        self.persist();
    }

    /// Sets the quantity of a line; zero or less removes it.
    pub fn update_quantity(&mut self, command: &UpdateQuantity) {
        let updated = self
            .cart
            .update_quantity(&command.line_item_id, command.quantity);
        debug!(
            line_item_id = %command.line_item_id,
            quantity = command.quantity,
            updated,
            "updated cart quantity"
        );
        self.persist();
    }

    /// Empties the cart and deletes its slot.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.mirror.remove(CART_SLOT);
        debug!("cleared cart");
    }

    /// Flips the drawer visibility. Not persisted.
    pub fn toggle_open(&mut self) {
        self.cart.toggle_open();
    }

    fn persist(&self) {
        if self.cart.is_empty() {
            self.mirror.remove(CART_SLOT);
        } else {
            self.mirror.save(CART_SLOT, &self.cart.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use furnistore_test_support::{FailingStorage, RecordingStorage, StorageOp, product};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::aggregates::{LineItemId, Variant};

    fn add(id: &str, cents: i64, quantity: u32) -> AddItem {
        AddItem {
            product: product(id, cents),
            quantity,
            variant: Variant::default(),
        }
    }

    #[test]
    fn test_add_item_writes_cart_slot() {
        // Arrange
        let storage = Arc::new(RecordingStorage::new());
        let mut store = CartStore::load(storage.clone());

        // Act
        store.add_item(&add("chair", 4_999, 2));

        // Assert
        let raw = storage.raw(CART_SLOT).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["total"], "99.98");
        assert_eq!(json["items"][0]["id"], "chair-default-default");
        assert!(json.get("isOpen").is_none());
    }

    #[test]
    fn test_load_restores_persisted_cart() {
        let storage = Arc::new(RecordingStorage::new());
        {
            let mut store = CartStore::load(storage.clone());
            store.add_item(&add("chair", 1_000, 1));
            store.add_item(&AddItem {
                product: product("sofa", 50_000),
                quantity: 1,
                variant: Variant::new("L", "grey"),
            });
        }

        let store = CartStore::load(storage);

        assert_eq!(store.cart().items().len(), 2);
        assert_eq!(store.cart().total(), Decimal::new(51_000, 2));
        assert_eq!(
            store.cart().items()[1].variant.selected_color.as_deref(),
            Some("grey")
        );
    }

    #[test]
    fn test_load_with_malformed_slot_starts_empty() {
        let storage = Arc::new(RecordingStorage::with_entries([(CART_SLOT, "[oops")]));

        let store = CartStore::load(storage);

        assert!(store.cart().is_empty());
        assert_eq!(store.cart().total(), Decimal::ZERO);
    }

    #[test]
    fn test_clear_deletes_slot_instead_of_writing_empty_cart() {
        let storage = Arc::new(RecordingStorage::new());
        let mut store = CartStore::load(storage.clone());
        store.add_item(&add("chair", 1_000, 1));

        store.clear();

        assert!(!storage.contains(CART_SLOT));
        assert_eq!(
            storage.ops().last(),
            Some(&StorageOp::Delete(CART_SLOT.to_owned()))
        );
        assert_eq!(store.cart().item_count(), 0);
    }

    #[test]
    fn test_removing_last_line_drops_slot() {
        let storage = Arc::new(RecordingStorage::new());
        let mut store = CartStore::load(storage.clone());
        store.add_item(&add("chair", 1_000, 1));

        store.update_quantity(&UpdateQuantity {
            line_item_id: LineItemId::from("chair-default-default"),
            quantity: 0,
        });

        assert!(store.cart().is_empty());
        assert!(!storage.contains(CART_SLOT));
    }

    #[test]
    fn test_remove_item_rewrites_slot_with_remaining_lines() {
        let storage = Arc::new(RecordingStorage::new());
        let mut store = CartStore::load(storage.clone());
        store.add_item(&add("chair", 1_000, 1));
        store.add_item(&add("lamp", 2_000, 1));

        store.remove_item(&RemoveItem {
            line_item_id: LineItemId::from("chair-default-default"),
        });

        let restored = CartStore::load(storage);
        assert_eq!(restored.cart().items().len(), 1);
        assert_eq!(restored.cart().items()[0].product.id.as_str(), "lamp");
    }

    #[test]
    fn test_toggle_open_does_not_touch_storage() {
        let storage = Arc::new(RecordingStorage::new());
        let mut store = CartStore::load(storage.clone());

        store.toggle_open();

        assert!(store.cart().is_open());
        assert!(storage.ops().is_empty());
    }

    #[test]
    fn test_store_keeps_working_when_storage_fails() {
        let mut store = CartStore::load(Arc::new(FailingStorage));

        store.add_item(&add("chair", 1_000, 3));
        store.clear();
        store.add_item(&add("chair", 1_000, 1));

        assert_eq!(store.cart().item_count(), 1);
    }
}
