//! Wishlist store: owns the wishlist aggregate and mirrors it to storage.

use furnistore_core::clock::SharedClock;
use furnistore_core::persistence::PersistenceMirror;
use furnistore_core::product::{Product, ProductId};
use furnistore_core::storage::SharedStorage;
use tracing::debug;

use crate::domain::aggregates::Wishlist;

/// Storage slot holding the persisted wishlist.
pub const WISHLIST_SLOT: &str = "furnistore.wishlist";

/// The shopper's wishlist with write-through persistence.
///
/// The slot is rewritten after every mutation, including ones that leave the
/// wishlist empty; only `clear` deletes it.
pub struct WishlistStore {
    wishlist: Wishlist,
    clock: SharedClock,
    mirror: PersistenceMirror,
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

impl WishlistStore {
    /// Creates the store, restoring the wishlist from `storage` when a valid
    /// slot exists. The restored state is written back immediately.
    #[must_use]
    pub fn load(storage: SharedStorage, clock: SharedClock) -> Self {
        let mirror = PersistenceMirror::new(storage);
        let wishlist = mirror
            .load::<Wishlist>(WISHLIST_SLOT)
            .map(Wishlist::deduplicated)
            .unwrap_or_default();
        debug!(entries = wishlist.len(), "wishlist store initialized");
        let store = Self {
            wishlist,
            clock,
            mirror,
        };
        store.persist();
        store
    }

    /// Returns the current wishlist.
    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Saves `product`. Returns false if it was already saved.
    pub fn add_item(&mut self, product: &Product) -> bool {
        let added = self.wishlist.add_item(product, self.clock.now());
        debug!(product_id = %product.id, added, "add to wishlist");
        if added {
            self.persist();
        }
        added
    }

    /// Removes `product_id`; unknown ids are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let removed = self.wishlist.remove_item(product_id);
        debug!(%product_id, removed, "remove from wishlist");
        self.persist();
    }

    /// Returns true if `product_id` is saved.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Empties the wishlist and deletes its slot.
    pub fn clear(&mut self) {
        self.wishlist.clear();
        self.mirror.remove(WISHLIST_SLOT);
        debug!("cleared wishlist");
    }

    fn persist(&self) {
        self.mirror.save(WISHLIST_SLOT, &self.wishlist);
    }
}
