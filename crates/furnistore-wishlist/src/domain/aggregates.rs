//! Aggregate root for the wishlist.

use chrono::{DateTime, Utc};
use furnistore_core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// A saved product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Product identifier; also the identity of the entry.
    pub id: ProductId,
    /// Product snapshot taken when it was saved.
    pub product: Product,
    /// When the product was saved.
    pub date_added: DateTime<Utc>,
}

/// The aggregate root for a wishlist. Also its persisted shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `product`. Returns false, leaving the wishlist unchanged, if the
    /// product is already saved.
    pub fn add_item(&mut self, product: &Product, now: DateTime<Utc>) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(WishlistItem {
            id: product.id.clone(),
            product: product.clone(),
            date_added: now,
        });
        true
    }

    /// Removes the entry for `product_id`. Returns false if there was none.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *product_id);
        self.items.len() != before
    }

    /// Returns true if `product_id` is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| item.id == *product_id)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Saved entries, oldest first.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops duplicate entries from untrusted persisted state, keeping the
    /// first occurrence of each product.
    #[must_use]
    pub fn deduplicated(self) -> Self {
        let mut wishlist = Self::new();
        for item in self.items {
            if !wishlist.contains(&item.id) {
                wishlist.items.push(item);
            }
        }
        wishlist
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use furnistore_test_support::product;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_add_item_records_date_added() {
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add_item(&product("chair", 1_000), at(9)));

        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.items()[0].date_added, at(9));
        assert!(wishlist.contains(&ProductId::from("chair")));
    }

    #[test]
    fn test_duplicate_add_returns_false_and_keeps_original_entry() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(&product("chair", 1_000), at(9));
        let before = wishlist.clone();

        assert!(!wishlist.add_item(&product("chair", 1_500), at(11)));

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_remove_item_reports_whether_entry_existed() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(&product("chair", 1_000), at(9));

        assert!(wishlist.remove_item(&ProductId::from("chair")));
        assert!(!wishlist.remove_item(&ProductId::from("chair")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_deduplicated_keeps_first_occurrence() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(&product("chair", 1_000), at(9));
        let mut doubled = wishlist.clone();
        doubled.items.push(WishlistItem {
            id: ProductId::from("chair"),
            product: product("chair", 9_999),
            date_added: at(12),
        });

        let cleaned = doubled.deduplicated();

        assert_eq!(cleaned, wishlist);
    }
}
