//! Catalog fixtures.

use furnistore_core::product::Product;
use rust_decimal::Decimal;

/// A product priced at `cents` hundredths of the store currency.
#[must_use]
pub fn product(id: &str, cents: i64) -> Product {
    Product::new(id, format!("Product {id}"), Decimal::new(cents, 2))
}

/// Like [`product`], tagged with a catalog category.
#[must_use]
pub fn product_in(id: &str, cents: i64, category: &str) -> Product {
    Product {
        category: Some(category.to_owned()),
        ..product(id, cents)
    }
}
