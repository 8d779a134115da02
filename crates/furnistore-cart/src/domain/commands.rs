//! Commands for the shopping cart.

use furnistore_core::command::Command;
use furnistore_core::product::Product;
use serde::Deserialize;

use super::aggregates::{LineItemId, Variant};

fn one() -> u32 {
    1
}

/// Command to add a product to the cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItem {
    /// Product snapshot to add.
    pub product: Product,
    /// Units to add; defaults to one.
    #[serde(default = "one")]
    pub quantity: u32,
    /// Selected size and color.
    #[serde(flatten)]
    pub variant: Variant,
}

impl AddItem {
    /// One unit of `product` with no variant selected.
    #[must_use]
    pub fn single(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            variant: Variant::default(),
        }
    }
}

/// Command to remove a line from the cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItem {
    /// The line to remove.
    pub line_item_id: LineItemId,
}

/// Command to set the quantity of a line. Zero or less removes the line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantity {
    /// The line to update.
    pub line_item_id: LineItemId,
    /// New absolute quantity.
    pub quantity: i64,
}

impl Command for AddItem {
    fn command_type(&self) -> &'static str {
        "cart.add_item"
    }
}

impl Command for RemoveItem {
    fn command_type(&self) -> &'static str {
        "cart.remove_item"
    }
}

impl Command for UpdateQuantity {
    fn command_type(&self) -> &'static str {
        "cart.update_quantity"
    }
}
