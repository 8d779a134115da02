//! Commands for the order store.

use furnistore_core::command::Command;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregates::OrderStatus;

/// Where an order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,
    /// Street line.
    pub line1: String,
    /// Optional second street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
}

/// Command to turn the current cart into an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    /// Email the order confirmation goes to.
    pub customer_email: String,
    /// Delivery address.
    pub shipping_address: ShippingAddress,
}

impl Command for PlaceOrder {
    fn command_type(&self) -> &'static str {
        "orders.place"
    }
}

/// Command to move an order to another status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatus {
    /// The order to update.
    pub order_id: Uuid,
    /// The status to move to.
    pub status: OrderStatus,
}

impl Command for UpdateOrderStatus {
    fn command_type(&self) -> &'static str {
        "orders.update_status"
    }
}
