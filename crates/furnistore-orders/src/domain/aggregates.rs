//! Aggregate root for placed orders.

use chrono::{DateTime, Utc};
use furnistore_cart::domain::aggregates::{CartSnapshot, LineItem};
use furnistore_core::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::{PlaceOrder, ShippingAddress};

/// Fulfilment stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the warehouse.
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Called off before shipping.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if an order may move from `self` to `next`.
    ///
    /// Orders advance one step at a time and can only be cancelled before
    /// they ship. Delivered and cancelled are terminal.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing | Self::Cancelled)
                | (Self::Processing, Self::Shipped | Self::Cancelled)
                | (Self::Shipped, Self::Delivered)
        )
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    pub id: Uuid,
    /// Lines copied from the cart at checkout.
    pub items: Vec<LineItem>,
    /// Sum of line subtotals.
    pub total: Decimal,
    /// Sum of line quantities.
    pub item_count: u64,
    /// Email the order confirmation goes to.
    pub customer_email: String,
    /// Delivery address.
    pub shipping_address: ShippingAddress,
    /// Fulfilment stage.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order from a cart snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the cart is empty or the
    /// customer email is blank.
    pub fn place(
        id: Uuid,
        command: &PlaceOrder,
        cart: &CartSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if cart.items.is_empty() {
            return Err(DomainError::Validation(
                "cannot place an order for an empty cart".into(),
            ));
        }
        if command.customer_email.trim().is_empty() {
            return Err(DomainError::Validation("customer email is required".into()));
        }
        Ok(Self {
            id,
            items: cart.items.clone(),
            total: cart.items.iter().map(LineItem::subtotal).sum(),
            item_count: cart.items.iter().map(|line| u64::from(line.quantity)).sum(),
            customer_email: command.customer_email.trim().to_owned(),
            shipping_address: command.shipping_address.clone(),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}

/// The aggregate root for all placed orders, newest first. Persisted as a
/// plain list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Records a freshly placed order at the front of the book.
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Moves order `id` to `status`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if there is no such order and
    /// `DomainError::Validation` if the lifecycle forbids the move.
    pub fn update_status(
        &mut self,
        id: Uuid,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<&Order, DomainError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("order {id}")))?;
        if !order.status.can_transition_to(status) {
            return Err(DomainError::Validation(format!(
                "order {id} cannot move from {:?} to {status:?}",
                order.status
            )));
        }
        order.status = status;
        order.updated_at = now;
        Ok(&*order)
    }

    /// Returns true if an order with `id` exists.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.orders.iter().any(|order| order.id == id)
    }

    /// Returns order `id`, if present.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders currently in `status`, newest first.
    pub fn by_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |order| order.status == status)
    }

    /// Sum of totals over orders that were not cancelled.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use furnistore_cart::domain::aggregates::{Cart, Variant};
    use furnistore_test_support::product;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn place_command() -> PlaceOrder {
        PlaceOrder {
            customer_email: " jane@example.com ".to_owned(),
            shipping_address: ShippingAddress {
                name: "Jane Doe".to_owned(),
                line1: "1 Main St".to_owned(),
                line2: None,
                city: "Springfield".to_owned(),
                postal_code: "12345".to_owned(),
                country: "US".to_owned(),
            },
        }
    }

    fn cart_with_two_chairs() -> CartSnapshot {
        let mut cart = Cart::new();
        cart.add_item(&product("chair", 4_999), 2, &Variant::default());
        cart.snapshot()
    }

    #[test]
    fn test_place_copies_cart_lines_and_totals() {
        let order = Order::place(
            Uuid::from_u128(1),
            &place_command(),
            &cart_with_two_chairs(),
            now(),
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Decimal::new(9_998, 2));
        assert_eq!(order.item_count, 2);
        assert_eq!(order.customer_email, "jane@example.com");
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_place_rejects_empty_cart() {
        let result = Order::place(
            Uuid::from_u128(1),
            &place_command(),
            &Cart::new().snapshot(),
            now(),
        );

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("empty cart")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_lifecycle_allows_only_forward_steps_and_early_cancel() {
        use OrderStatus::{Cancelled, Delivered, Pending, Processing, Shipped};

        assert!(Pending.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Processing.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Shipped));
        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Processing));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_update_status_stamps_time_and_reports_errors() {
        let mut book = OrderBook::default();
        let id = Uuid::from_u128(7);
        book.insert(Order::place(id, &place_command(), &cart_with_two_chairs(), now()).unwrap());
        let later = now() + Duration::hours(2);

        let updated = book.update_status(id, OrderStatus::Processing, later).unwrap();
        assert_eq!(updated.updated_at, later);

        assert!(matches!(
            book.update_status(id, OrderStatus::Delivered, later),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            book.update_status(Uuid::from_u128(8), OrderStatus::Shipped, later),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_revenue_excludes_cancelled_orders() {
        let mut book = OrderBook::default();
        for n in 1..=2 {
            book.insert(
                Order::place(Uuid::from_u128(n), &place_command(), &cart_with_two_chairs(), now())
                    .unwrap(),
            );
        }

        book.update_status(Uuid::from_u128(1), OrderStatus::Cancelled, now())
            .unwrap();

        assert_eq!(book.revenue(), Decimal::new(9_998, 2));
        assert_eq!(book.by_status(OrderStatus::Pending).count(), 1);
        assert_eq!(book.orders()[0].id, Uuid::from_u128(2));
    }
}
