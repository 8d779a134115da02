//! Order store: owns the order book and mirrors it to storage.

use furnistore_cart::domain::aggregates::CartSnapshot;
use furnistore_core::clock::SharedClock;
use furnistore_core::command::Command;
use furnistore_core::error::DomainError;
use furnistore_core::id::SharedIdGenerator;
use furnistore_core::persistence::PersistenceMirror;
use furnistore_core::storage::SharedStorage;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::aggregates::{Order, OrderBook, OrderStatus};
use crate::domain::commands::{PlaceOrder, UpdateOrderStatus};

/// Storage slot holding the persisted order book.
pub const ORDERS_SLOT: &str = "furnistore.orders";

/// Placed orders with write-through persistence.
pub struct OrderStore {
    book: OrderBook,
    clock: SharedClock,
    ids: SharedIdGenerator,
    mirror: PersistenceMirror,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("orders", &self.book.orders().len())
            .finish_non_exhaustive()
    }
}

impl OrderStore {
    /// Creates the store, restoring the order book from `storage` when a
    /// valid slot exists.
    #[must_use]
    pub fn load(storage: SharedStorage, clock: SharedClock, ids: SharedIdGenerator) -> Self {
        let mirror = PersistenceMirror::new(storage);
        let book = mirror.load::<OrderBook>(ORDERS_SLOT).unwrap_or_default();
        Self {
            book,
            clock,
            ids,
            mirror,
        }
    }

    /// Places an order for the lines in `cart`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the cart is empty or the
    /// customer email is blank.
    pub fn place_order(
        &mut self,
        command: &PlaceOrder,
        cart: &CartSnapshot,
    ) -> Result<Order, DomainError> {
        let id = self.fresh_id();
        let order = Order::place(id, command, cart, self.clock.now())?;
        info!(
            command = command.command_type(),
            order_id = %order.id,
            total = %order.total,
            "order placed"
        );
        self.book.insert(order.clone());
        self.persist();
        Ok(order)
    }

    /// Moves an order to another status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown order and
    /// `DomainError::Validation` for a move the lifecycle forbids.
    pub fn update_status(&mut self, command: &UpdateOrderStatus) -> Result<Order, DomainError> {
        let order = self
            .book
            .update_status(command.order_id, command.status, self.clock.now())?
            .clone();
        info!(
            command = command.command_type(),
            order_id = %order.id,
            status = ?order.status,
            "order status changed"
        );
        self.persist();
        Ok(order)
    }

    /// Cancels an order that has not shipped.
    ///
    /// # Errors
    ///
    /// Same as [`OrderStore::update_status`].
    pub fn cancel(&mut self, order_id: Uuid) -> Result<Order, DomainError> {
        self.update_status(&UpdateOrderStatus {
            order_id,
            status: OrderStatus::Cancelled,
        })
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.book.orders()
    }

    /// Returns order `id`, if present.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Order> {
        self.book.get(id)
    }

    /// Orders currently in `status`, newest first.
    #[must_use]
    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.book.by_status(status).collect()
    }

    /// Sum of totals over orders that were not cancelled.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.book.revenue()
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = self.ids.next_id();
            if !self.book.contains(id) {
                return id;
            }
        }
    }

    fn persist(&self) {
        self.mirror.save(ORDERS_SLOT, &self.book);
    }
}
