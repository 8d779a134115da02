//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use furnistore_cart::application::store::CartStore;
use furnistore_core::clock::SharedClock;
use furnistore_core::error::DomainError;
use furnistore_core::id::SharedIdGenerator;
use furnistore_core::storage::SharedStorage;
use furnistore_notifications::application::store::NotificationStore;
use furnistore_notifications::domain::seed::sample_notifications;
use furnistore_orders::application::store::OrderStore;
use furnistore_session::application::store::{SessionDeps, SessionStore};
use furnistore_session::domain::aggregates::StoreSettings;
use furnistore_session::domain::credentials::MockCredentialVerifier;
use furnistore_session::domain::stats::MockStatsProvider;
use furnistore_wishlist::application::store::WishlistStore;

use crate::error::ApiError;

/// Application state shared across all request handlers.
///
/// Each store sits behind its own mutex. Handlers that need two stores lock
/// the cart before the order store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shopping cart.
    pub cart: Arc<Mutex<CartStore>>,
    /// Saved products.
    pub wishlist: Arc<Mutex<WishlistStore>>,
    /// Admin session.
    pub session: Arc<Mutex<SessionStore>>,
    /// Admin notification feed.
    pub notifications: Arc<Mutex<NotificationStore>>,
    /// Placed orders.
    pub orders: Arc<Mutex<OrderStore>>,
}

impl AppState {
    /// Loads every store from `storage` and initializes the session.
    #[must_use]
    pub fn new(
        storage: SharedStorage,
        clock: SharedClock,
        ids: SharedIdGenerator,
        settings: StoreSettings,
    ) -> Self {
        let cart = CartStore::load(storage.clone());
        let wishlist = WishlistStore::load(storage.clone(), clock.clone());
        let mut session = SessionStore::new(
            storage.clone(),
            SessionDeps {
                clock: clock.clone(),
                verifier: Arc::new(MockCredentialVerifier),
                stats: Arc::new(MockStatsProvider),
            },
            settings,
        );
        session.initialize();
        let notifications = NotificationStore::load(
            storage.clone(),
            clock.clone(),
            ids.clone(),
            sample_notifications,
        );
        let orders = OrderStore::load(storage, clock, ids);

        Self {
            cart: Arc::new(Mutex::new(cart)),
            wishlist: Arc::new(Mutex::new(wishlist)),
            session: Arc::new(Mutex::new(session)),
            notifications: Arc::new(Mutex::new(notifications)),
            orders: Arc::new(Mutex::new(orders)),
        }
    }
}

/// Locks a store, mapping a poisoned mutex to an infrastructure error.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a previous holder panicked.
pub fn lock<T>(store: &Mutex<T>) -> Result<MutexGuard<'_, T>, ApiError> {
    store
        .lock()
        .map_err(|_| ApiError(DomainError::Infrastructure("store lock poisoned".into())))
}
