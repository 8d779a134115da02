//! Session store: owns the admin session and mirrors it to storage.

use std::sync::Arc;

use furnistore_core::clock::SharedClock;
use furnistore_core::command::Command;
use furnistore_core::persistence::PersistenceMirror;
use furnistore_core::storage::SharedStorage;
use tracing::{debug, info, warn};

use crate::domain::aggregates::{AdminUser, PersistedSession, Session, StoreSettings};
use crate::domain::commands::Login;
use crate::domain::credentials::CredentialVerifier;
use crate::domain::stats::StatsProvider;

/// Storage slot holding the signed-in admin and settings.
pub const SESSION_SLOT: &str = "furnistore.admin_session";

/// Collaborators a `SessionStore` needs besides storage.
#[derive(Clone)]
pub struct SessionDeps {
    /// Time source for last-login stamps.
    pub clock: SharedClock,
    /// Checks sign-in credentials.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Supplies dashboard figures.
    pub stats: Arc<dyn StatsProvider>,
}

/// The admin session with write-through persistence.
pub struct SessionStore {
    session: Session,
    deps: SessionDeps,
    mirror: PersistenceMirror,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates an uninitialized store. Call [`SessionStore::initialize`]
    /// before serving requests.
    #[must_use]
    pub fn new(storage: SharedStorage, deps: SessionDeps, settings: StoreSettings) -> Self {
        Self {
            session: Session::uninitialized(settings),
            deps,
            mirror: PersistenceMirror::new(storage),
        }
    }

    /// Reads the persisted session once. Later calls do nothing.
    pub fn initialize(&mut self) {
        if !self.session.is_loading() {
            return;
        }
        let restored = self
            .mirror
            .load::<PersistedSession>(SESSION_SLOT)
            .map(|persisted| (persisted, self.deps.stats.dashboard_stats()));
        self.session.restore(restored);
        debug!(status = ?self.session.status(), "session store initialized");
    }

    /// Returns the current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Signs in. Returns false and records an error message if the
    /// credentials are rejected.
    pub fn login(&mut self, command: &Login) -> bool {
        let Some(admin) = self.deps.verifier.verify(&command.email, &command.password) else {
            warn!(command = command.command_type(), email = %command.email, "sign-in rejected");
            self.session.reject_sign_in();
            return false;
        };
        let user = AdminUser::signed_in(admin, self.deps.clock.now());
        info!(command = command.command_type(), user_id = %user.id, "admin signed in");
        self.session.sign_in(user, self.deps.stats.dashboard_stats());
        self.persist();
        true
    }

    /// Signs out and deletes the persisted session.
    pub fn logout(&mut self) {
        self.mirror.remove(SESSION_SLOT);
        self.session.sign_out();
        info!("admin signed out");
    }

    /// Returns true iff an admin is signed in and holds `permission`.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.session.has_permission(permission)
    }

    /// Replaces the store settings. A signed-in session rewrites its slot;
    /// an anonymous one has no slot and only updates memory.
    pub fn update_settings(&mut self, settings: StoreSettings) {
        debug!(currency = %settings.currency, "updating store settings");
        self.session.set_settings(settings);
        self.persist();
    }

    /// Fetches fresh dashboard figures for a signed-in session.
    pub fn refresh_stats(&mut self) {
        self.session.set_stats(self.deps.stats.dashboard_stats());
    }

    /// Clears the last sign-in error.
    pub fn clear_error(&mut self) {
        self.session.clear_error();
    }

    fn persist(&self) {
        if let Some(persisted) = self.session.to_persisted() {
            self.mirror.save(SESSION_SLOT, &persisted);
        }
    }
}
