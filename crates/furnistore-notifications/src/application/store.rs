//! Notification store: owns the feed and mirrors it to storage.

use chrono::{DateTime, Utc};
use furnistore_core::clock::SharedClock;
use furnistore_core::command::Command;
use furnistore_core::id::{IdGenerator, SharedIdGenerator};
use furnistore_core::persistence::PersistenceMirror;
use furnistore_core::storage::SharedStorage;
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::{Notification, NotificationFeed};
use crate::domain::commands::AddNotification;

/// Storage slot holding the persisted feed.
pub const NOTIFICATIONS_SLOT: &str = "furnistore.notifications";

/// The admin notification feed with write-through persistence. Every
/// mutation rewrites [`NOTIFICATIONS_SLOT`].
pub struct NotificationStore {
    feed: NotificationFeed,
    clock: SharedClock,
    ids: SharedIdGenerator,
    mirror: PersistenceMirror,
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}

impl NotificationStore {
    /// Creates the store from the persisted feed. When nothing valid is
    /// stored, `seed` is called with the store's clock and id generator and
    /// must return the initial feed, newest first.
    #[must_use]
    pub fn load(
        storage: SharedStorage,
        clock: SharedClock,
        ids: SharedIdGenerator,
        seed: impl FnOnce(DateTime<Utc>, &dyn IdGenerator) -> Vec<Notification>,
    ) -> Self {
        let mirror = PersistenceMirror::new(storage);
        let feed = mirror
            .load::<NotificationFeed>(NOTIFICATIONS_SLOT)
            .unwrap_or_else(|| {
                NotificationFeed::from_newest_first(seed(clock.now(), ids.as_ref()))
            });
        debug!(
            entries = feed.notifications().len(),
            unread = feed.unread_count(),
            "notification store initialized"
        );
        let store = Self {
            feed,
            clock,
            ids,
            mirror,
        };
        store.persist();
        store
    }

    /// Returns the current feed.
    #[must_use]
    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    /// Number of unread entries.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.feed.unread_count()
    }

    /// Publishes a notification at the front of the feed under a fresh id.
    pub fn add_notification(&mut self, command: &AddNotification) -> Notification {
        let id = self.fresh_id();
        let added = self.feed.add(command, id, self.clock.now()).clone();
        debug!(command = command.command_type(), %id, "published notification");
        self.persist();
        added
    }

    /// Marks entry `id` read; unknown ids are ignored.
    pub fn mark_as_read(&mut self, id: Uuid) {
        if self.feed.mark_as_read(id) {
            self.persist();
        }
    }

    /// Marks every entry read.
    pub fn mark_all_as_read(&mut self) {
        let changed = self.feed.mark_all_as_read();
        debug!(changed, "marked all notifications read");
        self.persist();
    }

    /// Deletes entry `id`; unknown ids are ignored.
    pub fn delete_notification(&mut self, id: Uuid) {
        if self.feed.delete(id) {
            debug!(%id, "deleted notification");
            self.persist();
        }
    }

    /// Draws ids until one is unused. The generator must not repeat forever.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = self.ids.next_id();
            if !self.feed.contains(id) {
                return id;
            }
        }
    }

    fn persist(&self) {
        self.mirror.save(NOTIFICATIONS_SLOT, &self.feed);
    }
}
