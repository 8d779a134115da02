//! Aggregate root for the notification feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::AddNotification;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Order activity.
    Order,
    /// Catalog and stock activity.
    Product,
    /// Customer activity.
    Customer,
    /// Platform messages.
    System,
    /// Something needs attention.
    Alert,
}

/// How urgent a notification is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational.
    Low,
    /// Worth a look.
    #[default]
    Medium,
    /// Act now.
    High,
}

/// A single feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// What the notification is about.
    #[serde(rename = "type")]
    pub category: Category,
    /// When it was published.
    pub timestamp: DateTime<Utc>,
    /// Whether an admin has seen it.
    pub read: bool,
    /// How urgent it is.
    pub priority: Priority,
}

/// The aggregate root for the feed. Entries are kept newest first; the
/// unread count is derived on demand. Persisted as a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    /// Creates a feed from entries already in newest-first order.
    #[must_use]
    pub fn from_newest_first(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Publishes `command` as an unread entry at the front of the feed.
    pub fn add(
        &mut self,
        command: &AddNotification,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> &Notification {
        self.notifications.insert(
            0,
            Notification {
                id,
                title: command.title.clone(),
                description: command.description.clone(),
                category: command.category,
                timestamp: now,
                read: false,
                priority: command.priority,
            },
        );
        &self.notifications[0]
    }

    /// Marks entry `id` read. Returns false if there is no such entry.
    pub fn mark_as_read(&mut self, id: Uuid) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Marks every entry read. Returns how many were unread.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    /// Deletes entry `id`. Returns false if there is no such entry.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Returns true if an entry with `id` exists.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.notifications.iter().any(|n| n.id == id)
    }

    /// Returns entry `id`, if present.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// All entries, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Entries of `category`, newest first.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |n| n.category == category)
    }

    /// Number of unread entries.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
