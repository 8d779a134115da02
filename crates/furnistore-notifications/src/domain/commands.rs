//! Commands for the notification feed.

use furnistore_core::command::Command;
use serde::Deserialize;

use super::aggregates::{Category, Priority};

/// Command to publish a notification. Id, timestamp and read flag are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct AddNotification {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// What the notification is about. Read from `type`, the key the feed
    /// serializes it under; `category` is accepted too.
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    /// How urgent it is.
    #[serde(default)]
    pub priority: Priority,
}

impl Command for AddNotification {
    fn command_type(&self) -> &'static str {
        "notifications.add"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_notification_reads_type_like_the_feed_writes_it() {
        let command: AddNotification = serde_json::from_value(serde_json::json!({
            "title": "Low stock",
            "description": "Oak Shelf has 2 units left.",
            "type": "product"
        }))
        .unwrap();

        assert_eq!(command.category, Category::Product);
        assert_eq!(command.priority, Priority::Medium);
    }

    #[test]
    fn test_add_notification_accepts_category_key() {
        let command: AddNotification = serde_json::from_value(serde_json::json!({
            "title": "Maintenance",
            "description": "Checkout is read-only tonight.",
            "category": "system",
            "priority": "low"
        }))
        .unwrap();

        assert_eq!(command.category, Category::System);
        assert_eq!(command.priority, Priority::Low);
    }
}
