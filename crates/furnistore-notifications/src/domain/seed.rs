//! Sample feed shown the first time the admin console starts.

use chrono::{DateTime, Duration, Utc};
use furnistore_core::id::IdGenerator;

use super::aggregates::{Category, Notification, Priority};

/// Builds the mocked admin feed, newest first, relative to `now`.
#[must_use]
pub fn sample_notifications(now: DateTime<Utc>, ids: &dyn IdGenerator) -> Vec<Notification> {
    let entries = [
        (
            "New order received",
            "Order #1234 was placed for a Modern Oak Dining Table.",
            Category::Order,
            Priority::High,
            Duration::minutes(5),
            false,
        ),
        (
            "Low stock warning",
            "Scandinavian Lounge Chair has only 3 units left.",
            Category::Product,
            Priority::Medium,
            Duration::hours(1),
            false,
        ),
        (
            "New customer registration",
            "Sarah Johnson created an account.",
            Category::Customer,
            Priority::Low,
            Duration::hours(3),
            true,
        ),
        (
            "Payment gateway maintenance",
            "Scheduled maintenance tonight between 02:00 and 03:00 UTC.",
            Category::System,
            Priority::Medium,
            Duration::days(1),
            true,
        ),
    ];
    entries
        .into_iter()
        .map(
            |(title, description, category, priority, age, read)| Notification {
                id: ids.next_id(),
                title: title.to_owned(),
                description: description.to_owned(),
                category,
                timestamp: now - age,
                read,
                priority,
            },
        )
        .collect()
}
