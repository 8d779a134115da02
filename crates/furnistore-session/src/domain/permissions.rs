//! Permission identifiers granted to admin users.

/// Create, edit and delete catalog products.
pub const MANAGE_PRODUCTS: &str = "manage_products";
/// View and advance orders.
pub const MANAGE_ORDERS: &str = "manage_orders";
/// View and edit customer records.
pub const MANAGE_CUSTOMERS: &str = "manage_customers";
/// View dashboard analytics.
pub const VIEW_ANALYTICS: &str = "view_analytics";
/// Change store settings.
pub const MANAGE_SETTINGS: &str = "manage_settings";
/// Manage other admin accounts.
pub const MANAGE_USERS: &str = "manage_users";

/// Every permission, in display order.
pub const ALL: [&str; 6] = [
    MANAGE_PRODUCTS,
    MANAGE_ORDERS,
    MANAGE_CUSTOMERS,
    VIEW_ANALYTICS,
    MANAGE_SETTINGS,
    MANAGE_USERS,
];
