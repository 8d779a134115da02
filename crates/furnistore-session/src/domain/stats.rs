//! Dashboard statistics shown to signed-in admins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Revenue to date.
    pub total_revenue: Decimal,
    /// Orders to date.
    pub total_orders: u64,
    /// Registered customers.
    pub total_customers: u64,
    /// Products in the catalog.
    pub total_products: u64,
    /// Revenue change over the previous period, in percent.
    pub revenue_growth: Decimal,
    /// Order count change over the previous period, in percent.
    pub orders_growth: Decimal,
}

/// Supplies dashboard statistics on sign-in.
pub trait StatsProvider: Send + Sync {
    /// Returns the current figures.
    fn dashboard_stats(&self) -> DashboardStats;
}

/// Returns the same mocked figures every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStatsProvider;

impl StatsProvider for MockStatsProvider {
    fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_revenue: Decimal::new(12_543_050, 2),
            total_orders: 1_234,
            total_customers: 856,
            total_products: 342,
            revenue_growth: Decimal::new(125, 1),
            orders_growth: Decimal::new(82, 1),
        }
    }
}
