//! KPI Model (核心指标)

use serde::{Deserialize, Serialize};

/// Raw KPI totals as returned by the database in one round trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct KpiTotals {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub avg_order_value: f64,
    pub unique_customers: i64,
    /// Sum of line-item quantities over all orders
    pub total_items: i64,
}

/// KPI payload served by `GET /api/kpis`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Kpis {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub avg_order_value: f64,
    pub unique_customers: i64,
    pub items_per_order: f64,
}

impl From<KpiTotals> for Kpis {
    fn from(totals: KpiTotals) -> Self {
        // Zero orders yields zero items per order, not NaN
        let items_per_order = if totals.total_orders > 0 {
            totals.total_items as f64 / totals.total_orders as f64
        } else {
            0.0
        };

        Self {
            total_revenue: totals.total_revenue,
            total_orders: totals.total_orders,
            avg_order_value: totals.avg_order_value,
            unique_customers: totals.unique_customers,
            items_per_order,
        }
    }
}
