//! Statistics Model

use serde::{Deserialize, Serialize};

/// Aggregate order statistics for one restaurant
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: i64,
    /// Revenue in currency unit
    pub total_revenue: f64,
    pub avg_order_value: f64,
    pub pending_orders: i64,
    pub preparing_orders: i64,
    pub paid_orders: i64,
    pub canceled_orders: i64,
    /// Sum of discounts granted over the range
    pub total_discount: f64,
    /// Sum of additional charges over the range
    pub total_additional_charges: f64,
}
