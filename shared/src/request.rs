//! Request types for the shared crate
//!
//! Query parameter types for the remote API's list endpoints

use crate::order::OrderStatus;

/// Filters accepted by the orders list endpoint
///
/// Every field is optional; unset fields are omitted from the query
/// string entirely.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Restaurant number
    pub restaurant: Option<String>,
    pub status: Option<OrderStatus>,
    pub table_id: Option<String>,
    pub waiter_id: Option<String>,
    /// Inclusive range start (YYYY-MM-DD or RFC 3339)
    pub start_date: Option<String>,
    /// Inclusive range end
    pub end_date: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Items per page
    pub limit: Option<u32>,
}

impl OrderFilters {
    /// Filters scoped to a single restaurant
    pub fn for_restaurant(restaurant: impl Into<String>) -> Self {
        Self {
            restaurant: Some(restaurant.into()),
            ..Default::default()
        }
    }

    /// Set the order status filter
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the table filter
    pub fn with_table(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }

    /// Set the waiter filter
    pub fn with_waiter(mut self, waiter_id: impl Into<String>) -> Self {
        self.waiter_id = Some(waiter_id.into());
        self
    }

    /// Set the date range filter
    pub fn with_date_range(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Set page number and page size
    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Serialize to query pairs, skipping unset fields
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(restaurant) = &self.restaurant {
            pairs.push(("restaurant", restaurant.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(table_id) = &self.table_id {
            pairs.push(("tableId", table_id.clone()));
        }
        if let Some(waiter_id) = &self.waiter_id {
            pairs.push(("waiterId", waiter_id.clone()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("startDate", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("endDate", end_date.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(OrderFilters::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_filters_use_api_field_names() {
        let filters = OrderFilters::for_restaurant("R-42")
            .with_status(OrderStatus::Pending)
            .with_table("t1")
            .with_date_range("2025-01-01", "2025-01-31")
            .with_page(2, 50);

        let pairs = filters.to_query_pairs();
        assert_eq!(pairs[0], ("restaurant", "R-42".to_string()));
        assert!(pairs.contains(&("status", "pending".to_string())));
        assert!(pairs.contains(&("tableId", "t1".to_string())));
        assert!(pairs.contains(&("startDate", "2025-01-01".to_string())));
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("limit", "50".to_string())));
    }
}
