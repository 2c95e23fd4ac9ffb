//! Orders API

use shared::models::OrderStats;
use shared::order::{
    AdditionalChargeRequest, DiscountRequest, Order, OrderItem, OrderItemsUpdate,
};
use shared::request::OrderFilters;
use shared::response::{ApiResponse, PagedResponse};

use crate::{ClientError, ClientResult, HttpClient};

impl HttpClient {
    // ========== Orders API ==========

    /// List orders matching the given filters, one page at a time
    pub async fn get_orders(&self, filters: &OrderFilters) -> ClientResult<PagedResponse<Order>> {
        self.get_with_query("/orders", &filters.to_query_pairs())
            .await
    }

    /// Fetch a single order
    pub async fn get_order_by_id(&self, order_id: &str) -> ClientResult<Order> {
        self.get::<ApiResponse<Order>>(&format!("/orders/{order_id}"))
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Replace an order's item list
    ///
    /// The caller builds the new list with the line-item helpers in
    /// `shared::order`; the server recomputes and returns the
    /// authoritative totals.
    pub async fn update_order_items(
        &self,
        order_id: &str,
        items: Vec<OrderItem>,
    ) -> ClientResult<Order> {
        self.patch::<ApiResponse<Order>, _>(
            &format!("/orders/items/{order_id}"),
            &OrderItemsUpdate { items },
        )
        .await
        .and_then(Self::unwrap_envelope)
    }

    /// Apply a discount to an order (replaces any existing one)
    pub async fn apply_discount(
        &self,
        order_id: &str,
        discount: &DiscountRequest,
    ) -> ClientResult<Order> {
        if discount.value < 0.0 {
            return Err(ClientError::Validation(format!(
                "discount value must be non-negative, got {}",
                discount.value
            )));
        }
        self.patch::<ApiResponse<Order>, _>(&format!("/orders/discount/{order_id}"), discount)
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Remove an order's discount
    pub async fn remove_discount(&self, order_id: &str) -> ClientResult<Order> {
        self.delete::<ApiResponse<Order>>(&format!("/orders/discount/{order_id}"))
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Add an additional charge to an order
    pub async fn add_additional_charge(
        &self,
        order_id: &str,
        charge: &AdditionalChargeRequest,
    ) -> ClientResult<Order> {
        if charge.description.trim().is_empty() {
            return Err(ClientError::Validation(
                "charge description must not be empty".to_string(),
            ));
        }
        self.post::<ApiResponse<Order>, _>(
            &format!("/orders/additional-charges/{order_id}"),
            charge,
        )
        .await
        .and_then(Self::unwrap_envelope)
    }

    /// Remove one additional charge from an order
    pub async fn remove_additional_charge(
        &self,
        order_id: &str,
        charge_id: &str,
    ) -> ClientResult<Order> {
        self.delete::<ApiResponse<Order>>(&format!(
            "/orders/additional-charges/{order_id}/{charge_id}"
        ))
        .await
        .and_then(Self::unwrap_envelope)
    }

    /// Remove every additional charge from an order
    pub async fn clear_additional_charges(&self, order_id: &str) -> ClientResult<Order> {
        self.delete::<ApiResponse<Order>>(&format!("/orders/additional-charges/{order_id}"))
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Aggregate statistics for one restaurant, optionally date-bounded
    pub async fn get_order_stats(
        &self,
        restaurant: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ClientResult<OrderStats> {
        let mut query = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start.to_string()));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end.to_string()));
        }
        self.get_with_query::<ApiResponse<OrderStats>>(
            &format!("/orders/stats/{restaurant}"),
            &query,
        )
        .await
        .and_then(Self::unwrap_envelope)
    }
}
